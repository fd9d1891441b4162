//! Read-only summary views over the catalog.
//!
//! Two projections, both computed on demand (no cached state): a grouped
//! human-readable briefing for prompting, and a flattened selection list
//! with per-capability parameter hints for automated tool choice.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Internal-only ids kept out of the briefing.
const BRIEFING_EXCLUDE: &[&str] = &["check-status"];

/// Core capabilities, in briefing order.
const CORE_GROUP: &[&str] = &[
    "news",
    "signal",
    "sentiment",
    "event",
    "browse",
    "x-search",
    "exa-search",
    "research",
    "gems",
    "x-kol",
    "crypto-kol",
    "trending-headline",
    "sundown-digest",
    "analytics-summary",
];

/// Partner capabilities, in briefing order.
const PARTNER_GROUP: &[&str] = &[
    "smart-money",
    "token-god-mode",
    "dexscreener",
    "trending-jupiter",
    "jupiter-swap-order",
    "token-report",
    "token-statistic",
    "token-risk-alerts",
    "bubblemaps-maps",
    "binance-correlation",
    "pump",
    "coingecko-simple-price",
    "coingecko-onchain-token-price",
    "coingecko-search-pools",
    "coingecko-trending-pools",
    "coingecko-onchain-token",
];

/// Grouped human-readable capability list, one `name: description` bullet
/// per capability. Memecoin screens are detected by id prefix; ids in
/// [`BRIEFING_EXCLUDE`] are dropped; ids missing from the catalog are
/// silently skipped.
pub fn capability_briefing(catalog: &Catalog) -> Vec<String> {
    let fmt = |ids: &mut dyn Iterator<Item = &str>| -> Vec<String> {
        ids.filter(|id| !BRIEFING_EXCLUDE.contains(id))
            .filter_map(|id| catalog.lookup(id))
            .map(|cap| format!("• {}: {}", cap.name, cap.description))
            .collect()
    };

    let memecoin_ids: Vec<&str> = catalog
        .iter()
        .filter(|cap| cap.id.starts_with("memecoin-"))
        .map(|cap| cap.id.as_str())
        .collect();

    let mut lines = vec![
        "Available capabilities (use these when the user asks for data):".to_string(),
        String::new(),
        "Core:".to_string(),
    ];
    lines.extend(fmt(&mut CORE_GROUP.iter().copied()));
    lines.push(String::new());
    lines.push(
        "Partner (Nansen, DexScreener, Jupiter, Rugcheck, Bubblemaps, Binance, Workfun):"
            .to_string(),
    );
    lines.extend(fmt(&mut PARTNER_GROUP.iter().copied()));
    lines.push(String::new());
    lines.push("Memecoin screens:".to_string());
    lines.extend(fmt(&mut memecoin_ids.iter().copied()));

    lines
}

/// One capability in the flattened selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Hand-authored hint describing expected parameters. Static text keyed
    /// by id, not derived from match rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_hint: Option<String>,
}

/// Every capability as `{id, name, description}` plus the params hint for
/// the fixed subset that takes parameters.
pub fn selection_entries(catalog: &Catalog) -> Vec<SelectionEntry> {
    catalog
        .iter()
        .map(|cap| SelectionEntry {
            id: cap.id.clone(),
            name: cap.name.clone(),
            description: cap.description.clone(),
            params_hint: params_hint(&cap.id).map(str::to_string),
        })
        .collect()
}

fn params_hint(id: &str) -> Option<&'static str> {
    match id {
        "news" => Some("Optional params: ticker (BTC, ETH, SOL, or general)"),
        "signal" => Some(
            "Optional params: token (bitcoin, ethereum, solana) - use the token the user asked for",
        ),
        "exa-search" => Some(
            "Params: query (required) - search query from the user, e.g. \"bitcoin insight\", \"latest Nvidia news\"",
        ),
        "coingecko-simple-price" => Some(
            "Params: symbols (e.g. btc,eth,sol) or ids (e.g. bitcoin,ethereum); optional include_market_cap, include_24hr_vol, include_24hr_change",
        ),
        "coingecko-onchain-token-price" => Some(
            "Params: network (e.g. base, solana, eth), address (contract address, required; comma-separated for multiple)",
        ),
        "coingecko-search-pools" => Some("Params: query (required), network (e.g. solana, base)"),
        "coingecko-trending-pools" => {
            Some("Params: network (e.g. base, solana), optional duration (e.g. 5m)")
        }
        "coingecko-onchain-token" => Some(
            "Params: network (e.g. base, solana, eth), address (token contract address, required)",
        ),
        _ => None,
    }
}
