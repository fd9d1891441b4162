//! The capability catalog: every priced capability the dispatcher can select.
//!
//! Built once (typically via [`Catalog::builtin`]) and never mutated. Lookup
//! and alias resolution are O(1) hash lookups; "not found" is a normal
//! control-flow branch, not a fault.

use std::collections::HashMap;

use tg_protocol::{Capability, HttpVerb, Quote};

use crate::pricing::{self, PricingTier};

/// Immutable collection of capability descriptors, indexed by id and alias.
pub struct Catalog {
    entries: Vec<Capability>,
    /// Map from canonical id → index into `entries`.
    index: HashMap<String, usize>,
    /// Map from alias → canonical id. Many-to-one, never ambiguous.
    alias_index: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from a capability list.
    ///
    /// Panics on duplicate ids, on an alias claimed by two capabilities, or
    /// on an alias that collides with a canonical id — all three are
    /// configuration defects, caught at startup rather than tolerated.
    pub fn new(entries: Vec<Capability>) -> Self {
        let mut index = HashMap::new();
        for (i, cap) in entries.iter().enumerate() {
            let prev = index.insert(cap.id.clone(), i);
            assert!(prev.is_none(), "duplicate capability id: {}", cap.id);
        }

        let mut alias_index = HashMap::new();
        for cap in &entries {
            for alias in &cap.aliases {
                assert!(
                    !index.contains_key(alias.as_str()),
                    "alias '{alias}' collides with a canonical id"
                );
                let prev = alias_index.insert(alias.clone(), cap.id.clone());
                assert!(
                    prev.is_none(),
                    "alias '{alias}' is claimed by two capabilities"
                );
            }
        }

        tracing::debug!(capability_count = entries.len(), "capability catalog built");

        Self {
            entries,
            index,
            alias_index,
        }
    }

    /// Build the full production capability table at the given pricing tier.
    pub fn builtin(tier: PricingTier) -> Self {
        Self::new(builtin_entries(tier))
    }

    /// Look up a capability by canonical id.
    pub fn lookup(&self, id: &str) -> Option<&Capability> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Resolve an alternate identifier to its canonical id.
    ///
    /// Unknown candidates pass through unchanged — resolution is advisory,
    /// not validating; the catalog lookup is what rejects nonexistent ids.
    pub fn resolve_alias<'a>(&'a self, candidate: &'a str) -> &'a str {
        self.alias_index
            .get(candidate)
            .map(String::as_str)
            .unwrap_or(candidate)
    }

    /// Charged and display price for a capability, by canonical id.
    ///
    /// Returns the amounts stored on the entry; aggregate prices were summed
    /// once at construction and are never re-derived here.
    pub fn price_of(&self, id: &str) -> Option<Quote> {
        self.lookup(id).map(|cap| Quote {
            price: cap.price,
            display_price: cap.display_price,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full capability table. Charged prices are scaled to the tier once,
/// here; display prices are fixed production-facing costs.
fn builtin_entries(tier: PricingTier) -> Vec<Capability> {
    let standard = tier.apply(pricing::STANDARD);
    let check_status = tier.apply(pricing::CHECK_STATUS);
    let news = tier.apply(pricing::NEWS);
    let research = tier.apply(pricing::RESEARCH);
    let nansen = tier.apply(pricing::NANSEN);
    let nansen_premium = tier.apply(pricing::NANSEN_PREMIUM);
    let dexscreener = tier.apply(pricing::DEXSCREENER);
    let pump = tier.apply(pricing::PUMP);
    let jupiter_swap = tier.apply(pricing::JUPITER_SWAP);
    let coingecko = tier.apply(pricing::COINGECKO);
    let exa_search = tier.apply(pricing::EXA_SEARCH);

    // Aggregate: analytics-summary bundles dexscreener + token-statistic
    // + trending-jupiter + smart-money + binance correlation + the 9
    // memecoin screens. Summed once here; lookups return the stored value.
    let analytics_summary =
        dexscreener + standard + standard + nansen + standard + standard * 9;
    let display_analytics_summary = pricing::DISPLAY_STANDARD * 14;

    vec![
        // ===== Core =====
        Capability::new(
            "check-status",
            "/v2/check-status",
            HttpVerb::Get,
            check_status,
            pricing::DISPLAY_CHECK_STATUS,
            "Check API status",
            "Health check for API server status and connectivity",
        ),
        Capability::new(
            "news",
            "/v2/news",
            HttpVerb::Get,
            news,
            pricing::DISPLAY_STANDARD,
            "Crypto news",
            "Get latest crypto news and market updates (optional ticker: BTC, ETH, or \"general\")",
        ),
        Capability::new(
            "signal",
            "/v2/signal",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Trading signal",
            "Trading signal creation / signal data",
        ),
        Capability::new(
            "sentiment",
            "/v2/sentiment",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Sentiment analysis",
            "Get market sentiment analysis",
        ),
        Capability::new(
            "event",
            "/v2/event",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Event",
            "Event data and updates",
        ),
        Capability::new(
            "browse",
            "/v2/browse",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Browse",
            "Browse / discovery data",
        ),
        Capability::new(
            "x-search",
            "/v2/x-search",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "X search",
            "Search X/Twitter for crypto and market content",
        ),
        Capability::new(
            "research",
            "/v2/research",
            HttpVerb::Get,
            research,
            pricing::DISPLAY_STANDARD,
            "Research",
            "Deep research / analysis",
        ),
        Capability::new(
            "exa-search",
            "/v2/exa-search",
            HttpVerb::Get,
            exa_search,
            pricing::DISPLAY_STANDARD,
            "EXA search",
            "EXA AI web search - dynamic query only",
        ),
        Capability::new(
            "gems",
            "/v2/gems",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Gems",
            "Gems / curated insights",
        ),
        Capability::new(
            "x-kol",
            "/v2/x-kol",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "X KOL",
            "X/Twitter KOL (key opinion leader) data",
        ),
        Capability::new(
            "crypto-kol",
            "/v2/crypto-kol",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Crypto KOL",
            "Crypto KOL data and insights",
        ),
        Capability::new(
            "trending-headline",
            "/v2/trending-headline",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Trending headline",
            "Trending headlines",
        ),
        Capability::new(
            "sundown-digest",
            "/v2/sundown-digest",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Sundown digest",
            "Sundown digest / daily summary",
        ),
        Capability::new(
            "analytics-summary",
            "/v2/analytics/summary",
            HttpVerb::Get,
            analytics_summary,
            display_analytics_summary,
            "Analytics summary",
            "Full analytics: dexscreener, token stats, Jupiter trending, smart money, Binance correlation, and 9 memecoin screens",
        ),
        // ===== Partner: Nansen =====
        Capability::new(
            "smart-money",
            "/v2/smart-money",
            HttpVerb::Get,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Smart money (Nansen)",
            "Smart money data from Nansen",
        ),
        Capability::new(
            "token-god-mode",
            "/v2/token-god-mode",
            HttpVerb::Get,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Token god mode (Nansen)",
            "Token god mode insights from Nansen",
        ),
        // Nansen per-endpoint capabilities — the caller hits the real Nansen
        // API directly, so each carries its upstream partner path.
        Capability::new(
            "nansen-address-current-balance",
            "/v2/nansen/profiler/address/current-balance",
            HttpVerb::Post,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Nansen: address current balance",
            "Current token holdings for a wallet or entity (chain + address required)",
        )
        .with_partner_path("/api/v1/profiler/address/current-balance"),
        Capability::new(
            "nansen-address-historical-balances",
            "/v2/nansen/profiler/address/historical-balances",
            HttpVerb::Post,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Nansen: address historical balances",
            "Historical balances for a wallet (chain + address required)",
        )
        .with_partner_path("/api/v1/profiler/address/historical-balances"),
        Capability::new(
            "nansen-smart-money-netflow",
            "/v2/nansen/smart-money/netflow",
            HttpVerb::Post,
            nansen_premium,
            pricing::DISPLAY_NANSEN_PREMIUM,
            "Nansen: smart money netflow",
            "Smart money net flow / accumulation (chains e.g. [\"solana\"]; optional filters, pagination)",
        )
        .with_partner_path("/api/v1/smart-money/netflow"),
        Capability::new(
            "nansen-smart-money-holdings",
            "/v2/nansen/smart-money/holdings",
            HttpVerb::Post,
            nansen_premium,
            pricing::DISPLAY_NANSEN_PREMIUM,
            "Nansen: smart money holdings",
            "Current smart money positions (chains e.g. [\"solana\"]; optional filters, pagination)",
        )
        .with_partner_path("/api/v1/smart-money/holdings"),
        Capability::new(
            "nansen-smart-money-dex-trades",
            "/v2/nansen/smart-money/dex-trades",
            HttpVerb::Post,
            nansen_premium,
            pricing::DISPLAY_NANSEN_PREMIUM,
            "Nansen: smart money DEX trades",
            "Recent DEX trades by smart money (chains; optional filters, pagination)",
        )
        .with_partner_path("/api/v1/smart-money/dex-trades"),
        Capability::new(
            "nansen-tgm-holders",
            "/v2/nansen/tgm/holders",
            HttpVerb::Post,
            nansen_premium,
            pricing::DISPLAY_NANSEN_PREMIUM,
            "Nansen: TGM holders",
            "Token holders from Token God Mode (chain + token_address required)",
        )
        .with_partner_path("/api/v1/tgm/holders"),
        Capability::new(
            "nansen-tgm-flow-intelligence",
            "/v2/nansen/tgm/flow-intelligence",
            HttpVerb::Post,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Nansen: TGM flow intelligence",
            "Flow intelligence for a token (chain + token_address required)",
        )
        .with_partner_path("/api/v1/tgm/flow-intelligence"),
        Capability::new(
            "nansen-tgm-flows",
            "/v2/nansen/tgm/flows",
            HttpVerb::Post,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Nansen: TGM flows",
            "Flow history for a token (chain, date range, token_address; optional filters)",
        )
        .with_partner_path("/api/v1/tgm/flows"),
        Capability::new(
            "nansen-tgm-dex-trades",
            "/v2/nansen/tgm/dex-trades",
            HttpVerb::Post,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Nansen: TGM DEX trades",
            "DEX trades for a token (chain + token_address; optional date, filters)",
        )
        .with_partner_path("/api/v1/tgm/dex-trades"),
        Capability::new(
            "nansen-token-screener",
            "/v2/nansen/token-screener",
            HttpVerb::Post,
            nansen,
            pricing::DISPLAY_STANDARD,
            "Nansen: token screener",
            "Token screener data (chain; optional filters, pagination)",
        )
        .with_partner_path("/api/v1/token-screener"),
        Capability::new(
            "nansen-profiler-counterparties",
            "/v2/nansen/profiler/address/counterparties",
            HttpVerb::Post,
            nansen_premium,
            pricing::DISPLAY_NANSEN_PREMIUM,
            "Nansen: address counterparties",
            "Counterparties for a wallet (chain + address required)",
        )
        .with_partner_path("/api/v1/profiler/address/counterparties"),
        Capability::new(
            "nansen-tgm-pnl-leaderboard",
            "/v2/nansen/tgm/pnl-leaderboard",
            HttpVerb::Post,
            nansen_premium,
            pricing::DISPLAY_NANSEN_PREMIUM,
            "Nansen: TGM PnL leaderboard",
            "PnL leaderboard for a token (chain, date range; optional filters)",
        )
        .with_partner_path("/api/v1/tgm/pnl-leaderboard"),
        // ===== Partner: DexScreener, Jupiter, Rugcheck, Bubblemaps, Binance, Workfun =====
        Capability::new(
            "dexscreener",
            "/v2/dexscreener",
            HttpVerb::Get,
            dexscreener,
            pricing::DISPLAY_STANDARD,
            "DexScreener",
            "DexScreener data",
        ),
        Capability::new(
            "trending-jupiter",
            "/v2/trending-jupiter",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Trending on Jupiter",
            "Trending tokens on Jupiter",
        ),
        // LLM-facing callers tend to send the underscore variant.
        Capability::new(
            "jupiter-swap-order",
            "/v2/jupiter/swap/order",
            HttpVerb::Post,
            jupiter_swap,
            pricing::DISPLAY_JUPITER_SWAP,
            "Jupiter swap order (buy/sell token)",
            "Get a Jupiter Ultra swap order for buying or selling a token on Solana; returns transaction to sign and submit",
        )
        .with_aliases(["jupiter_swap_order"]),
        Capability::new(
            "token-report",
            "/v2/token-report",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Token report (Rugcheck)",
            "Token report from Rugcheck",
        ),
        Capability::new(
            "token-statistic",
            "/v2/token-statistic",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Token statistic (Rugcheck)",
            "Token statistics from Rugcheck",
        ),
        Capability::new(
            "token-risk-alerts",
            "/v2/token-risk/alerts",
            HttpVerb::Get,
            standard * 2,
            pricing::DISPLAY_STANDARD * 2,
            "Token risk alerts (Rugcheck)",
            "Tokens from Rugcheck stats with risk score at or above threshold (e.g. rugScoreMin=80)",
        ),
        Capability::new(
            "bubblemaps-maps",
            "/v2/bubblemaps/maps",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Bubblemaps maps",
            "Bubblemaps map data",
        ),
        Capability::new(
            "binance-correlation",
            "/v2/binance/correlation",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Binance correlation",
            "Binance correlation data",
        ),
        Capability::new(
            "pump",
            "/v2/pump",
            HttpVerb::Get,
            pump,
            pricing::DISPLAY_STANDARD,
            "Pump (Workfun)",
            "Pump data from Workfun",
        ),
        // ===== Partner: CoinGecko =====
        Capability::new(
            "coingecko-simple-price",
            "/v2/coingecko/simple-price",
            HttpVerb::Get,
            coingecko,
            pricing::DISPLAY_STANDARD,
            "CoinGecko simple price",
            "USD price and market data for coins by symbol (e.g. btc,eth,sol) or CoinGecko id (e.g. bitcoin,ethereum)",
        ),
        Capability::new(
            "coingecko-onchain-token-price",
            "/v2/coingecko/onchain/token-price",
            HttpVerb::Get,
            coingecko,
            pricing::DISPLAY_STANDARD,
            "CoinGecko onchain token price",
            "Token price(s) by contract address on a network; supports multiple addresses comma-separated (network + address required)",
        ),
        Capability::new(
            "coingecko-search-pools",
            "/v2/coingecko/onchain/search-pools",
            HttpVerb::Get,
            coingecko,
            pricing::DISPLAY_STANDARD,
            "CoinGecko search pools",
            "Search pools and tokens by name, symbol, or contract address on a network (e.g. solana, base)",
        ),
        Capability::new(
            "coingecko-trending-pools",
            "/v2/coingecko/onchain/trending-pools",
            HttpVerb::Get,
            coingecko,
            pricing::DISPLAY_STANDARD,
            "CoinGecko trending pools",
            "Trending pools and tokens by network (e.g. base, solana) with optional duration (e.g. 5m)",
        ),
        Capability::new(
            "coingecko-onchain-token",
            "/v2/coingecko/onchain/token",
            HttpVerb::Get,
            coingecko,
            pricing::DISPLAY_STANDARD,
            "CoinGecko onchain token",
            "Token data by contract address on a network: price, liquidity, top pools (network + address required)",
        ),
        // ===== Memecoin screens =====
        Capability::new(
            "memecoin-fastest-holder-growth",
            "/v2/memecoin/fastest-holder-growth",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin fastest holder growth",
            "Memecoins with fastest holder growth",
        ),
        Capability::new(
            "memecoin-most-mentioned-by-smart-money-x",
            "/v2/memecoin/most-mentioned-by-smart-money-x",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin most mentioned by smart money (X)",
            "Memecoins most mentioned by smart money on X",
        ),
        Capability::new(
            "memecoin-accumulating-before-cex-rumors",
            "/v2/memecoin/accumulating-before-CEX-rumors",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin accumulating before CEX rumors",
            "Memecoins accumulating before CEX listing rumors",
        ),
        Capability::new(
            "memecoin-strong-narrative-low-market-cap",
            "/v2/memecoin/strong-narrative-low-market-cap",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin strong narrative low market cap",
            "Memecoins with strong narrative and low market cap",
        ),
        Capability::new(
            "memecoin-by-experienced-devs",
            "/v2/memecoin/by-experienced-devs",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin by experienced devs",
            "Memecoins by experienced developers",
        ),
        Capability::new(
            "memecoin-unusual-whale-behavior",
            "/v2/memecoin/unusual-whale-behavior",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin unusual whale behavior",
            "Memecoins with unusual whale behavior",
        ),
        Capability::new(
            "memecoin-trending-on-x-not-dex",
            "/v2/memecoin/trending-on-x-not-dex",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin trending on X not DEX",
            "Memecoins trending on X but not yet on DEX",
        ),
        Capability::new(
            "memecoin-organic-traction",
            "/v2/memecoin/organic-traction",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin organic traction",
            "Memecoins with organic traction (AI)",
        ),
        Capability::new(
            "memecoin-surviving-market-dumps",
            "/v2/memecoin/surviving-market-dumps",
            HttpVerb::Get,
            standard,
            pricing::DISPLAY_STANDARD,
            "Memecoin surviving market dumps",
            "Memecoins surviving market dumps",
        ),
    ]
}
