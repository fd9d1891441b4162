//! Ordered match rules — free-text routing to capabilities.
//!
//! A strict first-match-wins walk over an author-ordered rule list. The
//! order is a contract, not an implementation detail: specific phrasings
//! (memecoin screens, per-endpoint partner calls) sit before the generic
//! rules that would otherwise swallow them. Reordering rules changes
//! routing behavior and is pinned by regression tests.

use regex::Regex;
use tg_protocol::{MatchedIntent, ParamMap};

use tg_catalog::Catalog;

use crate::extract;

/// One routing rule: a compiled predicate, the capability it selects, and
/// an optional parameter extractor run on the normalized text.
pub struct MatchRule {
    target: String,
    predicate: Regex,
    extractor: Option<fn(&str) -> ParamMap>,
}

impl MatchRule {
    /// Compile a rule from a pattern evaluated against trimmed, lowercased
    /// text.
    pub fn new(target: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            target: target.into(),
            predicate: Regex::new(pattern)?,
            extractor: None,
        })
    }

    /// Attach a parameter extractor invoked when this rule wins.
    pub fn with_extractor(mut self, extractor: fn(&str) -> ParamMap) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Capability id this rule selects on match.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn matches(&self, normalized_text: &str) -> bool {
        self.predicate.is_match(normalized_text)
    }
}

/// The ordered rule list. Built once, walked per utterance.
pub struct RuleSet {
    rules: Vec<MatchRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self { rules }
    }

    /// Route an utterance to a capability.
    ///
    /// Normalizes the text (trim, lowercase), walks the rules in author
    /// order, and returns the first rule whose predicate matches and whose
    /// target resolves in the catalog. A rule with a dangling target is
    /// skipped, never a crash. Empty input and unmatched text both yield
    /// `None`.
    pub fn match_text(&self, catalog: &Catalog, text: &str) -> Option<MatchedIntent> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        for rule in &self.rules {
            if !rule.matches(&text) {
                continue;
            }
            let id = catalog.resolve_alias(&rule.target);
            if catalog.lookup(id).is_none() {
                tracing::warn!(target_id = %rule.target, "match rule targets unknown capability, skipping");
                continue;
            }
            tracing::debug!(capability_id = %id, "rule matched");
            let params = rule.extractor.map(|extractor| extractor(&text));
            return Some(MatchedIntent {
                capability_id: id.to_string(),
                params,
            });
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The production rule list.
    ///
    /// Order is load-bearing. Known overlaps in this list are deliberate
    /// (specific screens before the generic smart-money hub) or inherited
    /// and documented (the hub rule shadows the per-endpoint smart-money
    /// holdings and DEX-trades rules entirely); see DESIGN.md before
    /// touching the order.
    pub fn builtin() -> Self {
        let rule = |target: &str, pattern: &str| -> MatchRule {
            MatchRule::new(target, pattern)
                .unwrap_or_else(|e| panic!("match rule pattern for {target}: {e}"))
        };

        Self::new(vec![
            // ── Memecoin screens (specific, before anything generic) ────
            rule(
                "memecoin-fastest-holder-growth",
                r"fastest\s*holder\s*growth|memecoin\s*holder\s*growth|holder\s*growth\s*memecoin",
            ),
            rule(
                "memecoin-most-mentioned-by-smart-money-x",
                r"most\s*mentioned\s*by\s*smart\s*money|smart\s*money\s*mentioned|mentioned\s*smart\s*money\s*x",
            ),
            rule(
                "memecoin-accumulating-before-cex-rumors",
                r"accumulating\s*before\s*cex|cex\s*rumors\s*memecoin|before\s*cex\s*rumors",
            ),
            rule(
                "memecoin-strong-narrative-low-market-cap",
                r"strong\s*narrative\s*low\s*market\s*cap|low\s*market\s*cap\s*narrative|narrative\s*low\s*cap",
            ),
            rule(
                "memecoin-by-experienced-devs",
                r"memecoin\s*experienced\s*dev|by\s*experienced\s*devs|experienced\s*developers\s*memecoin",
            ),
            rule(
                "memecoin-unusual-whale-behavior",
                r"unusual\s*whale\s*behavior|whale\s*behavior\s*memecoin|memecoin\s*whale\s*behavior",
            ),
            rule(
                "memecoin-trending-on-x-not-dex",
                r"trending\s*on\s*x\s*not\s*dex|trending\s*x\s*not\s*dex|memecoin\s*trending\s*x",
            ),
            rule(
                "memecoin-organic-traction",
                r"organic\s*traction|memecoin\s*organic|organic\s*memecoin",
            ),
            rule(
                "memecoin-surviving-market-dumps",
                r"surviving\s*market\s*dumps|memecoin\s*surviving\s*dump|market\s*dump\s*survivors",
            ),
            // ── Partner: Rugcheck, Bubblemaps, Binance ──────────────────
            rule(
                "token-report",
                r"token\s*report|rugcheck\s*report|token\s*report\s*rugcheck",
            ),
            rule(
                "token-statistic",
                r"token\s*statistic|rugcheck\s*statistic|token\s*stats\s*rugcheck",
            ),
            rule("bubblemaps-maps", r"bubblemaps|bubble\s*maps|bubblemap"),
            rule(
                "binance-correlation",
                r"binance\s*correlation|correlation\s*binance|binance\s*correl",
            ),
            // ── Partner: Nansen hub pair ────────────────────────────────
            rule(
                "token-god-mode",
                r"token\s*god\s*mode|token\s*god|god\s*mode\s*token|nansen\s*token\s*god",
            ),
            rule(
                "smart-money",
                r"smart\s*money|smart\s*money\s*data|nansen\s*smart\s*money|whale\s*movement|whale\s*activity",
            ),
            // ── Partner: Nansen per-endpoint ────────────────────────────
            rule(
                "nansen-address-current-balance",
                r"(?:nansen\s+)?address\s+current\s+balance|(?:nansen\s+)?current\s+balance\s+(?:for\s+)?(?:wallet|address)|wallet\s+balance\s+nansen",
            ),
            rule(
                "nansen-address-historical-balances",
                r"(?:nansen\s+)?(?:address\s+)?historical\s+balances?|historical\s+balance\s+(?:for\s+)?(?:wallet|address)",
            ),
            rule(
                "nansen-smart-money-netflow",
                r"(?:nansen\s+)?smart\s+money\s+net\s*flow|net\s*flow\s+(?:smart\s+money)?|smart\s+money\s+accumulation",
            ),
            rule(
                "nansen-smart-money-holdings",
                r"(?:nansen\s+)?smart\s+money\s+holdings?|smart\s+money\s+positions?",
            ),
            rule(
                "nansen-smart-money-dex-trades",
                r"(?:nansen\s+)?smart\s+money\s+dex\s*trades?|smart\s+money\s+trades?",
            ),
            rule(
                "nansen-tgm-holders",
                r"(?:nansen\s+)?tgm\s+holders?|(?:nansen\s+)?token\s+holders?|holders?\s+(?:for\s+)?token\s+(?:god\s*mode)?",
            ),
            rule(
                "nansen-tgm-flow-intelligence",
                r"(?:nansen\s+)?(?:tgm\s+)?flow\s+intelligence|flow\s+intelligence\s+(?:for\s+)?token",
            ),
            rule(
                "nansen-tgm-flows",
                r"(?:nansen\s+)?tgm\s+flows?|(?:nansen\s+)?token\s+flows?|flow\s+history\s+(?:for\s+)?token",
            ),
            rule(
                "nansen-tgm-dex-trades",
                r"(?:nansen\s+)?tgm\s+dex\s*trades?|(?:nansen\s+)?token\s+dex\s*trades?",
            ),
            rule(
                "nansen-token-screener",
                r"(?:nansen\s+)?token\s+screener|token\s+screener\s+nansen",
            ),
            rule(
                "nansen-profiler-counterparties",
                r"(?:nansen\s+)?(?:address\s+)?counterparties?|counterparties?\s+(?:for\s+)?(?:wallet|address)",
            ),
            rule(
                "nansen-tgm-pnl-leaderboard",
                r"(?:nansen\s+)?(?:tgm\s+)?pnl\s+leaderboard|pnl\s+leaderboard\s+(?:for\s+)?token",
            ),
            // ── Partner: Jupiter, DexScreener, Workfun ──────────────────
            rule(
                "trending-jupiter",
                r"trending\s*(?:on\s*)?jupiter|jupiter\s*trending|trending\s*tokens?\s*(?:on\s*jupiter)?",
            ),
            rule(
                "jupiter-swap-order",
                r"jupiter\s*swap|swap\s*(?:order|token|solana)?|buy\s*token\s*(?:on\s*solana)?|sell\s*token\s*(?:on\s*solana)?|swap\s*(?:via\s*)?jupiter",
            ),
            rule(
                "dexscreener",
                r"dexscreener|dex\s*screener|dex\s*data|dex\s*screen",
            ),
            rule("pump", r"pump\.fun|pump\s*fun|pump\s*data|workfun\s*pump"),
            // ── Partner: CoinGecko ──────────────────────────────────────
            rule(
                "coingecko-search-pools",
                r"coingecko\s*search\s*pools|search\s*pools\s*coingecko|search\s*tokens?\s*(?:and\s*)?pools?|pools?\s*search\s*(?:solana|base)",
            ),
            rule(
                "coingecko-trending-pools",
                r"coingecko\s*trending|trending\s*pools?\s*(?:on\s*)?(?:base|solana)|trending\s*(?:on\s*)?(?:base|solana)\s*pools?|coingecko\s*trending\s*pools?",
            ),
            rule(
                "coingecko-onchain-token",
                r"coingecko\s*token\s*(?:data|by\s*address)?|token\s*data\s*coingecko|onchain\s*token\s*(?:data)?|token\s*by\s*address\s*coingecko",
            ),
            rule(
                "coingecko-simple-price",
                r"(?:what'?s?|get|current|latest)?\s*(?:the\s*)?price\s*(?:of|for)?\s*(?:btc|eth|sol|bitcoin|ethereum|solana|crypto)|coingecko\s*simple\s*price|price\s*(?:of\s*)?(?:btc|eth|sol|bitcoin|ethereum)",
            ),
            rule(
                "coingecko-onchain-token-price",
                r"token\s*price\s*by\s*(?:contract\s*)?address|onchain\s*token\s*price|price\s*of\s*token\s*(?:at|by)\s*address|coingecko\s*token\s*price",
            ),
            // ── Core ────────────────────────────────────────────────────
            rule(
                "signal",
                r"trading\s*signal|create\s*signal|signal\s*data|get\s*signal|give\s*(?:me\s*)?(?:a\s*)?(?:solana|btc|eth|bitcoin|ethereum|crypto)?\s*signal|(?:solana|btc|eth|bitcoin|ethereum|crypto|token)\s*signal|signal\s*(?:for|on)?\s*(?:solana|btc|eth|bitcoin|ethereum|crypto)?",
            )
            .with_extractor(extract::signal_params),
            rule(
                "event",
                r"event\s*data|events\s*(?:please|now)?|crypto\s*events|get\s*events",
            ),
            rule("browse", r"browse|discovery|browse\s*data"),
            rule(
                "x-search",
                r"x\s*search|search\s*x|twitter\s*search|search\s*twitter|x\s*twitter\s*search",
            ),
            rule("gems", r"gems|curated\s*insights|gems\s*data"),
            rule(
                "x-kol",
                r"x\s*kol|kol\s*x|twitter\s*kol|key\s*opinion\s*leader\s*x",
            ),
            rule(
                "crypto-kol",
                r"crypto\s*kol|kol\s*crypto|key\s*opinion\s*leader\s*crypto",
            ),
            rule(
                "trending-headline",
                r"trending\s*headline|headlines?\s*trending|trending\s*headlines?",
            ),
            rule(
                "sundown-digest",
                r"sundown\s*digest|daily\s*digest|sundown\s*daily|digest\s*sundown",
            ),
            rule(
                "analytics-summary",
                r"analytics\s*summary|full\s*analytics|all\s*analytics|dashboard\s*data|summary\s*analytics",
            ),
            rule(
                "research",
                r"deep\s*research|research\s*(?:report|analysis)?|run\s*research|do\s*research",
            ),
            rule(
                "sentiment",
                r"sentiment\s*(?:analysis)?|market\s*sentiment|sentiment\s*data|feelings?\s*about\s*(?:market|crypto)",
            ),
            rule(
                "news",
                r"(?:latest|recent|crypto|get|fetch|show)\s*news|news\s*(?:about|for|on)?|what'?s\s*the\s*news|news\s*(?:please|now)",
            )
            .with_extractor(extract::news_params),
            rule(
                "check-status",
                r"check\s*status|api\s*status|health\s*check|is\s*(?:the\s*)?(?:api|server)\s*up|status\s*check",
            ),
        ])
    }
}
