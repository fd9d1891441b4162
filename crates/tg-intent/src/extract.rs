//! Parameter extraction from normalized (trimmed, lowercased) user text.
//!
//! Only two rules derive parameters: news (an uppercased ticker subject)
//! and signal (a canonical asset name). Extraction is best-effort — when
//! nothing usable is adjacent to the trigger phrase, the parameter is
//! omitted rather than defaulted.

use std::sync::LazyLock;

use regex::Regex;
use tg_protocol::ParamMap;

// ── News ticker ───────────────────────────────────────────────

/// Subject following a news trigger: "news about X", "latest X", "get X".
static TICKER_AFTER_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:news|latest|get|about|for|on)\s*(?:about|for|on)?\s*([a-z0-9]{2,10})\b")
        .unwrap_or_else(|e| panic!("ticker trigger pattern: {e}"))
});

/// Subject preceding "news": "X news".
static TICKER_BEFORE_NEWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z0-9]{2,10})\s*news\b")
        .unwrap_or_else(|e| panic!("ticker subject pattern: {e}"))
});

/// Trigger and filler words that can never be the news subject.
const TICKER_STOP_WORDS: &[&str] = &[
    "news", "latest", "get", "about", "for", "on", "the", "please", "now",
];

/// Extract an uppercased news subject, or `None` when the text names no
/// specific subject (the caller omits the parameter in that case).
pub fn news_ticker(text: &str) -> Option<String> {
    let candidates = TICKER_AFTER_TRIGGER
        .captures_iter(text)
        .chain(TICKER_BEFORE_NEWS.captures_iter(text));
    for caps in candidates {
        let token = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if !token.is_empty() && !TICKER_STOP_WORDS.contains(&token) {
            return Some(token.to_uppercase());
        }
    }
    None
}

/// Params for the news capability: `ticker` when a subject was named.
pub(crate) fn news_params(text: &str) -> ParamMap {
    let mut params = ParamMap::new();
    if let Some(ticker) = news_ticker(text) {
        params.insert("ticker".into(), ticker);
    }
    params
}

// ── Signal token ──────────────────────────────────────────────

/// Recognized asset adjacent to a signal phrase: "bitcoin signal",
/// "signal for ethereum", "give me a btc signal".
static SIGNAL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(bitcoin|btc|ethereum|eth|solana|sol)\s+signal|\bsignal\s+(?:for|on)?\s*(bitcoin|btc|ethereum|eth|solana|sol)\b|give\s+(?:me\s+)?(?:a\s+)?(bitcoin|btc|ethereum|eth|solana|sol)\s+signal",
    )
    .unwrap_or_else(|e| panic!("signal token pattern: {e}"))
});

/// Canonical full name for a recognized asset; short symbols map through a
/// fixed table.
fn canonical_asset(raw: &str) -> Option<&'static str> {
    match raw {
        "btc" | "bitcoin" => Some("bitcoin"),
        "eth" | "ethereum" => Some("ethereum"),
        "sol" | "solana" => Some("solana"),
        _ => None,
    }
}

/// Extract the canonical asset name for a signal request, if any.
pub fn signal_token(text: &str) -> Option<&'static str> {
    let caps = SIGNAL_TOKEN.captures(text)?;
    let raw = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())?;
    canonical_asset(raw)
}

/// Params for the signal capability: `token` when an asset was recognized,
/// otherwise empty (never defaulted).
pub(crate) fn signal_params(text: &str) -> ParamMap {
    let mut params = ParamMap::new();
    if let Some(token) = signal_token(text) {
        params.insert("token".into(), token.into());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── News ticker ─────────────────────────────────────────────

    #[test]
    fn ticker_after_news_about() {
        assert_eq!(news_ticker("news about btc").as_deref(), Some("BTC"));
    }

    #[test]
    fn ticker_skips_trigger_words() {
        assert_eq!(news_ticker("latest news about eth").as_deref(), Some("ETH"));
    }

    #[test]
    fn ticker_before_news() {
        assert_eq!(news_ticker("btc news").as_deref(), Some("BTC"));
        assert_eq!(news_ticker("show me sol news").as_deref(), Some("SOL"));
    }

    #[test]
    fn ticker_after_latest() {
        assert_eq!(news_ticker("latest eth news").as_deref(), Some("ETH"));
    }

    #[test]
    fn ticker_absent_when_no_subject() {
        assert_eq!(news_ticker("get news"), None);
        assert_eq!(news_ticker("what's the news"), None);
        assert_eq!(news_ticker("news please"), None);
    }

    #[test]
    fn news_params_omit_ticker_when_unnamed() {
        assert!(news_params("get news").is_empty());
        let params = news_params("latest news about eth");
        assert_eq!(params["ticker"], "ETH");
    }

    // ── Signal token ────────────────────────────────────────────

    #[test]
    fn signal_token_before_signal() {
        assert_eq!(signal_token("bitcoin signal"), Some("bitcoin"));
        assert_eq!(signal_token("btc signal"), Some("bitcoin"));
    }

    #[test]
    fn signal_token_after_signal_for() {
        assert_eq!(signal_token("give me a signal for bitcoin"), Some("bitcoin"));
        assert_eq!(signal_token("signal on sol"), Some("solana"));
    }

    #[test]
    fn signal_token_give_me_form() {
        assert_eq!(signal_token("give me a btc signal"), Some("bitcoin"));
        // "an" breaks the give-me phrase, but "<asset> signal" still hits.
        assert_eq!(signal_token("give me an ethereum signal"), Some("ethereum"));
    }

    #[test]
    fn signal_symbols_map_to_full_names() {
        assert_eq!(signal_token("signal for eth"), Some("ethereum"));
        assert_eq!(signal_token("signal for sol"), Some("solana"));
    }

    #[test]
    fn signal_params_empty_when_unrecognized() {
        assert!(signal_params("trading signal").is_empty());
        assert!(signal_params("give me a signal").is_empty());
        let params = signal_params("give me a signal for bitcoin");
        assert_eq!(params["token"], "bitcoin");
    }
}
