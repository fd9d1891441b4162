//! E2E routing regressions: representative utterances pinned to the
//! capability the builtin rule order selects. Reordering rules is a
//! behavior change and must show up here.

use tg_catalog::{Catalog, PricingTier};
use tg_intent::RuleSet;
use tg_protocol::MatchedIntent;

fn route(text: &str) -> Option<MatchedIntent> {
    let catalog = Catalog::builtin(PricingTier::Local);
    RuleSet::builtin().match_text(&catalog, text)
}

/// One natural phrasing per reachable rule routes to the expected capability.
#[test]
fn e2e_representative_utterances_route_as_pinned() {
    let expectations = [
        // Memecoin screens
        ("memecoins with fastest holder growth", "memecoin-fastest-holder-growth"),
        ("memecoins most mentioned by smart money", "memecoin-most-mentioned-by-smart-money-x"),
        ("accumulating before cex rumors", "memecoin-accumulating-before-cex-rumors"),
        ("strong narrative low market cap", "memecoin-strong-narrative-low-market-cap"),
        ("memecoins by experienced devs", "memecoin-by-experienced-devs"),
        ("unusual whale behavior", "memecoin-unusual-whale-behavior"),
        ("memecoins trending on x not dex", "memecoin-trending-on-x-not-dex"),
        ("memecoins with organic traction", "memecoin-organic-traction"),
        ("memecoins surviving market dumps", "memecoin-surviving-market-dumps"),
        // Rugcheck, Bubblemaps, Binance
        ("token report from rugcheck", "token-report"),
        ("rugcheck token statistic", "token-statistic"),
        ("bubblemaps for this token", "bubblemaps-maps"),
        ("binance correlation data", "binance-correlation"),
        // Nansen hub pair
        ("token god mode", "token-god-mode"),
        ("show me smart money data", "smart-money"),
        // Nansen per-endpoint
        ("nansen address current balance", "nansen-address-current-balance"),
        ("historical balances for wallet", "nansen-address-historical-balances"),
        ("netflow data", "nansen-smart-money-netflow"),
        ("tgm holders", "nansen-tgm-holders"),
        ("flow intelligence for this token", "nansen-tgm-flow-intelligence"),
        ("tgm flows", "nansen-tgm-flows"),
        ("tgm dex trades", "nansen-tgm-dex-trades"),
        ("token screener", "nansen-token-screener"),
        ("counterparties for wallet", "nansen-profiler-counterparties"),
        ("pnl leaderboard", "nansen-tgm-pnl-leaderboard"),
        // Jupiter, DexScreener, Workfun
        ("trending on jupiter", "trending-jupiter"),
        ("swap 1000 usdc to sol", "jupiter-swap-order"),
        ("dexscreener data", "dexscreener"),
        ("pump.fun data", "pump"),
        // CoinGecko
        ("search tokens and pools on solana", "coingecko-search-pools"),
        ("trending pools on base", "coingecko-trending-pools"),
        ("onchain token data", "coingecko-onchain-token"),
        ("what's the price of bitcoin", "coingecko-simple-price"),
        ("token price by contract address", "coingecko-onchain-token-price"),
        // Core
        ("give me a signal for bitcoin", "signal"),
        ("crypto events", "event"),
        ("browse", "browse"),
        ("search twitter", "x-search"),
        ("show me gems", "gems"),
        ("x kol data", "x-kol"),
        ("crypto kol insights", "crypto-kol"),
        ("trending headlines", "trending-headline"),
        ("sundown digest", "sundown-digest"),
        ("full analytics", "analytics-summary"),
        ("deep research", "research"),
        ("market sentiment", "sentiment"),
        ("latest news about eth", "news"),
        ("is the api up", "check-status"),
    ];

    for (utterance, expected) in &expectations {
        let matched = route(utterance);
        assert_eq!(
            matched.as_ref().map(|m| m.capability_id.as_str()),
            Some(*expected),
            "'{utterance}' should route to '{expected}'"
        );
    }
}

/// The three scenario pins from the routing contract.
#[test]
fn e2e_contract_scenarios() {
    let signal = route("Give me a signal for Bitcoin").unwrap();
    assert_eq!(signal.capability_id, "signal");
    assert_eq!(signal.params.unwrap()["token"], "bitcoin");

    let news = route("latest news about ETH").unwrap();
    assert_eq!(news.capability_id, "news");
    assert_eq!(news.params.unwrap()["ticker"], "ETH");

    assert!(route("hello, how are you").is_none());
}

/// Inherited shadowing, preserved: the smart-money hub rule precedes the
/// per-endpoint rules and its bare bigram claims these phrasings. The
/// holdings and DEX-trades endpoint rules are unreachable through any text
/// because all of their alternations contain the bigram.
#[test]
fn e2e_smart_money_hub_shadowing_is_preserved() {
    for utterance in [
        "smart money netflow",
        "smart money holdings",
        "smart money positions",
        "smart money dex trades",
        "smart money accumulation",
        "nansen smart money",
    ] {
        let matched = route(utterance).unwrap();
        assert_eq!(
            matched.capability_id, "smart-money",
            "'{utterance}' is claimed by the hub rule"
        );
    }
}

/// Specific-before-generic ordering: screens that mention smart money or
/// whales stay ahead of the hub rule.
#[test]
fn e2e_specific_screens_precede_the_hub() {
    assert_eq!(
        route("most mentioned by smart money").unwrap().capability_id,
        "memecoin-most-mentioned-by-smart-money-x"
    );
    assert_eq!(
        route("whale behavior memecoin").unwrap().capability_id,
        "memecoin-unusual-whale-behavior"
    );
    // Outside the screens' phrasings the hub wins.
    assert_eq!(route("whale activity").unwrap().capability_id, "smart-money");
}

/// Bare "trending tokens" is claimed by the Jupiter trending rule ahead of
/// the CoinGecko trending rule; pinned so a reorder is caught.
#[test]
fn e2e_trending_tokens_routes_to_jupiter() {
    assert_eq!(route("trending tokens").unwrap().capability_id, "trending-jupiter");
}

/// Params only appear on rules with extractors, and only when the text
/// names a subject.
#[test]
fn e2e_param_presence_matrix() {
    assert!(route("sundown digest").unwrap().params.is_none());
    assert!(route("trading signal").unwrap().params.unwrap().is_empty());
    assert!(route("get news").unwrap().params.unwrap().is_empty());
    assert_eq!(route("btc news").unwrap().params.unwrap()["ticker"], "BTC");
    assert_eq!(
        route("signal for sol").unwrap().params.unwrap()["token"],
        "solana"
    );
}
