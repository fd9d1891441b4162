//! Full-path dispatch: utterance in, serializable plan out, across both
//! pricing tiers.

use tg_catalog::PricingTier;
use tg_dispatch::Dispatcher;
use tg_protocol::{HttpVerb, ParamMap, PriceUsd};

#[test]
fn e2e_news_plan_at_production_tier() {
    let dispatcher = Dispatcher::builtin(PricingTier::Production);
    let plan = dispatcher.dispatch("latest news about ETH").unwrap();
    assert_eq!(plan.capability_id, "news");
    assert_eq!(plan.path, "/v2/news");
    assert_eq!(plan.verb, HttpVerb::Get);
    assert_eq!(plan.price, PriceUsd::from_micros(1_000_000));
    assert_eq!(plan.display_price, PriceUsd::from_micros(1_000_000));
    assert_eq!(plan.params.unwrap()["ticker"], "ETH");
}

#[test]
fn e2e_no_match_yields_no_plan() {
    let dispatcher = Dispatcher::builtin(PricingTier::Local);
    assert!(dispatcher.dispatch("hello, how are you").is_none());
    assert!(dispatcher.dispatch("").is_none());
}

#[test]
fn e2e_llm_selected_swap_plan_normalizes_params() {
    let dispatcher = Dispatcher::builtin(PricingTier::Production);
    let mut params = ParamMap::new();
    params.insert("from_token".into(), "usdc".into());
    params.insert("to_token".into(), "SOL".into());
    params.insert("amount".into(), "1,000".into());

    // The underscore alias an LLM caller would send.
    let plan = dispatcher.plan("jupiter_swap_order", Some(params)).unwrap();
    assert_eq!(plan.capability_id, "jupiter-swap-order");
    assert_eq!(plan.verb, HttpVerb::Post);
    assert_eq!(plan.price, PriceUsd::from_micros(2_000_000));
    let wire = plan.swap_params.unwrap();
    assert_eq!(wire.amount, "1000000000");
}

#[test]
fn e2e_swap_selection_stands_when_params_do_not_normalize() {
    let dispatcher = Dispatcher::builtin(PricingTier::Local);
    let mut params = ParamMap::new();
    params.insert("from_token".into(), "XYZ".into());
    params.insert("to_token".into(), "SOL".into());
    params.insert("amount".into(), "5".into());
    let plan = dispatcher.plan("jupiter-swap-order", Some(params.clone())).unwrap();
    assert!(plan.swap_params.is_none());
    assert_eq!(plan.params, Some(params));
}

#[test]
fn e2e_partner_proxied_plan_carries_upstream_path() {
    let dispatcher = Dispatcher::builtin(PricingTier::Local);
    let plan = dispatcher.dispatch("tgm holders").unwrap();
    assert_eq!(plan.capability_id, "nansen-tgm-holders");
    assert_eq!(plan.partner_path.as_deref(), Some("/api/v1/tgm/holders"));
    assert_eq!(plan.verb, HttpVerb::Post);
}

#[test]
fn e2e_plan_serializes_without_absent_fields() {
    let dispatcher = Dispatcher::builtin(PricingTier::Local);
    let plan = dispatcher.dispatch("sundown digest").unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains(r#""capability_id":"sundown-digest""#));
    assert!(!json.contains("partner_path"));
    assert!(!json.contains("swap_params"));
    assert!(!json.contains("params"));
}
