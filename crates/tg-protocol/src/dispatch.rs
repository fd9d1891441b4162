//! The dispatcher's output: everything a caller needs to perform the call.

use serde::{Deserialize, Serialize};

use crate::capability::HttpVerb;
use crate::intent::{ParamMap, SwapOrderParams};
use crate::price::PriceUsd;

/// A fully resolved selection for one utterance.
///
/// The engine stops here: the caller performs the HTTP request against
/// `path`/`verb` (or `partner_path` for partner-proxied capabilities) and
/// carries out the payment handshake at `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchPlan {
    /// Canonical id of the selected capability.
    pub capability_id: String,
    /// Wire path relative to the API base.
    pub path: String,
    /// HTTP verb for the wire call.
    pub verb: HttpVerb,
    /// Upstream vendor path, for capabilities the caller hits directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_path: Option<String>,
    /// Amount charged for the call.
    pub price: PriceUsd,
    /// End-user-facing cost.
    pub display_price: PriceUsd,
    /// Raw parameters extracted from the utterance, if the winning rule
    /// derived any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamMap>,
    /// Wire-ready swap parameters; present only when the selection is a
    /// swap order and the raw parameters normalized cleanly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_params: Option<SwapOrderParams>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_roundtrip() {
        let mut params = ParamMap::new();
        params.insert("ticker".into(), "ETH".into());
        let plan = DispatchPlan {
            capability_id: "news".into(),
            path: "/v2/news".into(),
            verb: HttpVerb::Get,
            partner_path: None,
            price: PriceUsd::from_micros(100),
            display_price: PriceUsd::from_micros(1_000_000),
            params: Some(params),
            swap_params: None,
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: DispatchPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn absent_optionals_are_skipped() {
        let plan = DispatchPlan {
            capability_id: "event".into(),
            path: "/v2/event".into(),
            verb: HttpVerb::Get,
            partner_path: None,
            price: PriceUsd::ZERO,
            display_price: PriceUsd::ZERO,
            params: None,
            swap_params: None,
        };
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("partner_path"));
        assert!(!json.contains("params"));
        assert!(!json.contains("swap_params"));
    }
}
