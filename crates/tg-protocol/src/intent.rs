//! Matcher output and wire-ready swap parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// String-keyed parameter mapping extracted from user text.
///
/// Ordered map so serialized output is deterministic.
pub type ParamMap = BTreeMap<String, String>;

/// Result of routing a user utterance to a capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedIntent {
    /// Canonical id of the selected capability.
    pub capability_id: String,
    /// Parameters derived from the text. `None` when the winning rule has no
    /// extractor; `Some` (possibly empty) when it does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamMap>,
}

impl MatchedIntent {
    pub fn new(capability_id: impl Into<String>) -> Self {
        Self {
            capability_id: capability_id.into(),
            params: None,
        }
    }

    pub fn with_params(capability_id: impl Into<String>, params: ParamMap) -> Self {
        Self {
            capability_id: capability_id.into(),
            params: Some(params),
        }
    }
}

/// Wire-ready parameters for a token swap order: resolved on-chain
/// identifiers plus the amount in base units of the source token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOrderParams {
    /// On-chain identifier of the token being sold.
    pub input_mint: String,
    /// On-chain identifier of the token being bought.
    pub output_mint: String,
    /// Base-unit amount of the input token, stringified integer.
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_without_params_skips_field() {
        let intent = MatchedIntent::new("dexscreener");
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(json, r#"{"capability_id":"dexscreener"}"#);
    }

    #[test]
    fn intent_with_params_roundtrip() {
        let mut params = ParamMap::new();
        params.insert("ticker".into(), "ETH".into());
        let intent = MatchedIntent::with_params("news", params);
        let json = serde_json::to_string(&intent).unwrap();
        let back: MatchedIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.capability_id, "news");
        assert_eq!(back.params.unwrap()["ticker"], "ETH");
    }

    #[test]
    fn swap_params_use_camel_case_keys() {
        let params = SwapOrderParams {
            input_mint: "MintA".into(),
            output_mint: "MintB".into(),
            amount: "1000000000".into(),
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains(r#""inputMint":"MintA""#));
        assert!(json.contains(r#""outputMint":"MintB""#));
        assert!(json.contains(r#""amount":"1000000000""#));
    }
}
