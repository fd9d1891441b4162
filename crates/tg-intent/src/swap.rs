//! Swap parameter normalization: human-facing fields → wire-ready params.
//!
//! Callers supply symbolic token names and a human-readable decimal amount;
//! the wire wants resolved on-chain mints and an integer base-unit amount.
//! Conversion is all-or-nothing: every field resolves cleanly or the whole
//! request is rejected with a typed reason. Rejection is a normal outcome,
//! not a fault.

use thiserror::Error;

use tg_protocol::{ParamMap, SwapOrderParams};

/// Why a swap request could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapParamError {
    #[error("missing or empty field: {0}")]
    MissingField(&'static str),

    #[error("unsupported token symbol: {0}")]
    UnknownSymbol(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("amount rounds to zero base units")]
    ZeroBaseAmount,
}

/// Mint address and base-unit decimals for a supported token.
struct TokenInfo {
    mint: &'static str,
    decimals: u32,
}

/// Supported symbols for swap normalization. Case-insensitive lookup.
fn token_info(symbol: &str) -> Option<TokenInfo> {
    match symbol {
        "USDC" => Some(TokenInfo {
            mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            decimals: 6,
        }),
        "SOL" => Some(TokenInfo {
            mint: "So11111111111111111111111111111111111111112",
            decimals: 9,
        }),
        _ => None,
    }
}

/// Read a field accepting both snake_case and camelCase keys.
fn field<'a>(params: &'a ParamMap, snake: &str, camel: &str) -> Option<&'a str> {
    params
        .get(snake)
        .or_else(|| params.get(camel))
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Convert human-facing swap fields into wire-ready parameters.
///
/// The base-unit amount is `round(human × 10^decimals)` for the *source*
/// token. Thousands separators in the amount are tolerated.
pub fn normalize_swap_params(params: &ParamMap) -> Result<SwapOrderParams, SwapParamError> {
    let from_symbol = field(params, "from_token", "fromToken")
        .ok_or(SwapParamError::MissingField("from_token"))?
        .trim()
        .to_uppercase();
    let to_symbol = field(params, "to_token", "toToken")
        .ok_or(SwapParamError::MissingField("to_token"))?
        .trim()
        .to_uppercase();
    let amount_raw = params
        .get("amount")
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(SwapParamError::MissingField("amount"))?
        .trim();

    let human: f64 = amount_raw
        .replace(',', "")
        .parse()
        .map_err(|_| SwapParamError::InvalidAmount(amount_raw.to_string()))?;
    if !human.is_finite() || human <= 0.0 {
        return Err(SwapParamError::InvalidAmount(amount_raw.to_string()));
    }

    let from =
        token_info(&from_symbol).ok_or_else(|| SwapParamError::UnknownSymbol(from_symbol.clone()))?;
    let to = token_info(&to_symbol).ok_or_else(|| SwapParamError::UnknownSymbol(to_symbol.clone()))?;

    let base_units = (human * 10f64.powi(from.decimals as i32)).round();
    if !base_units.is_finite() || base_units < 1.0 {
        return Err(SwapParamError::ZeroBaseAmount);
    }

    Ok(SwapOrderParams {
        input_mint: from.mint.to_string(),
        output_mint: to.mint.to_string(),
        amount: format!("{:.0}", base_units),
    })
}
