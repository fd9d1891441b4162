//! Charged-price schedule, one place to maintain all capability prices.
//!
//! Charged amounts scale with the deployment tier: production runs at 100×
//! the base schedule, local at 1/100 (cheap testing prices). Display prices
//! are fixed production-facing costs and do not scale. All arithmetic is on
//! integer micro-USD, so tier scaling and aggregate sums stay exact.

use serde::{Deserialize, Serialize};
use tg_protocol::PriceUsd;

// ── Base charged prices (pre-tier) ────────────────────────────

/// Standard capability call: $0.01 base.
pub const STANDARD: PriceUsd = PriceUsd::from_micros(10_000);
/// Health-check endpoints carry a minimal fee: $0.0001 base.
pub const CHECK_STATUS: PriceUsd = PriceUsd::from_micros(100);
/// News endpoints.
pub const NEWS: PriceUsd = PriceUsd::from_micros(10_000);
/// Deep research endpoints.
pub const RESEARCH: PriceUsd = PriceUsd::from_micros(10_000);
/// Nansen hub and per-endpoint calls.
pub const NANSEN: PriceUsd = PriceUsd::from_micros(10_000);
/// Premium Nansen endpoints (netflow, holdings, trades, leaderboards).
pub const NANSEN_PREMIUM: PriceUsd = PriceUsd::from_micros(20_000);
/// DexScreener data.
pub const DEXSCREENER: PriceUsd = PriceUsd::from_micros(10_000);
/// Workfun pump endpoint.
pub const PUMP: PriceUsd = PriceUsd::from_micros(10_000);
/// Jupiter swap order (buy/sell token).
pub const JUPITER_SWAP: PriceUsd = PriceUsd::from_micros(20_000);
/// CoinGecko simple-price and onchain endpoints.
pub const COINGECKO: PriceUsd = PriceUsd::from_micros(10_000);
/// EXA web search.
pub const EXA_SEARCH: PriceUsd = PriceUsd::from_micros(10_000);

// ── Display prices (tier-independent) ─────────────────────────

/// Standard per-call cost shown to end users.
pub const DISPLAY_STANDARD: PriceUsd = PriceUsd::from_micros(1_000_000);
/// Displayed health-check cost.
pub const DISPLAY_CHECK_STATUS: PriceUsd = PriceUsd::from_micros(10_000);
/// Displayed swap-order cost.
pub const DISPLAY_JUPITER_SWAP: PriceUsd = PriceUsd::from_micros(2_000_000);
/// Displayed premium Nansen cost.
pub const DISPLAY_NANSEN_PREMIUM: PriceUsd = PriceUsd::from_micros(2_000_000);

// ── Tier ──────────────────────────────────────────────────────

/// Deployment tier selecting the charged-price scale.
///
/// Chosen once at catalog construction; the catalog stores the scaled
/// amounts, so lookups never re-apply the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    /// Cheap testing prices: base ÷ 100.
    #[default]
    Local,
    /// Production prices: base × 100.
    Production,
}

impl PricingTier {
    /// Scale a base charged price to this tier.
    pub fn apply(self, base: PriceUsd) -> PriceUsd {
        match self {
            Self::Local => PriceUsd::from_micros(base.micros() / 100),
            Self::Production => PriceUsd::from_micros(base.micros() * 100),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl std::str::FromStr for PricingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown pricing tier: {other}")),
        }
    }
}

impl std::fmt::Display for PricingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_tier_divides_by_100() {
        assert_eq!(
            PricingTier::Local.apply(STANDARD),
            PriceUsd::from_micros(100)
        );
        assert_eq!(
            PricingTier::Local.apply(CHECK_STATUS),
            PriceUsd::from_micros(1)
        );
    }

    #[test]
    fn production_tier_multiplies_by_100() {
        assert_eq!(
            PricingTier::Production.apply(STANDARD),
            PriceUsd::from_micros(1_000_000)
        );
        assert_eq!(
            PricingTier::Production.apply(JUPITER_SWAP),
            PriceUsd::from_micros(2_000_000)
        );
    }

    #[test]
    fn tier_scaling_is_linear_over_sums() {
        // Scaling components then summing must equal summing then scaling,
        // or the precomputed aggregate would drift from its parts.
        let parts = [DEXSCREENER, STANDARD, NANSEN, STANDARD];
        let summed: PriceUsd = parts.into_iter().sum();
        let scaled_sum: PriceUsd = parts
            .into_iter()
            .map(|p| PricingTier::Production.apply(p))
            .sum();
        assert_eq!(PricingTier::Production.apply(summed), scaled_sum);
    }

    #[test]
    fn tier_parses_from_str() {
        assert_eq!("local".parse::<PricingTier>().unwrap(), PricingTier::Local);
        assert_eq!(
            "Production".parse::<PricingTier>().unwrap(),
            PricingTier::Production
        );
        assert_eq!(
            "prod".parse::<PricingTier>().unwrap(),
            PricingTier::Production
        );
        assert!("staging".parse::<PricingTier>().is_err());
    }
}
