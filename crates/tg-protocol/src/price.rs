//! Monetary amounts for capability pricing.
//!
//! Prices are stored as integer micro-USD so that aggregate sums and tier
//! scaling stay exact — no floating-point accumulation anywhere in the
//! pricing path. Floats appear only at the display boundary.

use serde::{Deserialize, Serialize};

/// A non-negative USD amount in micro-dollars (10⁻⁶ USD).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PriceUsd(u64);

impl PriceUsd {
    pub const ZERO: Self = Self(0);

    /// Construct from a micro-USD count ($0.01 == 10_000 micros).
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Lossy conversion for display and reporting only.
    pub fn as_usd(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

impl std::ops::Add for PriceUsd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Mul<u64> for PriceUsd {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self {
        Self(self.0 * rhs)
    }
}

impl std::iter::Sum for PriceUsd {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for PriceUsd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dollars = self.0 / 1_000_000;
        let frac = self.0 % 1_000_000;
        if frac == 0 {
            return write!(f, "${dollars}.00");
        }
        let mut frac_str = format!("{frac:06}");
        while frac_str.len() > 2 && frac_str.ends_with('0') {
            frac_str.pop();
        }
        write!(f, "${dollars}.{frac_str}")
    }
}

/// The two prices attached to a capability: what is charged and what the UI
/// shows. Independent axes — display is not derived from charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Amount actually charged for the call.
    pub price: PriceUsd,
    /// End-user-facing cost shown in listings.
    pub display_price: PriceUsd,
}
