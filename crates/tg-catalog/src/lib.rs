//! Capability catalog for Tollgate.
//!
//! Holds the immutable table of priced capabilities, resolves alternate
//! identifiers to canonical ids, answers price lookups in O(1), and renders
//! the two read-only summary projections (human briefing, LLM selection
//! list). Everything is constructed once and never mutated.

pub mod catalog;
pub mod pricing;
pub mod projections;

pub use catalog::Catalog;
pub use pricing::PricingTier;
pub use projections::{SelectionEntry, capability_briefing, selection_entries};
