//! Intent matching for Tollgate.
//!
//! Routes a free-text user utterance to a capability via an ordered,
//! first-match-wins rule list, extracts rule-specific parameters (news
//! ticker, signal token), and normalizes human-facing swap parameters into
//! wire-ready form. Pure and synchronous; the rule list and its compiled
//! patterns are built once and shared freely.

pub mod extract;
pub mod rules;
pub mod swap;

pub use rules::{MatchRule, RuleSet};
pub use swap::{SwapParamError, normalize_swap_params};
