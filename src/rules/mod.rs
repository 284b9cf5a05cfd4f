//! Golden rules module
//!
//! Rule table types and loading, tolerance-based matching against
//! canonical odds, and per-prediction confidence adjustment.

mod confidence;
mod matcher;
mod types;

pub use confidence::prediction_confidence;
pub use matcher::{MatchedRule, MatcherConfig, RuleMatcher};
pub use types::{Importance, Rule, RuleError, RuleIssue, RuleSet};
