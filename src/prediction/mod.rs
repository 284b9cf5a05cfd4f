//! Prediction module
//!
//! The shared shorthand grammar and the final-result evaluator. The live
//! alert calculator consumes the same parsed form, so both sides of the
//! system agree on exactly one grammar.

mod grammar;
mod result;

pub use grammar::{fold_locale, MatchOutcome, Prediction, PredictionKind, Scope, Side};
pub use result::{evaluate, BetResult};

pub(crate) use result::side_goals;
