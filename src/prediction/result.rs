//! Final-result evaluation
//!
//! Scores a prediction string against the final (and optional half-time)
//! scoreline. Pure and idempotent; absent data resolves to
//! `Undetermined`, never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::grammar::{MatchOutcome, Prediction, PredictionKind, Scope, Side};
use crate::fixture::Score;

/// Ternary outcome of a settled prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetResult {
    Won,
    Lost,
    /// Unrecognized prediction, or half-time data required but absent
    Undetermined,
}

/// Evaluate a prediction against the final score.
///
/// Half-time-scoped predictions require the half-time score; without it
/// the result is `Undetermined` rather than a guess. Comparators are
/// strict: "2.5 ÜST" needs 3+ goals, never 2.
pub fn evaluate(prediction: &str, fulltime: Score, halftime: Option<Score>) -> BetResult {
    let Some(parsed) = Prediction::parse(prediction) else {
        return BetResult::Undetermined;
    };

    let score = match parsed.scope {
        Scope::FullTime => fulltime,
        Scope::HalfTime => match halftime {
            Some(score) => score,
            None => return BetResult::Undetermined,
        },
    };

    let won = match parsed.kind {
        PredictionKind::Over { side, threshold } => {
            Decimal::from(side_goals(score, side)) > threshold
        }
        PredictionKind::Under { side, threshold } => {
            Decimal::from(side_goals(score, side)) < threshold
        }
        PredictionKind::Outcome(outcome) => match outcome {
            MatchOutcome::HomeWin => score.home > score.away,
            MatchOutcome::Draw => score.home == score.away,
            MatchOutcome::AwayWin => score.home < score.away,
        },
        PredictionKind::BothScore(wants_both) => score.both_scored() == wants_both,
    };

    if won {
        BetResult::Won
    } else {
        BetResult::Lost
    }
}

/// Goals counted for a side selector
pub(crate) fn side_goals(score: Score, side: Side) -> u32 {
    match side {
        Side::Total => score.total(),
        Side::Home => score.home,
        Side::Away => score.away,
    }
}
