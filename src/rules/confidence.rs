//! Confidence adjustment
//!
//! A matched rule's base confidence is nudged per prediction: the rule's
//! importance tier adds up to 3 points, short prediction lists add up to
//! 2 (a rule that commits to few outcomes is more certain about each),
//! and the first-listed prediction adds 1. Capped at 100.

use super::matcher::MatchedRule;

/// Adjusted confidence for one prediction of a matched rule, 0-100
pub fn prediction_confidence(matched: &MatchedRule, prediction: &str) -> u8 {
    let mut score = matched.confidence_base as u32;

    score += matched.importance.confidence_bonus() as u32;

    score += match matched.predictions.len() {
        0..=2 => 2,
        3..=4 => 1,
        _ => 0,
    };

    if matched.predictions.first().map(String::as_str) == Some(prediction) {
        score += 1;
    }

    score.min(100) as u8
}
