//! Live alert types

use serde::{Deserialize, Serialize};

use crate::fixture::Score;

/// Urgency tier of a live alert, uniform across prediction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Hot,
    Warm,
    Cold,
}

impl AlertLevel {
    /// Tier for a number of outstanding goals/conditions
    pub fn from_goals_needed(needed: u32) -> Self {
        match needed {
            0 | 1 => AlertLevel::Hot,
            2 => AlertLevel::Warm,
            _ => AlertLevel::Cold,
        }
    }
}

/// Category tag of the prediction an alert tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Over,
    Under,
    Outcome,
    Btts,
}

/// The live state of one prediction, recomputed on every score tick.
///
/// Never persisted; an idempotent function of (prediction, score, elapsed).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertState {
    pub prediction_type: AlertKind,
    /// Goals/conditions outstanding before the prediction resolves
    pub goals_needed: u32,
    pub current_score: Score,
    /// What has to happen, in words
    pub target_description: String,
    pub is_first_half: bool,
    pub minutes_elapsed: u32,
    pub alert_level: AlertLevel,
    pub message: String,
    /// True once the prediction is already satisfied at the current score
    pub is_already_hit: bool,
}
