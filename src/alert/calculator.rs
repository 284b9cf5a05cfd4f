//! Live alert calculation
//!
//! For an in-progress match, estimates how close a prediction is to
//! resolving: goals still needed, urgency tier, and already-hit /
//! already-busted states. Pure; recomputed from fresh inputs on every
//! tick.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::types::{AlertKind, AlertLevel, AlertState};
use crate::fixture::Score;
use crate::prediction::{side_goals, MatchOutcome, Prediction, PredictionKind, Scope, Side};

/// Compute the live alert state for one prediction.
///
/// Returns `None` when no meaningful alert exists: missing score,
/// unrecognized prediction, a half-time prediction past minute 45, an
/// under-threshold bet that is not yet one goal from busting, or a
/// "KG YOK" that has not failed.
pub fn live_alert(
    prediction: &str,
    current: Option<Score>,
    minutes_elapsed: u32,
    halftime: Option<Score>,
) -> Option<AlertState> {
    let current = current?;
    let parsed = Prediction::parse(prediction)?;

    let score = match parsed.scope {
        Scope::FullTime => current,
        Scope::HalfTime => {
            // Half-time predictions are only live through minute 45
            if minutes_elapsed > 45 {
                return None;
            }
            halftime.unwrap_or(current)
        }
    };

    let half_time_scope = parsed.scope == Scope::HalfTime;

    match parsed.kind {
        PredictionKind::Over { side, threshold } => Some(over_alert(
            prediction,
            side,
            threshold,
            score,
            current,
            minutes_elapsed,
            half_time_scope,
        )),
        PredictionKind::Under { side, threshold } => under_alert(
            prediction,
            side,
            threshold,
            score,
            current,
            minutes_elapsed,
            half_time_scope,
        ),
        PredictionKind::Outcome(outcome) => Some(outcome_alert(
            prediction,
            outcome,
            score,
            current,
            minutes_elapsed,
            half_time_scope,
        )),
        PredictionKind::BothScore(true) => Some(btts_alert(
            prediction,
            score,
            current,
            minutes_elapsed,
            half_time_scope,
        )),
        PredictionKind::BothScore(false) => {
            // "KG YOK" emits nothing while still alive; only certain loss
            // is reported
            if score.both_scored() {
                Some(state(
                    AlertKind::Btts,
                    0,
                    current,
                    describe_period("at least one side scoreless", half_time_scope),
                    minutes_elapsed,
                    format!("{prediction} busted ({current})"),
                    false,
                ))
            } else {
                None
            }
        }
    }
}

fn over_alert(
    prediction: &str,
    side: Side,
    threshold: Decimal,
    score: Score,
    current: Score,
    minutes_elapsed: u32,
    half_time_scope: bool,
) -> AlertState {
    let target = goal_target(threshold);
    let goals = side_goals(score, side);
    let needed = target.saturating_sub(goals);

    let description = describe_period(
        &format!("{target}+ {} goals", side_label(side)),
        half_time_scope,
    );
    let message = if needed == 0 {
        format!("{prediction} hit ({current})")
    } else {
        format!("{prediction}: {needed} goal(s) to go ({current}, {minutes_elapsed}')")
    };

    state(
        AlertKind::Over,
        needed,
        current,
        description,
        minutes_elapsed,
        message,
        needed == 0,
    )
}

/// Unders are silent until critical: an alert fires only when one more
/// goal busts the bet, and a busted bet reports certain loss.
fn under_alert(
    prediction: &str,
    side: Side,
    threshold: Decimal,
    score: Score,
    current: Score,
    minutes_elapsed: u32,
    half_time_scope: bool,
) -> Option<AlertState> {
    let bust_at = goal_target(threshold);
    let goals = side_goals(score, side);

    let description = describe_period(
        &format!(
            "at most {} {} goals",
            bust_at.saturating_sub(1),
            side_label(side)
        ),
        half_time_scope,
    );

    if goals >= bust_at {
        return Some(state(
            AlertKind::Under,
            0,
            current,
            description,
            minutes_elapsed,
            format!("{prediction} busted ({current})"),
            false,
        ));
    }
    if bust_at - goals == 1 {
        return Some(state(
            AlertKind::Under,
            1,
            current,
            description,
            minutes_elapsed,
            format!("{prediction}: one goal from busting ({current}, {minutes_elapsed}')"),
            false,
        ));
    }
    None
}

fn outcome_alert(
    prediction: &str,
    outcome: MatchOutcome,
    score: Score,
    current: Score,
    minutes_elapsed: u32,
    half_time_scope: bool,
) -> AlertState {
    let needed = match outcome {
        MatchOutcome::HomeWin => {
            if score.home > score.away {
                0
            } else {
                score.away - score.home + 1
            }
        }
        MatchOutcome::AwayWin => {
            if score.away > score.home {
                0
            } else {
                score.home - score.away + 1
            }
        }
        MatchOutcome::Draw => score.home.abs_diff(score.away),
    };

    let target = match outcome {
        MatchOutcome::HomeWin => "home win",
        MatchOutcome::Draw => "draw",
        MatchOutcome::AwayWin => "away win",
    };
    let description = describe_period(target, half_time_scope);
    let message = if needed == 0 {
        format!("{prediction} hit ({current})")
    } else {
        format!("{prediction}: {needed} goal(s) to go ({current}, {minutes_elapsed}')")
    };

    state(
        AlertKind::Outcome,
        needed,
        current,
        description,
        minutes_elapsed,
        message,
        needed == 0,
    )
}

fn btts_alert(
    prediction: &str,
    score: Score,
    current: Score,
    minutes_elapsed: u32,
    half_time_scope: bool,
) -> AlertState {
    let needed = u32::from(score.home == 0) + u32::from(score.away == 0);

    let description = describe_period("both teams to score", half_time_scope);
    let message = match (score.home == 0, score.away == 0) {
        (false, false) => format!("{prediction} hit ({current})"),
        (true, false) => {
            format!("{prediction}: waiting on the home side ({current}, {minutes_elapsed}')")
        }
        (false, true) => {
            format!("{prediction}: waiting on the away side ({current}, {minutes_elapsed}')")
        }
        (true, true) => {
            format!("{prediction}: both sides still to score ({current}, {minutes_elapsed}')")
        }
    };

    state(
        AlertKind::Btts,
        needed,
        current,
        description,
        minutes_elapsed,
        message,
        needed == 0,
    )
}

/// Goal count a threshold resolves at: ceil(threshold)
fn goal_target(threshold: Decimal) -> u32 {
    threshold.ceil().to_u32().unwrap_or(0)
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Total => "total",
        Side::Home => "home",
        Side::Away => "away",
    }
}

fn describe_period(target: &str, half_time_scope: bool) -> String {
    if half_time_scope {
        format!("{target} in the first half")
    } else {
        target.to_string()
    }
}

fn state(
    kind: AlertKind,
    goals_needed: u32,
    current: Score,
    target_description: String,
    minutes_elapsed: u32,
    message: String,
    is_already_hit: bool,
) -> AlertState {
    AlertState {
        prediction_type: kind,
        goals_needed,
        current_score: current,
        target_description,
        is_first_half: minutes_elapsed <= 45,
        minutes_elapsed,
        alert_level: AlertLevel::from_goals_needed(goals_needed),
        message,
        is_already_hit,
    }
}
