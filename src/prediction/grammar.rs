//! Shorthand prediction grammar
//!
//! One tokenizer/parser for the compact prediction language used in the
//! rule table and stored predictions ("MS 2.5 ÜST", "İY EV 0.5 ÜST",
//! "KG VAR", ...). Both the result evaluator and the live alert
//! calculator consume the parsed form, so the grammar cannot diverge
//! between them.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Which portion of the match the prediction is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Final score ("MS", or no scope token)
    FullTime,
    /// Half-time score ("İY")
    HalfTime,
}

/// Whose goals a threshold applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Both teams combined (no side token)
    Total,
    /// Home team ("EV")
    Home,
    /// Away team ("DEP")
    Away,
}

/// Exact result of the scoped period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// "1"
    HomeWin,
    /// "X"
    Draw,
    /// "2"
    AwayWin,
}

/// The comparator a prediction applies to the scoped score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionKind {
    /// Goals strictly greater than the threshold ("ÜST")
    Over { side: Side, threshold: Decimal },
    /// Goals strictly less than the threshold ("ALT")
    Under { side: Side, threshold: Decimal },
    /// Exact outcome ("MS 1" / "MS X" / "MS 2")
    Outcome(MatchOutcome),
    /// Both teams score ("KG VAR") or at least one fails to ("KG YOK")
    BothScore(bool),
}

/// A fully parsed prediction string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub scope: Scope,
    pub kind: PredictionKind,
}

impl Prediction {
    /// Parse a shorthand prediction string.
    ///
    /// Matching is case-insensitive after locale folding, and tolerates the
    /// side/scope token orders found in the historical rule table
    /// ("MS EV 0.5 ÜST" and "EV MS 0.5 ÜST" are the same prediction).
    /// Returns `None` for anything outside the grammar; unrecognized
    /// strings must flow through as "undetermined", never as an error.
    pub fn parse(input: &str) -> Option<Prediction> {
        let folded = fold_locale(input);
        let tokens: Vec<&str> = folded.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        let mut saw_half = false;
        let mut saw_full = false;
        let mut side: Option<Side> = None;
        let mut direction: Option<Direction> = None;
        let mut threshold: Option<Decimal> = None;
        let mut saw_kg = false;
        let mut both_score: Option<bool> = None;
        let mut saw_draw = false;

        for token in tokens {
            match token {
                "IY" => saw_half = true,
                "MS" => saw_full = true,
                "EV" => set_once(&mut side, Side::Home)?,
                "DEP" => set_once(&mut side, Side::Away)?,
                "UST" => set_once(&mut direction, Direction::Over)?,
                "ALT" => set_once(&mut direction, Direction::Under)?,
                "KG" => saw_kg = true,
                "VAR" => set_once(&mut both_score, true)?,
                "YOK" => set_once(&mut both_score, false)?,
                "X" => saw_draw = true,
                other => {
                    let value = Decimal::from_str(other).ok()?;
                    if value.is_sign_negative() {
                        return None;
                    }
                    set_once(&mut threshold, value)?;
                }
            }
        }

        let scope = if saw_half {
            Scope::HalfTime
        } else {
            Scope::FullTime
        };

        // Both-teams-to-score: "KG VAR" / "KG YOK" / "İY KG VAR"
        if saw_kg {
            let wants_both = both_score?;
            if side.is_some() || direction.is_some() || threshold.is_some() || saw_draw {
                return None;
            }
            return Some(Prediction {
                scope,
                kind: PredictionKind::BothScore(wants_both),
            });
        }
        if both_score.is_some() {
            // VAR/YOK without the KG marker is not part of the grammar
            return None;
        }

        // Over/under: threshold required, outcome tokens forbidden
        if let Some(direction) = direction {
            if saw_draw {
                return None;
            }
            let threshold = threshold?;
            let side = side.unwrap_or(Side::Total);
            let kind = match direction {
                Direction::Over => PredictionKind::Over { side, threshold },
                Direction::Under => PredictionKind::Under { side, threshold },
            };
            return Some(Prediction { scope, kind });
        }

        // Exact outcome: requires the explicit "MS" token ("MS 1", "İY MS X")
        if !saw_full || side.is_some() {
            return None;
        }
        let outcome = match (saw_draw, threshold) {
            (true, None) => MatchOutcome::Draw,
            (false, Some(t)) if t == Decimal::ONE => MatchOutcome::HomeWin,
            (false, Some(t)) if t == Decimal::TWO => MatchOutcome::AwayWin,
            _ => return None,
        };
        Some(Prediction {
            scope,
            kind: PredictionKind::Outcome(outcome),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Over,
    Under,
}

/// Record a token's meaning, rejecting duplicates and conflicts
fn set_once<T: PartialEq>(slot: &mut Option<T>, value: T) -> Option<()> {
    match slot {
        Some(existing) if *existing == value => Some(()),
        Some(_) => None,
        None => {
            *slot = Some(value);
            Some(())
        }
    }
}

/// Uppercase with the dotted/dotless I and diacritics folded to ASCII.
///
/// The grammar's source alphabet is Turkish; "üst"/"ÜST"/"Ust" must all
/// tokenize identically.
pub fn fold_locale(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'İ' | 'ı' | 'i' => 'I',
            'Ü' | 'ü' => 'U',
            'Ö' | 'ö' => 'O',
            'Ç' | 'ç' => 'C',
            'Ş' | 'ş' => 'S',
            'Ğ' | 'ğ' => 'G',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
