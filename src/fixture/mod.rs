//! Fixture types
//!
//! Match identity, scorelines, and the provider's status taxonomy

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled or in-progress football match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Provider fixture identifier
    pub fixture_id: i64,
    /// Home team name
    pub home_team: String,
    /// Away team name
    pub away_team: String,
    /// League name
    pub league: String,
    /// Kickoff time
    pub kickoff: DateTime<Utc>,
}

/// A scoreline at some point in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    /// Create a new scoreline
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Total goals scored by both teams
    pub fn total(&self) -> u32 {
        self.home + self.away
    }

    /// True if both teams have scored at least once
    pub fn both_scored(&self) -> bool {
        self.home > 0 && self.away > 0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Match lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    Live,
    Halftime,
    Finished,
    Suspended,
    Interrupted,
    Postponed,
    Cancelled,
    Abandoned,
    Awarded,
    Walkover,
    Unknown,
}

impl MatchStatus {
    /// Map a provider short status code to a status.
    ///
    /// Codes follow the fixture provider's taxonomy: `NS` not started,
    /// `1H`/`2H`/`ET`/`P`/`LIVE` in play, `HT` half-time break, `FT`/`AET`/`PEN`
    /// final, plus the administrative states (`PST`, `CANC`, `ABD`, ...).
    pub fn from_short_code(code: &str) -> Self {
        match code {
            "TBD" | "NS" => MatchStatus::NotStarted,
            "1H" | "2H" | "ET" | "P" | "LIVE" => MatchStatus::Live,
            "HT" => MatchStatus::Halftime,
            "FT" | "AET" | "PEN" | "BT" => MatchStatus::Finished,
            "SUSP" => MatchStatus::Suspended,
            "INT" => MatchStatus::Interrupted,
            "PST" => MatchStatus::Postponed,
            "CANC" => MatchStatus::Cancelled,
            "ABD" => MatchStatus::Abandoned,
            "AWD" => MatchStatus::Awarded,
            "WO" => MatchStatus::Walkover,
            _ => MatchStatus::Unknown,
        }
    }

    /// True while the ball is (or may still be) in play
    pub fn is_live(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Halftime)
    }

    /// True once the final result is known
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            MatchStatus::Finished | MatchStatus::Awarded | MatchStatus::Walkover
        )
    }
}
