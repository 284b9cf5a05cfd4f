//! Odds module
//!
//! Normalizes provider bookmaker payloads into the canonical fixed-key
//! odds record consumed by the rule matcher.

mod normalizer;
mod types;

pub use normalizer::{normalize_odds, NormalizerConfig};
pub use types::{BetMarket, BetOutcome, Bookmaker};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The closed set of market keys the engine understands.
///
/// Serialized spellings are the wire format shared with the rule table and
/// stored predictions and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OddsKey {
    /// Harmonic mean of the exact-4 and exact-5 total-goals odds (primary key)
    #[serde(rename = "4-5")]
    Exact45,
    /// Over 2.5 total goals
    #[serde(rename = "2,5 Ü")]
    Over25,
    /// Under 2.5 total goals
    #[serde(rename = "2,5 A")]
    Under25,
    /// Over 3.5 total goals
    #[serde(rename = "3,5 Ü")]
    Over35,
    /// Under 3.5 total goals
    #[serde(rename = "3,5 A")]
    Under35,
    /// Harmonic mean of the exact-2 and exact-3 total-goals odds
    #[serde(rename = "2-3")]
    Exact23,
    /// Both teams to score, "Yes" outcome
    #[serde(rename = "VAR")]
    BttsYes,
}

impl OddsKey {
    /// Every canonical key, in record order
    pub const ALL: [OddsKey; 7] = [
        OddsKey::Exact45,
        OddsKey::Over25,
        OddsKey::Under25,
        OddsKey::Over35,
        OddsKey::Under35,
        OddsKey::Exact23,
        OddsKey::BttsYes,
    ];

    /// Wire spelling of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            OddsKey::Exact45 => "4-5",
            OddsKey::Over25 => "2,5 Ü",
            OddsKey::Under25 => "2,5 A",
            OddsKey::Over35 => "3,5 Ü",
            OddsKey::Under35 => "3,5 A",
            OddsKey::Exact23 => "2-3",
            OddsKey::BttsYes => "VAR",
        }
    }
}

impl std::fmt::Display for OddsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical odds record for one fixture.
///
/// Every key is always present; `None` means the provider had no usable
/// quote. A missing primary key (`4-5`) means no rule can match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOdds {
    #[serde(rename = "4-5")]
    pub exact_45: Option<Decimal>,
    #[serde(rename = "2,5 Ü")]
    pub over_25: Option<Decimal>,
    #[serde(rename = "2,5 A")]
    pub under_25: Option<Decimal>,
    #[serde(rename = "3,5 Ü")]
    pub over_35: Option<Decimal>,
    #[serde(rename = "3,5 A")]
    pub under_35: Option<Decimal>,
    #[serde(rename = "2-3")]
    pub exact_23: Option<Decimal>,
    #[serde(rename = "VAR")]
    pub btts_yes: Option<Decimal>,
}

impl CanonicalOdds {
    /// Value for a canonical key
    pub fn get(&self, key: OddsKey) -> Option<Decimal> {
        match key {
            OddsKey::Exact45 => self.exact_45,
            OddsKey::Over25 => self.over_25,
            OddsKey::Under25 => self.under_25,
            OddsKey::Over35 => self.over_35,
            OddsKey::Under35 => self.under_35,
            OddsKey::Exact23 => self.exact_23,
            OddsKey::BttsYes => self.btts_yes,
        }
    }

    /// True once the primary key is filled
    pub fn has_primary(&self) -> bool {
        self.exact_45.is_some()
    }

    /// True if no key carries a value
    pub fn is_empty(&self) -> bool {
        OddsKey::ALL.iter().all(|&k| self.get(k).is_none())
    }

    /// Combine two records, keeping already-filled keys (first-write-wins)
    pub(crate) fn merge_missing(self, other: CanonicalOdds) -> CanonicalOdds {
        CanonicalOdds {
            exact_45: self.exact_45.or(other.exact_45),
            over_25: self.over_25.or(other.over_25),
            under_25: self.under_25.or(other.under_25),
            over_35: self.over_35.or(other.over_35),
            under_35: self.under_35.or(other.under_35),
            exact_23: self.exact_23.or(other.exact_23),
            btts_yes: self.btts_yes.or(other.btts_yes),
        }
    }
}
