//! Bookmaker payload types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One bookmaker's quotes for a fixture, as delivered by the odds provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmaker {
    /// Provider bookmaker identifier
    pub id: u32,
    /// Markets offered by this bookmaker
    #[serde(default)]
    pub bets: Vec<BetMarket>,
}

/// One market (bet type) offered by a bookmaker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetMarket {
    /// Provider bet-type identifier
    pub id: u32,
    /// Outcome quotes within this market
    #[serde(default)]
    pub values: Vec<BetOutcome>,
}

/// A single outcome quote; the provider delivers odds as decimal strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetOutcome {
    /// Outcome label, e.g. "Over 2.5", "4", "Yes"
    pub value: String,
    /// Decimal odds as a string, e.g. "2.38"
    pub odd: String,
}

impl BetOutcome {
    /// Parse the quoted odd. Non-numeric strings are treated as absent.
    pub fn parsed_odd(&self) -> Option<Decimal> {
        Decimal::from_str(self.odd.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parsed_odd() {
        let outcome = BetOutcome {
            value: "Over 2.5".to_string(),
            odd: "1.23".to_string(),
        };
        assert_eq!(outcome.parsed_odd(), Some(dec!(1.23)));
    }

    #[test]
    fn test_parsed_odd_trims_whitespace() {
        let outcome = BetOutcome {
            value: "4".to_string(),
            odd: " 2.40 ".to_string(),
        };
        assert_eq!(outcome.parsed_odd(), Some(dec!(2.40)));
    }

    #[test]
    fn test_parsed_odd_non_numeric_is_absent() {
        let outcome = BetOutcome {
            value: "Yes".to_string(),
            odd: "N/A".to_string(),
        };
        assert_eq!(outcome.parsed_odd(), None);
    }

    #[test]
    fn test_bookmaker_deserialize_missing_bets() {
        let bookmaker: Bookmaker = serde_json::from_str(r#"{"id": 8}"#).unwrap();
        assert!(bookmaker.bets.is_empty());
    }
}
