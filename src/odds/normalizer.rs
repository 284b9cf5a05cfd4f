//! Odds normalization
//!
//! Folds a provider bookmaker list into one `CanonicalOdds` record.
//! Bookmakers are visited in a configured preference order; each key is
//! filled by the first bookmaker that quotes it and never overwritten.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{BetMarket, Bookmaker};
use super::CanonicalOdds;

/// Normalizer configuration
///
/// The provider bet-type ids and the bookmaker preference order vary per
/// deployment, so both are injected rather than hard-coded.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Bookmaker ids in preference order; unlisted bookmakers sort after
    /// all listed ones, keeping their relative payload order
    pub bookmaker_preference: Vec<u32>,
    /// Bet-type id of the exact-total-goals market
    pub exact_goals_bet_id: u32,
    /// Bet-type id of the totals over/under market
    pub over_under_bet_id: u32,
    /// Bet-type id of the both-teams-to-score market
    pub btts_bet_id: u32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            bookmaker_preference: vec![8, 11, 6],
            exact_goals_bet_id: 38,
            over_under_bet_id: 5,
            btts_bet_id: 8,
        }
    }
}

/// Normalize a bookmaker payload into the canonical odds record.
///
/// Scanning stops as soon as the primary key (`4-5`) is filled; bookmakers
/// after that point are not inspected.
pub fn normalize_odds(bookmakers: &[Bookmaker], config: &NormalizerConfig) -> CanonicalOdds {
    let mut canonical = CanonicalOdds::default();

    for bookmaker in order_by_preference(bookmakers, &config.bookmaker_preference) {
        if canonical.has_primary() {
            break;
        }
        canonical = canonical.merge_missing(extract_bookmaker(bookmaker, config));
    }

    canonical
}

/// Sort bookmakers by position in the preference list; unknown ids rank
/// after every known id. The sort is stable, so unknown bookmakers keep
/// their payload order among themselves.
fn order_by_preference<'a>(
    bookmakers: &'a [Bookmaker],
    preference: &[u32],
) -> Vec<&'a Bookmaker> {
    let rank = |id: u32| {
        preference
            .iter()
            .position(|&p| p == id)
            .unwrap_or(preference.len())
    };

    let mut ordered: Vec<&Bookmaker> = bookmakers.iter().collect();
    ordered.sort_by_key(|bm| rank(bm.id));
    ordered
}

/// Extract every canonical key one bookmaker can fill
fn extract_bookmaker(bookmaker: &Bookmaker, config: &NormalizerConfig) -> CanonicalOdds {
    let mut partial = CanonicalOdds::default();

    for bet in &bookmaker.bets {
        let extracted = if bet.id == config.exact_goals_bet_id {
            extract_exact_goals(bet)
        } else if bet.id == config.over_under_bet_id {
            extract_over_under(bet)
        } else if bet.id == config.btts_bet_id {
            extract_btts(bet)
        } else {
            continue;
        };
        partial = partial.merge_missing(extracted);
    }

    partial
}

/// Exact-totals market: combine the 4/5 and 2/3 outcome pairs
fn extract_exact_goals(bet: &BetMarket) -> CanonicalOdds {
    CanonicalOdds {
        exact_45: harmonic_mean(outcome_odd(bet, "4"), outcome_odd(bet, "5")),
        exact_23: harmonic_mean(outcome_odd(bet, "2"), outcome_odd(bet, "3")),
        ..Default::default()
    }
}

/// Totals over/under market: the four 2.5/3.5 threshold outcomes
fn extract_over_under(bet: &BetMarket) -> CanonicalOdds {
    CanonicalOdds {
        over_25: outcome_odd(bet, "Over 2.5"),
        under_25: outcome_odd(bet, "Under 2.5"),
        over_35: outcome_odd(bet, "Over 3.5"),
        under_35: outcome_odd(bet, "Under 3.5"),
        ..Default::default()
    }
}

/// Both-teams-to-score market: the "Yes" outcome
fn extract_btts(bet: &BetMarket) -> CanonicalOdds {
    CanonicalOdds {
        btts_yes: outcome_odd(bet, "Yes"),
        ..Default::default()
    }
}

/// Odds for an exact outcome label within one market
fn outcome_odd(bet: &BetMarket, label: &str) -> Option<Decimal> {
    bet.values
        .iter()
        .find(|v| v.value == label)
        .and_then(|v| v.parsed_odd())
}

/// Harmonic mean of a paired outcome, `2ab/(a+b)`, rounded to 2 decimals.
///
/// Both legs are required; a single leg is never recorded on its own.
fn harmonic_mean(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    let (a, b) = (a?, b?);
    let sum = a + b;
    if sum.is_zero() {
        return None;
    }
    let mean = Decimal::TWO * a * b / sum;
    Some(mean.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
