//! Rule matching
//!
//! Compares a canonical odds record against the golden rule table using a
//! tolerance window, producing matched rules ranked by confidence with a
//! 0-100 match quality.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::types::{Importance, Rule};
use crate::odds::CanonicalOdds;

/// Matcher configuration
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Inclusive window for |actual - target| on every criterion
    pub tolerance: Decimal,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            // 0.04
            tolerance: Decimal::new(4, 2),
        }
    }
}

/// A rule that matched one fixture's odds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedRule {
    pub rule_id: u32,
    pub name: String,
    pub predictions: Vec<String>,
    pub confidence_base: u8,
    pub importance: Importance,
    /// How numerically close the odds were to the rule's targets, 0-100
    #[serde(rename = "matchQuality")]
    pub match_quality: u8,
}

/// Matches canonical odds against a rule table
#[derive(Debug, Clone, Default)]
pub struct RuleMatcher {
    config: MatcherConfig,
}

impl RuleMatcher {
    /// Create a matcher with the given configuration
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Match every active rule against one fixture's canonical odds.
    ///
    /// Returns matched rules sorted by confidence descending; match quality
    /// breaks ties only. Without a primary odds value no rule can match and
    /// the result is empty.
    pub fn match_rules(&self, odds: &CanonicalOdds, rules: &[Rule]) -> Vec<MatchedRule> {
        if !odds.has_primary() {
            return Vec::new();
        }

        let mut matched: Vec<MatchedRule> = rules
            .iter()
            .filter(|rule| rule.is_active)
            .filter_map(|rule| self.match_rule(odds, rule))
            .collect();

        matched.sort_by(|a, b| {
            b.confidence_base
                .cmp(&a.confidence_base)
                .then(b.match_quality.cmp(&a.match_quality))
        });
        matched
    }

    /// Evaluate one rule; `None` means rejected or unmatchable
    fn match_rule(&self, odds: &CanonicalOdds, rule: &Rule) -> Option<MatchedRule> {
        // A rule without a primary criterion is malformed; skip it quietly
        let (primary_key, primary_target) = rule.primary()?;
        let primary_value = odds.get(primary_key)?;
        let primary_diff = (primary_value - primary_target).abs();
        if primary_diff > self.config.tolerance {
            return None;
        }
        let primary_quality = self.key_quality(primary_diff);

        // All-or-nothing over secondary keys, tracking the worst quality
        let mut worst_secondary: Option<u8> = None;
        if let Some(secondary) = &rule.secondary_odds {
            for (&key, &target) in secondary {
                let value = odds.get(key)?;
                let diff = (value - target).abs();
                if diff > self.config.tolerance {
                    return None;
                }
                let quality = self.key_quality(diff);
                worst_secondary = Some(worst_secondary.map_or(quality, |w| w.min(quality)));
            }
        }

        // Any exclusion key inside the window vetoes the rule
        if let Some(exclude) = &rule.exclude_odds {
            for (&key, &target) in exclude {
                if let Some(value) = odds.get(key) {
                    if (value - target).abs() <= self.config.tolerance {
                        return None;
                    }
                }
            }
        }

        let match_quality = match worst_secondary {
            Some(worst) => round_half_up(
                (Decimal::from(primary_quality as u32) + Decimal::from(worst as u32))
                    / Decimal::TWO,
            ),
            None => primary_quality,
        };

        Some(MatchedRule {
            rule_id: rule.rule_id,
            name: rule.name.clone(),
            predictions: rule.predictions.clone(),
            confidence_base: rule.confidence_base,
            importance: rule.importance,
            match_quality,
        })
    }

    /// Per-key precision score: 100 at an exact hit, 50 at the tolerance edge
    fn key_quality(&self, diff: Decimal) -> u8 {
        if self.config.tolerance.is_zero() {
            // Zero tolerance admits exact hits only
            return 100;
        }
        let quality =
            Decimal::ONE_HUNDRED - (diff / self.config.tolerance) * Decimal::from(50u32);
        round_half_up(quality)
    }
}

fn round_half_up(value: Decimal) -> u8 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::OddsKey;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn odds(primary: Decimal) -> CanonicalOdds {
        CanonicalOdds {
            exact_45: Some(primary),
            ..Default::default()
        }
    }

    fn rule(rule_id: u32, primary: Decimal, confidence: u8) -> Rule {
        Rule {
            rule_id,
            name: format!("4-5 gol {primary}"),
            primary_odds: BTreeMap::from([(OddsKey::Exact45, primary)]),
            secondary_odds: None,
            exclude_odds: None,
            predictions: vec!["İY 0.5 ÜST".to_string()],
            confidence_base: confidence,
            importance: Importance::Normal,
            is_active: true,
        }
    }

    #[test]
    fn test_no_primary_odds_short_circuits() {
        let matcher = RuleMatcher::default();
        let empty = CanonicalOdds {
            over_25: Some(dec!(1.23)),
            ..Default::default()
        };
        assert!(matcher
            .match_rules(&empty, &[rule(1, dec!(2.40), 90)])
            .is_empty());
    }

    #[test]
    fn test_tolerance_boundary_is_inclusive() {
        let matcher = RuleMatcher::default();
        let table = [rule(1, dec!(2.50), 90)];

        // diff = 0.04 matches, diff = 0.05 does not
        assert_eq!(matcher.match_rules(&odds(dec!(2.54)), &table).len(), 1);
        assert!(matcher.match_rules(&odds(dec!(2.55)), &table).is_empty());
    }

    #[test]
    fn test_primary_quality() {
        let matcher = RuleMatcher::default();
        let table = [rule(1, dec!(2.50), 90)];

        // Exact hit
        assert_eq!(
            matcher.match_rules(&odds(dec!(2.50)), &table)[0].match_quality,
            100
        );
        // Half the window: 100 - 0.5*50 = 75
        assert_eq!(
            matcher.match_rules(&odds(dec!(2.52)), &table)[0].match_quality,
            75
        );
        // Window edge: 100 - 1.0*50 = 50
        assert_eq!(
            matcher.match_rules(&odds(dec!(2.54)), &table)[0].match_quality,
            50
        );
    }

    #[test]
    fn test_secondary_all_or_nothing() {
        let matcher = RuleMatcher::default();
        let mut with_secondary = rule(1, dec!(2.51), 90);
        with_secondary.secondary_odds =
            Some(BTreeMap::from([(OddsKey::Over25, dec!(1.23))]));

        // Secondary key absent from the canonical record -> reject
        assert!(matcher
            .match_rules(&odds(dec!(2.51)), &[with_secondary.clone()])
            .is_empty());

        // Secondary key out of window -> reject
        let mut record = odds(dec!(2.51));
        record.over_25 = Some(dec!(1.30));
        assert!(matcher
            .match_rules(&record, std::slice::from_ref(&with_secondary))
            .is_empty());

        // In window -> match
        record.over_25 = Some(dec!(1.25));
        assert_eq!(
            matcher
                .match_rules(&record, std::slice::from_ref(&with_secondary))
                .len(),
            1
        );
    }

    #[test]
    fn test_worst_secondary_key_dominates() {
        let matcher = RuleMatcher::default();
        let mut with_secondary = rule(1, dec!(2.50), 90);
        with_secondary.secondary_odds = Some(BTreeMap::from([
            (OddsKey::Over25, dec!(1.23)),
            (OddsKey::BttsYes, dec!(1.55)),
        ]));

        let record = CanonicalOdds {
            exact_45: Some(dec!(2.50)),  // quality 100
            over_25: Some(dec!(1.23)),   // quality 100
            btts_yes: Some(dec!(1.59)),  // quality 50 -> dominates
            ..Default::default()
        };

        // (100 + min(100, 50)) / 2 = 75
        let matched = matcher.match_rules(&record, &[with_secondary]);
        assert_eq!(matched[0].match_quality, 75);
    }

    #[test]
    fn test_exclusion_veto() {
        let matcher = RuleMatcher::default();
        let mut with_exclude = rule(1, dec!(2.50), 90);
        with_exclude.exclude_odds = Some(BTreeMap::from([(OddsKey::Under25, dec!(3.90))]));

        // Exclusion key inside the window vetoes an otherwise-perfect match
        let mut record = odds(dec!(2.50));
        record.under_25 = Some(dec!(3.92));
        assert!(matcher
            .match_rules(&record, std::slice::from_ref(&with_exclude))
            .is_empty());

        // Outside the window the rule survives
        record.under_25 = Some(dec!(3.50));
        assert_eq!(
            matcher
                .match_rules(&record, std::slice::from_ref(&with_exclude))
                .len(),
            1
        );

        // A null exclusion key never vetoes
        record.under_25 = None;
        assert_eq!(
            matcher
                .match_rules(&record, std::slice::from_ref(&with_exclude))
                .len(),
            1
        );
    }

    #[test]
    fn test_ranking_confidence_dominates_quality() {
        let matcher = RuleMatcher::default();
        // Rule 1: confidence 88, exact primary hit (quality 100)
        // Rule 2: confidence 90, edge-of-window hit (quality 50)
        let table = [rule(1, dec!(2.50), 88), rule(2, dec!(2.54), 90)];

        let matched = matcher.match_rules(&odds(dec!(2.50)), &table);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].rule_id, 2);
        assert_eq!(matched[1].rule_id, 1);
        assert!(matched[0].match_quality < matched[1].match_quality);
    }

    #[test]
    fn test_quality_breaks_confidence_ties() {
        let matcher = RuleMatcher::default();
        let table = [rule(1, dec!(2.54), 90), rule(2, dec!(2.50), 90)];

        let matched = matcher.match_rules(&odds(dec!(2.50)), &table);
        assert_eq!(matched[0].rule_id, 2);
        assert_eq!(matched[0].match_quality, 100);
    }

    #[test]
    fn test_inactive_rules_never_evaluated() {
        let matcher = RuleMatcher::default();
        let mut inactive = rule(1, dec!(2.50), 90);
        inactive.is_active = false;

        assert!(matcher
            .match_rules(&odds(dec!(2.50)), &[inactive])
            .is_empty());
    }

    #[test]
    fn test_rule_without_primary_is_skipped() {
        let matcher = RuleMatcher::default();
        let mut malformed = rule(1, dec!(2.50), 90);
        malformed.primary_odds.clear();
        let table = [malformed, rule(2, dec!(2.50), 88)];

        let matched = matcher.match_rules(&odds(dec!(2.50)), &table);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].rule_id, 2);
    }

    #[test]
    fn test_matched_rule_wire_shape() {
        let matcher = RuleMatcher::default();
        let matched = matcher.match_rules(&odds(dec!(2.50)), &[rule(1, dec!(2.50), 90)]);

        let json = serde_json::to_value(&matched[0]).unwrap();
        assert_eq!(json["matchQuality"], 100);
        assert_eq!(json["rule_id"], 1);
        assert_eq!(json["confidence_base"], 90);
        assert_eq!(json["importance"], "normal");
    }
}
