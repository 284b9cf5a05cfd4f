//! Opportunity engine
//!
//! The pure pipeline tying the pieces together: normalize a fixture's
//! bookmaker odds, match the golden rule table, score every prediction of
//! every matched rule, and assemble the best into an opportunity. No I/O;
//! the caller owns persistence and scheduling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::fixture::Fixture;
use crate::odds::{normalize_odds, Bookmaker, NormalizerConfig};
use crate::rules::{prediction_confidence, MatcherConfig, RuleMatcher, RuleSet};

/// One fixture together with its raw bookmaker quotes, as fed to a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureOdds {
    pub fixture: Fixture,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

/// One prediction of one matched rule, with its adjusted confidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPrediction {
    pub bet: String,
    pub confidence: u8,
    pub rule_id: u32,
    pub rule_name: String,
}

/// Reference to a rule that contributed to an opportunity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRef {
    pub rule_id: u32,
    pub rule_name: String,
}

/// A fixture worth betting on: the best-scored prediction plus every
/// alternative the matched rules offered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    pub fixture: Fixture,
    pub prediction: String,
    pub confidence: u8,
    pub alternative_predictions: Vec<ScoredPrediction>,
    pub matched_rules: Vec<RuleRef>,
    pub created_at: DateTime<Utc>,
}

/// Opportunity engine over a configured matcher and normalizer
#[derive(Debug, Clone)]
pub struct Engine {
    matcher: RuleMatcher,
    normalizer: NormalizerConfig,
    min_confidence: u8,
}

impl Engine {
    /// Create an engine from explicit component configuration
    pub fn new(
        matcher_config: MatcherConfig,
        normalizer_config: NormalizerConfig,
        min_confidence: u8,
    ) -> Self {
        Self {
            matcher: RuleMatcher::new(matcher_config),
            normalizer: normalizer_config,
            min_confidence,
        }
    }

    /// Create an engine from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            MatcherConfig {
                tolerance: config.engine.tolerance,
            },
            NormalizerConfig {
                bookmaker_preference: config.odds.bookmaker_preference.clone(),
                exact_goals_bet_id: config.odds.exact_goals_bet_id,
                over_under_bet_id: config.odds.over_under_bet_id,
                btts_bet_id: config.odds.btts_bet_id,
            },
            config.engine.min_confidence,
        )
    }

    /// Evaluate one fixture; `None` when no rule matches or the best
    /// prediction falls below the confidence floor.
    pub fn evaluate_fixture(
        &self,
        fixture: &Fixture,
        bookmakers: &[Bookmaker],
        rules: &RuleSet,
    ) -> Option<Opportunity> {
        let odds = normalize_odds(bookmakers, &self.normalizer);
        let matched = self.matcher.match_rules(&odds, rules.rules());
        if matched.is_empty() {
            return None;
        }

        let mut scored: Vec<ScoredPrediction> = matched
            .iter()
            .flat_map(|rule| {
                rule.predictions.iter().map(|bet| ScoredPrediction {
                    bet: bet.clone(),
                    confidence: prediction_confidence(rule, bet),
                    rule_id: rule.rule_id,
                    rule_name: rule.name.clone(),
                })
            })
            .collect();
        // Stable sort keeps rule ranking for equal confidences
        scored.sort_by(|a, b| b.confidence.cmp(&a.confidence));

        let best = scored.first()?.clone();
        if best.confidence < self.min_confidence {
            tracing::debug!(
                fixture_id = fixture.fixture_id,
                confidence = best.confidence,
                floor = self.min_confidence,
                "best prediction below confidence floor"
            );
            return None;
        }

        tracing::debug!(
            fixture_id = fixture.fixture_id,
            prediction = %best.bet,
            confidence = best.confidence,
            rules = matched.len(),
            "opportunity found"
        );

        Some(Opportunity {
            id: Uuid::new_v4(),
            fixture: fixture.clone(),
            prediction: best.bet,
            confidence: best.confidence,
            alternative_predictions: scored.into_iter().skip(1).collect(),
            matched_rules: matched
                .into_iter()
                .map(|rule| RuleRef {
                    rule_id: rule.rule_id,
                    rule_name: rule.name,
                })
                .collect(),
            created_at: Utc::now(),
        })
    }

    /// Evaluate a batch of fixtures
    pub fn scan(&self, cards: &[FixtureOdds], rules: &RuleSet) -> Vec<Opportunity> {
        let opportunities: Vec<Opportunity> = cards
            .iter()
            .filter_map(|card| self.evaluate_fixture(&card.fixture, &card.bookmakers, rules))
            .collect();

        tracing::info!(
            matches_processed = cards.len(),
            opportunities_found = opportunities.len(),
            "scan complete"
        );
        opportunities
    }
}
