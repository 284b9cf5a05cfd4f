//! Golden rule types and rule-table loading

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::odds::OddsKey;

/// Importance tier of a rule, in the table's historical spellings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "özel")]
    Special,
    #[serde(rename = "önemli")]
    Important,
    #[serde(rename = "çok_önemli")]
    Critical,
}

impl Importance {
    /// Confidence bonus granted by this tier
    pub fn confidence_bonus(&self) -> u8 {
        match self {
            Importance::Normal => 0,
            Importance::Special => 1,
            Importance::Important => 2,
            Importance::Critical => 3,
        }
    }
}

/// One golden rule: a narrow band of pre-match odds mapped to a list of
/// expected outcomes with a base confidence.
///
/// Rules are authored externally and read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub rule_id: u32,
    pub name: String,
    /// Mandatory: a single market key and its target value. A rule whose
    /// primary criterion is empty never matches (skipped, not fatal).
    pub primary_odds: BTreeMap<OddsKey, Decimal>,
    /// Additional criteria; every listed key must match
    #[serde(default)]
    pub secondary_odds: Option<BTreeMap<OddsKey, Decimal>>,
    /// Veto criteria; any listed key matching rejects the rule
    #[serde(default)]
    pub exclude_odds: Option<BTreeMap<OddsKey, Decimal>>,
    /// Predictions yielded when the rule matches, most specific first
    pub predictions: Vec<String>,
    /// Base confidence percentage, 0-100
    pub confidence_base: u8,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Rule {
    /// The rule's primary criterion, if authored
    pub fn primary(&self) -> Option<(OddsKey, Decimal)> {
        self.primary_odds.iter().next().map(|(&k, &v)| (k, v))
    }
}

/// Errors from loading a rule table
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule file could not be read
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Rule file is not valid JSON for the rule schema
    #[error("invalid rule file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Authoring problems detected by validation. The matcher tolerates all of
/// these at runtime (a broken rule simply never matches); validation exists
/// so the `rules` command can surface them to the table's maintainer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleIssue {
    #[error("rule {rule_id} has no primary odds criterion")]
    MissingPrimary { rule_id: u32 },
    #[error("rule {rule_id} has no predictions")]
    NoPredictions { rule_id: u32 },
    #[error("rule {rule_id} prediction {prediction:?} is not in the grammar")]
    UnparsablePrediction { rule_id: u32, prediction: String },
    #[error("rule {rule_id} confidence_base {confidence} exceeds 100")]
    ConfidenceOutOfRange { rule_id: u32, confidence: u8 },
    #[error("duplicate rule id {rule_id}")]
    DuplicateId { rule_id: u32 },
}

/// An externally-authored rule table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Wrap an in-memory rule list
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Load a rule table from a JSON file (an array of rule records)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules: Vec<Rule> =
            serde_json::from_str(&content).map_err(|source| RuleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { rules })
    }

    /// All rules, active or not
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules eligible for evaluation
    pub fn active(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| r.is_active)
    }

    /// Collect authoring problems across the table
    pub fn validate(&self) -> Vec<RuleIssue> {
        let mut issues = Vec::new();
        let mut seen = std::collections::BTreeSet::new();

        for rule in &self.rules {
            if !seen.insert(rule.rule_id) {
                issues.push(RuleIssue::DuplicateId {
                    rule_id: rule.rule_id,
                });
            }
            if rule.primary().is_none() {
                issues.push(RuleIssue::MissingPrimary {
                    rule_id: rule.rule_id,
                });
            }
            if rule.predictions.is_empty() {
                issues.push(RuleIssue::NoPredictions {
                    rule_id: rule.rule_id,
                });
            }
            if rule.confidence_base > 100 {
                issues.push(RuleIssue::ConfidenceOutOfRange {
                    rule_id: rule.rule_id,
                    confidence: rule.confidence_base,
                });
            }
            for prediction in &rule.predictions {
                if crate::prediction::Prediction::parse(prediction).is_none() {
                    issues.push(RuleIssue::UnparsablePrediction {
                        rule_id: rule.rule_id,
                        prediction: prediction.clone(),
                    });
                }
            }
        }

        issues
    }
}
