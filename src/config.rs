//! Configuration types for goldmatch

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub odds: OddsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Rule matching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Inclusive odds-matching tolerance window
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,

    /// Minimum confidence for an opportunity to be reported (0-100)
    #[serde(default = "default_min_confidence")]
    pub min_confidence: u8,
}

fn default_tolerance() -> Decimal {
    Decimal::new(4, 2) // 0.04
}
fn default_min_confidence() -> u8 {
    85
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            min_confidence: 85,
        }
    }
}

/// Odds normalization configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OddsConfig {
    /// Bookmaker ids in preference order; unlisted bookmakers are used
    /// last, in payload order
    #[serde(default = "default_bookmaker_preference")]
    pub bookmaker_preference: Vec<u32>,

    /// Provider bet-type id of the exact-total-goals market
    #[serde(default = "default_exact_goals_bet_id")]
    pub exact_goals_bet_id: u32,

    /// Provider bet-type id of the totals over/under market
    #[serde(default = "default_over_under_bet_id")]
    pub over_under_bet_id: u32,

    /// Provider bet-type id of the both-teams-to-score market
    #[serde(default = "default_btts_bet_id")]
    pub btts_bet_id: u32,
}

fn default_bookmaker_preference() -> Vec<u32> {
    vec![8, 11, 6]
}
fn default_exact_goals_bet_id() -> u32 {
    38
}
fn default_over_under_bet_id() -> u32 {
    5
}
fn default_btts_bet_id() -> u32 {
    8
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            bookmaker_preference: default_bookmaker_preference(),
            exact_goals_bet_id: 38,
            over_under_bet_id: 5,
            btts_bet_id: 8,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
