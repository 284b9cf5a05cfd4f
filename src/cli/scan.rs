//! Scan command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::engine::{Engine, FixtureOdds};
use crate::rules::RuleSet;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Rule table JSON file
    #[arg(short, long, default_value = "rules.json")]
    pub rules: PathBuf,

    /// Fixtures-with-odds JSON file
    #[arg(short, long)]
    pub matches: PathBuf,

    /// Write opportunities JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured confidence floor
    #[arg(long)]
    pub min_confidence: Option<u8>,
}

impl ScanArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let rules = RuleSet::load(&self.rules)?;
        tracing::info!(
            rules = rules.len(),
            path = %self.rules.display(),
            "rule table loaded"
        );

        let content = std::fs::read_to_string(&self.matches)
            .with_context(|| format!("failed to read matches file {}", self.matches.display()))?;
        let cards: Vec<FixtureOdds> = serde_json::from_str(&content)
            .with_context(|| format!("invalid matches file {}", self.matches.display()))?;

        let mut config = config.clone();
        if let Some(floor) = self.min_confidence {
            config.engine.min_confidence = floor;
        }

        let engine = Engine::from_config(&config);
        let opportunities = engine.scan(&cards, &rules);

        let json = serde_json::to_string_pretty(&opportunities)?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(
                    opportunities = opportunities.len(),
                    path = %path.display(),
                    "opportunities written"
                );
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
