//! Settle command implementation

use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

use crate::fixture::Score;
use crate::prediction::{evaluate, BetResult};

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Predictions-with-results JSON file
    #[arg(short, long)]
    pub input: PathBuf,
}

/// One stored prediction together with the final scoreline
#[derive(Debug, Deserialize)]
struct SettleRecord {
    prediction: String,
    home_team: String,
    away_team: String,
    fulltime: Score,
    #[serde(default)]
    halftime: Option<Score>,
}

impl SettleArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let records: Vec<SettleRecord> = serde_json::from_str(&content)
            .with_context(|| format!("invalid settle file {}", self.input.display()))?;

        let mut won = 0usize;
        let mut lost = 0usize;
        let mut undetermined = 0usize;

        for record in &records {
            let result = evaluate(&record.prediction, record.fulltime, record.halftime);
            let label = match result {
                BetResult::Won => {
                    won += 1;
                    "WON"
                }
                BetResult::Lost => {
                    lost += 1;
                    "LOST"
                }
                BetResult::Undetermined => {
                    undetermined += 1;
                    "UNDETERMINED"
                }
            };
            println!(
                "  {} vs {}: {} -> {} ({})",
                record.home_team, record.away_team, record.prediction, label, record.fulltime
            );
        }

        println!();
        println!("Settled {} predictions", records.len());
        println!("  Won:          {won}");
        println!("  Lost:         {lost}");
        println!("  Undetermined: {undetermined}");

        tracing::info!(checked = records.len(), won, lost, undetermined, "settlement complete");

        Ok(())
    }
}
