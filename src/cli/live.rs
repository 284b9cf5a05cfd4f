//! Live command implementation

use anyhow::Context;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::alert::{live_alert, AlertState};
use crate::fixture::{MatchStatus, Score};

#[derive(Args, Debug)]
pub struct LiveArgs {
    /// Predictions-with-live-scores JSON file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write alert states JSON to this file instead of stdout text
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// One standing prediction together with the current live state
#[derive(Debug, Deserialize)]
struct LiveRecord {
    prediction: String,
    home_team: String,
    away_team: String,
    #[serde(default)]
    score: Option<Score>,
    #[serde(default)]
    elapsed: u32,
    #[serde(default)]
    halftime: Option<Score>,
    /// Provider short status code, e.g. "1H", "HT", "FT"
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Serialize)]
struct AlertRow {
    home_team: String,
    away_team: String,
    #[serde(flatten)]
    state: AlertState,
}

impl LiveArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let records: Vec<LiveRecord> = serde_json::from_str(&content)
            .with_context(|| format!("invalid live file {}", self.input.display()))?;

        let mut rows = Vec::new();
        for record in &records {
            if let Some(code) = &record.status {
                let status = MatchStatus::from_short_code(code);
                if !status.is_live() {
                    tracing::debug!(
                        home = %record.home_team,
                        away = %record.away_team,
                        ?status,
                        "skipping non-live match"
                    );
                    continue;
                }
            }

            let alert = live_alert(
                &record.prediction,
                record.score,
                record.elapsed,
                record.halftime,
            );
            if let Some(state) = alert {
                rows.push(AlertRow {
                    home_team: record.home_team.clone(),
                    away_team: record.away_team.clone(),
                    state,
                });
            }
        }

        match &self.output {
            Some(path) => {
                let json = serde_json::to_string_pretty(&rows)?;
                std::fs::write(path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            None => {
                for row in &rows {
                    println!(
                        "  [{:?}] {} vs {}: {}",
                        row.state.alert_level, row.home_team, row.away_team, row.state.message
                    );
                }
                println!();
                println!("{} alert(s) from {} predictions", rows.len(), records.len());
            }
        }

        tracing::info!(predictions = records.len(), alerts = rows.len(), "live pass complete");

        Ok(())
    }
}
