//! CLI interface for goldmatch
//!
//! Provides subcommands for:
//! - `scan`: Match a fixtures-with-odds file against the rule table
//! - `settle`: Evaluate predictions against final scores
//! - `live`: Compute live alerts for in-progress matches
//! - `rules`: Validate the rule table
//! - `config`: Show current configuration

mod live;
mod rules;
mod scan;
mod settle;

pub use live::LiveArgs;
pub use rules::RulesArgs;
pub use scan::ScanArgs;
pub use settle::SettleArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "goldmatch")]
#[command(about = "Golden-rule matching and live alert engine for football betting odds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match a fixtures-with-odds file against the rule table
    Scan(ScanArgs),
    /// Evaluate predictions against final scores
    Settle(SettleArgs),
    /// Compute live alerts for in-progress matches
    Live(LiveArgs),
    /// Validate the rule table
    Rules(RulesArgs),
    /// Show current configuration
    Config,
}
