use clap::Parser;
use goldmatch::cli::{Cli, Commands};
use goldmatch::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    goldmatch::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Scan(args) => {
            tracing::info!("Starting rule scan");
            args.execute(&config)?;
        }
        Commands::Settle(args) => {
            tracing::info!("Settling predictions");
            args.execute()?;
        }
        Commands::Live(args) => {
            tracing::info!("Computing live alerts");
            args.execute()?;
        }
        Commands::Rules(args) => {
            args.execute()?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Engine: tolerance={}, min_confidence={}%",
                config.engine.tolerance, config.engine.min_confidence
            );
            println!(
                "  Odds: preference={:?}, bets=[exact:{}, o/u:{}, btts:{}]",
                config.odds.bookmaker_preference,
                config.odds.exact_goals_bet_id,
                config.odds.over_under_bet_id,
                config.odds.btts_bet_id
            );
            println!(
                "  Telemetry: log_level={}, log_format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
