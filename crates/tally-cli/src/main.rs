//! Tally CLI - Personal finance tracker
//!
//! Usage:
//!   tally --income 1000 -f expenses.csv summary      Income, spending and savings
//!   tally -f expenses.csv categories                 Spending per category
//!   tally -e 2026-10-01,Food,400 daily               Cumulative daily trend
//!   tally --income 1000 -f expenses.csv advice       Spending suggestions
//!   tally --income 1000 -f expenses.csv dashboard    Everything at once

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::TallyConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) =
        TallyConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > logging.level from config
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(&config.log_level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(source = %source, "Loaded configuration");

    if let Commands::Config = cli.command {
        return commands::cmd_config(&config, &source, cli.json);
    }

    let tracker = commands::build_tracker(&config, cli.income, &cli.files, &cli.expenses)?;

    match cli.command {
        Commands::Summary => commands::cmd_summary(&tracker, cli.json),
        Commands::Categories => commands::cmd_categories(&tracker, cli.json),
        Commands::Daily => commands::cmd_daily(&tracker, cli.json),
        Commands::Advice { detailed } => commands::cmd_advice(&tracker, detailed, cli.json),
        Commands::Dashboard => commands::cmd_dashboard(&tracker, cli.json),
        Commands::Config => commands::cmd_config(&config, &source, cli.json),
    }
}
