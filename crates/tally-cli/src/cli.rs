//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track income and expenses, get spending advice
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance tracker with rule-based spending advice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Monthly income (overrides defaults.income from config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub income: Option<f64>,

    /// CSV file with date,category,amount columns (repeatable)
    #[arg(short, long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Single expense entry (repeatable)
    ///
    /// Malformed dates are replaced with today's date and malformed
    /// amounts with 0, matching CSV import.
    #[arg(short, long = "expense", value_name = "DATE,CATEGORY,AMOUNT", global = true)]
    pub expenses: Vec<String>,

    /// Config file path (defaults to ~/.config/tally/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show income, total spending and savings
    Summary,

    /// Show spending per category, largest first
    Categories,

    /// Show daily totals with a running cumulative sum
    Daily,

    /// Show spending suggestions
    Advice {
        /// Include rule and severity for each suggestion
        #[arg(long)]
        detailed: bool,
    },

    /// Show summary, categories, daily trend and suggestions together
    Dashboard,

    /// Show the resolved configuration and where it was loaded from
    Config,
}
