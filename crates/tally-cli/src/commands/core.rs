//! Shared utilities for commands
//!
//! This module contains:
//! - `build_tracker` - Load income and expenses into a fresh in-memory tracker
//! - `print_json` - Pretty-print any serializable report

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::{import::parse_expenses_csv, RawExpense, TallyConfig, Tracker};
use tracing::debug;

/// Build a tracker from config, an optional income override, CSV files and
/// inline `DATE,CATEGORY,AMOUNT` entries
///
/// Rows are appended in the order given: files first, then inline entries.
pub fn build_tracker(
    config: &TallyConfig,
    income: Option<f64>,
    files: &[PathBuf],
    expenses: &[String],
) -> Result<Tracker> {
    let tracker = Tracker::from_config(config);
    if let Some(income) = income {
        tracker.set_income(income);
    }

    for path in files {
        let rows = read_expense_file(path)?;
        let stats = tracker.import(rows);
        debug!(
            file = %path.display(),
            added = stats.added,
            repaired = stats.repaired,
            "Loaded expense file"
        );
    }

    let inline = expenses
        .iter()
        .map(|e| RawExpense::parse_triple(e).with_context(|| format!("Invalid --expense {:?}", e)))
        .collect::<Result<Vec<_>>>()?;
    tracker.import(inline);

    Ok(tracker)
}

fn read_expense_file(path: &Path) -> Result<Vec<RawExpense>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse_expenses_csv(file).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report to JSON")?;
    println!("{}", json);
    Ok(())
}
