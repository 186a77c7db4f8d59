//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::PathBuf;

use tally_core::{ConfigSource, TallyConfig, Tracker};
use tempfile::NamedTempFile;

use crate::commands::{self, truncate};

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn setup_tracker() -> Tracker {
    let config = TallyConfig::default();
    let entries = vec![
        "2026-10-01,Food,400".to_string(),
        "2026-10-05,Rent,300".to_string(),
        "2026-10-05,Food,100".to_string(),
    ];
    commands::build_tracker(&config, Some(1000.0), &[], &entries).unwrap()
}

// ========== build_tracker Tests ==========

#[test]
fn test_build_tracker_from_file() {
    let file = write_csv("date,category,amount\n2026-10-01,Food,12.5\n2026-10-02,Bus,3\n");
    let files = vec![file.path().to_path_buf()];

    let tracker = commands::build_tracker(&TallyConfig::default(), Some(100.0), &files, &[]).unwrap();
    let summary = tracker.get_summary();
    assert_eq!(summary.transaction_count, 2);
    assert_eq!(summary.total_expense, 15.5);
    assert_eq!(summary.savings, 84.5);
}

#[test]
fn test_build_tracker_files_before_inline() {
    let file = write_csv("date,category,amount\n2026-10-03,Food,10\n");
    let files = vec![file.path().to_path_buf()];
    let entries = vec!["2026-10-01,Rent,50".to_string()];

    let tracker = commands::build_tracker(&TallyConfig::default(), None, &files, &entries).unwrap();
    let expenses = tracker.store().expenses();
    assert_eq!(expenses[0].category, "Food");
    assert_eq!(expenses[1].category, "Rent");
}

#[test]
fn test_build_tracker_uses_config_income() {
    let config = TallyConfig {
        default_income: 750.0,
        ..TallyConfig::default()
    };
    let tracker = commands::build_tracker(&config, None, &[], &[]).unwrap();
    assert_eq!(tracker.get_summary().income, 750.0);
}

#[test]
fn test_build_tracker_income_overrides_config() {
    let config = TallyConfig {
        default_income: 750.0,
        ..TallyConfig::default()
    };
    let tracker = commands::build_tracker(&config, Some(-20.0), &[], &[]).unwrap();
    assert_eq!(tracker.get_summary().income, -20.0);
}

#[test]
fn test_build_tracker_malformed_entry() {
    let entries = vec!["2026-10-01;Food;10".to_string()];
    let result = commands::build_tracker(&TallyConfig::default(), None, &[], &entries);
    assert!(result.is_err());
}

#[test]
fn test_build_tracker_repairs_inline_values() {
    let entries = vec!["yesterday,Food,lots".to_string()];
    let tracker = commands::build_tracker(&TallyConfig::default(), None, &[], &entries).unwrap();
    assert_eq!(tracker.store().len(), 1);
    assert_eq!(tracker.get_summary().total_expense, 0.0);
}

#[test]
fn test_build_tracker_missing_file() {
    let files = vec![PathBuf::from("/nonexistent/tally/expenses.csv")];
    let result = commands::build_tracker(&TallyConfig::default(), None, &files, &[]);
    assert!(result.is_err());
}

#[test]
fn test_build_tracker_missing_column() {
    let file = write_csv("date,amount\n2026-10-01,10\n");
    let files = vec![file.path().to_path_buf()];
    let result = commands::build_tracker(&TallyConfig::default(), None, &files, &[]);
    assert!(result.is_err());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_summary() {
    let tracker = setup_tracker();
    assert!(commands::cmd_summary(&tracker, false).is_ok());
    assert!(commands::cmd_summary(&tracker, true).is_ok());
}

#[test]
fn test_cmd_categories() {
    let tracker = setup_tracker();
    assert!(commands::cmd_categories(&tracker, false).is_ok());
    assert!(commands::cmd_categories(&tracker, true).is_ok());
}

#[test]
fn test_cmd_daily() {
    let tracker = setup_tracker();
    assert!(commands::cmd_daily(&tracker, false).is_ok());
    assert!(commands::cmd_daily(&tracker, true).is_ok());
}

#[test]
fn test_cmd_advice() {
    let tracker = setup_tracker();
    assert!(commands::cmd_advice(&tracker, false, false).is_ok());
    assert!(commands::cmd_advice(&tracker, true, false).is_ok());
    assert!(commands::cmd_advice(&tracker, true, true).is_ok());
}

#[test]
fn test_cmd_dashboard() {
    let tracker = setup_tracker();
    assert!(commands::cmd_dashboard(&tracker, false).is_ok());
    assert!(commands::cmd_dashboard(&tracker, true).is_ok());
}

#[test]
fn test_reports_empty_tracker() {
    let tracker = Tracker::new();
    assert!(commands::cmd_categories(&tracker, false).is_ok());
    assert!(commands::cmd_daily(&tracker, false).is_ok());
    assert!(commands::cmd_dashboard(&tracker, false).is_ok());
}

#[test]
fn test_cmd_config() {
    let config = TallyConfig::default();
    assert!(commands::cmd_config(&config, &ConfigSource::Embedded, false).is_ok());
    assert!(commands::cmd_config(&config, &ConfigSource::Embedded, true).is_ok());
}

// ========== Helper Function Tests ==========

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Food", 10), "Food");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Groceries", 9), "Groceries");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Entertainment", 8), "Enter...");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("Café au lait", 7), "Café...");
}
