//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tracker:
//! - In-memory income and expense store with silent input repair
//! - Aggregation (summary, category breakdown, cumulative daily series)
//! - Rule-based advice engine with structured suggestions
//! - Chart-ready datasets for presentation layers
//! - CSV import and TOML configuration

pub mod advice;
pub mod analytics;
pub mod charts;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod store;
pub mod tracker;

pub use advice::{Advice, AdviceContext, AdviceEngine, Renderer, Rule, RuleId, Severity, Suggestion};
pub use analytics::safe_ratio;
pub use charts::{ChartData, DashboardCharts};
pub use config::{ConfigSource, TallyConfig};
pub use error::{Error, Result};
pub use import::{parse_expenses_csv, ImportStats, RawExpense};
pub use models::{CategoryTotal, DailyPoint, DateSpan, ExpenseRecord, Summary};
pub use store::{ExpenseOutcome, IntoAmount, Repair, Snapshot, TransactionStore};
pub use tracker::{Dashboard, Tracker};
