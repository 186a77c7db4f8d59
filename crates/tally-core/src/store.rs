//! Transaction store
//!
//! Holds the monthly income and the ordered list of expense records. The
//! store is append-only and never rejects an entry: a malformed date is
//! replaced with today's date, a malformed amount with zero, and a blank
//! category with [`UNCATEGORIZED`]. Each repair is logged and reported back
//! to the caller as a [`Repair`].
//!
//! Writers serialize behind a single `RwLock`. Readers take a [`Snapshot`]
//! so aggregation never observes a half-applied mutation.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{ExpenseRecord, UNCATEGORIZED};

/// Date format accepted for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for date repairs
pub type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// A silent fix applied to an incoming entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Repair {
    /// Date did not parse as YYYY-MM-DD and was replaced
    InvalidDate { input: String, substituted: NaiveDate },
    /// Amount was not a finite number and was replaced with 0
    InvalidAmount { input: String },
    /// Category was blank and was replaced with the default label
    EmptyCategory,
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::InvalidDate { input, substituted } => {
                write!(f, "invalid date {:?}, using {}", input, substituted)
            }
            Repair::InvalidAmount { input } => write!(f, "invalid amount {:?}, using 0", input),
            Repair::EmptyCategory => write!(f, "empty category, using {}", UNCATEGORIZED),
        }
    }
}

/// Values that can be coerced into a monetary amount
///
/// `Err` carries the original input as text for repair reporting.
pub trait IntoAmount {
    fn into_amount(self) -> std::result::Result<f64, String>;
}

impl IntoAmount for f64 {
    fn into_amount(self) -> std::result::Result<f64, String> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(self.to_string())
        }
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> std::result::Result<f64, String> {
        f64::from(self).into_amount()
    }
}

impl IntoAmount for i64 {
    fn into_amount(self) -> std::result::Result<f64, String> {
        Ok(self as f64)
    }
}

impl IntoAmount for i32 {
    fn into_amount(self) -> std::result::Result<f64, String> {
        Ok(f64::from(self))
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> std::result::Result<f64, String> {
        match self.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self.to_string()),
        }
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> std::result::Result<f64, String> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> std::result::Result<f64, String> {
        self.as_str().into_amount()
    }
}

/// Coerce an amount, substituting 0.0 when it is not a finite number
pub fn coerce_amount(amount: impl IntoAmount) -> (f64, Option<Repair>) {
    match amount.into_amount() {
        Ok(v) => (v, None),
        Err(input) => (0.0, Some(Repair::InvalidAmount { input })),
    }
}

/// Parse an ISO date, substituting `today` when it does not parse
pub fn coerce_date(date: &str, today: NaiveDate) -> (NaiveDate, Option<Repair>) {
    match NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) {
        Ok(d) => (d, None),
        Err(_) => (
            today,
            Some(Repair::InvalidDate {
                input: date.to_string(),
                substituted: today,
            }),
        ),
    }
}

/// Immutable view of the store's contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub income: f64,
    pub expenses: Vec<ExpenseRecord>,
}

impl Snapshot {
    pub fn new(income: f64, expenses: Vec<ExpenseRecord>) -> Self {
        Self { income, expenses }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Result of appending an expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseOutcome {
    /// The record as stored
    pub record: ExpenseRecord,
    /// Repairs applied to the input, empty when it was clean
    pub repairs: Vec<Repair>,
}

impl ExpenseOutcome {
    pub fn was_repaired(&self) -> bool {
        !self.repairs.is_empty()
    }
}

/// In-memory income and expense store
pub struct TransactionStore {
    state: RwLock<Snapshot>,
    clock: Clock,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("state", &*self.read())
            .finish_non_exhaustive()
    }
}

impl TransactionStore {
    /// Create an empty store using the local calendar date for repairs
    pub fn new() -> Self {
        Self::with_clock(Box::new(|| chrono::Local::now().date_naive()))
    }

    /// Create an empty store with a custom "today" (for testing)
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            state: RwLock::new(Snapshot::default()),
            clock,
        }
    }

    // The state is append-only, so a writer that panicked cannot leave it
    // half-updated; recover the guard instead of propagating poison.
    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the monthly income
    ///
    /// Negative values are kept as-is; non-numeric input becomes 0.
    pub fn set_income(&self, amount: impl IntoAmount) {
        let (income, repair) = coerce_amount(amount);
        if let Some(repair) = repair {
            warn!(%repair, "Repaired income value");
        }
        self.write().income = income;
        debug!(income, "Income updated");
    }

    /// Append an expense, repairing malformed fields instead of failing
    pub fn add_expense(
        &self,
        date: &str,
        category: &str,
        amount: impl IntoAmount,
    ) -> ExpenseOutcome {
        let mut repairs = Vec::new();

        let (date, date_repair) = coerce_date(date, (self.clock)());
        let (amount, amount_repair) = coerce_amount(amount);
        repairs.extend(date_repair);
        repairs.extend(amount_repair);

        let category = match category.trim() {
            "" => {
                repairs.push(Repair::EmptyCategory);
                UNCATEGORIZED.to_string()
            }
            c => c.to_string(),
        };

        for repair in &repairs {
            warn!(%repair, category = %category, "Repaired expense entry");
        }

        let record = ExpenseRecord {
            date,
            category,
            amount,
        };
        self.write().expenses.push(record.clone());

        ExpenseOutcome { record, repairs }
    }

    /// Copy the current income and expenses under a single read lock
    pub fn snapshot(&self) -> Snapshot {
        self.read().clone()
    }

    pub fn income(&self) -> f64 {
        self.read().income
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> Vec<ExpenseRecord> {
        self.read().expenses.clone()
    }

    pub fn len(&self) -> usize {
        self.read().expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().expenses.is_empty()
    }
}
