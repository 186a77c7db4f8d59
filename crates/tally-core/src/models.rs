//! Data models for Tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category label used when an expense arrives without one
pub const UNCATEGORIZED: &str = "Uncategorized";

// ========== Ledger Models ==========

/// A single recorded expense
///
/// Records are immutable once appended to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }
}

// ========== Report Models ==========

/// Income vs. spending overview for the tracked period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub total_expense: f64,
    /// Always `income - total_expense`; negative when overspending
    pub savings: f64,
    pub transaction_count: usize,
}

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    /// Share of total expense, 0-100
    pub percentage: f64,
    pub transaction_count: usize,
}

/// One day of spending in the cumulative series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub daily_total: f64,
    pub cumulative_total: f64,
    pub transaction_count: usize,
}

/// First and last expense dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateSpan {
    /// Number of calendar days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.last - self.first).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_span_is_inclusive() {
        let span = DateSpan {
            first: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            last: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        };
        assert_eq!(span.days(), 10);
    }

    #[test]
    fn test_single_day_span() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let span = DateSpan {
            first: day,
            last: day,
        };
        assert_eq!(span.days(), 1);
    }
}
