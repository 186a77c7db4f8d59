//! Aggregation over a store snapshot
//!
//! Every function here is a pure read of a [`Snapshot`]; results are
//! recomputed on each call.

use std::collections::{BTreeMap, HashMap};

use crate::models::{CategoryTotal, DailyPoint, DateSpan, Summary};
use crate::store::Snapshot;

/// Divide, or `None` when the denominator is not strictly positive
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        let ratio = numerator / denominator;
        ratio.is_finite().then_some(ratio)
    } else {
        None
    }
}

/// Income, total spending and savings
pub fn summary(snapshot: &Snapshot) -> Summary {
    let total_expense: f64 = snapshot.expenses.iter().map(|e| e.amount).sum();
    Summary {
        income: snapshot.income,
        total_expense,
        savings: snapshot.income - total_expense,
        transaction_count: snapshot.expenses.len(),
    }
}

/// Spending per category, largest first
///
/// Categories with equal totals keep the order in which they first appeared.
pub fn category_breakdown(snapshot: &Snapshot) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in &snapshot.expenses {
        match index.get(expense.category.as_str()) {
            Some(&i) => {
                totals[i].amount += expense.amount;
                totals[i].transaction_count += 1;
            }
            None => {
                index.insert(expense.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                    percentage: 0.0,
                    transaction_count: 1,
                });
            }
        }
    }

    let total: f64 = totals.iter().map(|c| c.amount).sum();
    for cat in &mut totals {
        cat.percentage = safe_ratio(cat.amount, total).map_or(0.0, |r| r * 100.0);
    }

    // sort_by is stable, which gives first-appearance tie-breaking
    totals.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    totals
}

/// Per-day totals with a running sum, oldest first
///
/// Only dates that have expenses appear; gaps are not filled.
pub fn daily_series(snapshot: &Snapshot) -> Vec<DailyPoint> {
    let mut by_day: BTreeMap<chrono::NaiveDate, (f64, usize)> = BTreeMap::new();
    for expense in &snapshot.expenses {
        let entry = by_day.entry(expense.date).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut cumulative = 0.0;
    by_day
        .into_iter()
        .map(|(date, (daily_total, transaction_count))| {
            cumulative += daily_total;
            DailyPoint {
                date,
                daily_total,
                cumulative_total: cumulative,
                transaction_count,
            }
        })
        .collect()
}

/// Earliest and latest expense dates, `None` when there are no expenses
pub fn date_span(snapshot: &Snapshot) -> Option<DateSpan> {
    let first = snapshot.expenses.iter().map(|e| e.date).min()?;
    let last = snapshot.expenses.iter().map(|e| e.date).max()?;
    Some(DateSpan { first, last })
}

/// Average spending per calendar day across the span (inclusive)
pub fn daily_average(snapshot: &Snapshot) -> Option<f64> {
    let span = date_span(snapshot)?;
    safe_ratio(summary(snapshot).total_expense, span.days() as f64)
}
