//! Chart-ready datasets
//!
//! The core generates these series; rendering them is up to the caller.
//! Each chart is either a series or a placeholder message when there are no
//! expenses to plot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics;
use crate::store::Snapshot;

pub const DAILY_TREND_PLACEHOLDER: &str = "No expense data yet to show daily trend.";
pub const CATEGORY_SHARE_PLACEHOLDER: &str = "No expense data yet to show category breakdown.";
pub const CATEGORY_BAR_PLACEHOLDER: &str = "No expense data yet to show category bar chart.";

/// Either plottable points or a message to show instead of an empty chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ChartData<T> {
    Series(Vec<T>),
    Placeholder(String),
}

impl<T> ChartData<T> {
    fn from_points(points: Vec<T>, placeholder: &str) -> Self {
        if points.is_empty() {
            ChartData::Placeholder(placeholder.to_string())
        } else {
            ChartData::Series(points)
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChartData::Placeholder(_))
    }

    pub fn points(&self) -> &[T] {
        match self {
            ChartData::Series(points) => points,
            ChartData::Placeholder(_) => &[],
        }
    }
}

/// Slice of a category share (pie) chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Bar in the per-category spending chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub category: String,
    pub amount: f64,
}

/// Point on the cumulative spending line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cumulative: f64,
}

/// All dashboard charts for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub category_share: ChartData<CategorySlice>,
    pub category_bars: ChartData<CategoryBar>,
    pub cumulative: ChartData<CumulativePoint>,
}

/// "Spending by Category"
pub fn category_share_chart(snapshot: &Snapshot) -> ChartData<CategorySlice> {
    let slices = analytics::category_breakdown(snapshot)
        .into_iter()
        .map(|c| CategorySlice {
            category: c.category,
            amount: c.amount,
            percentage: c.percentage,
        })
        .collect();
    ChartData::from_points(slices, CATEGORY_SHARE_PLACEHOLDER)
}

/// "Spending per Category", largest first
pub fn category_bar_chart(snapshot: &Snapshot) -> ChartData<CategoryBar> {
    let bars = analytics::category_breakdown(snapshot)
        .into_iter()
        .map(|c| CategoryBar {
            category: c.category,
            amount: c.amount,
        })
        .collect();
    ChartData::from_points(bars, CATEGORY_BAR_PLACEHOLDER)
}

/// "Cumulative Spending Over Time"
pub fn cumulative_line_chart(snapshot: &Snapshot) -> ChartData<CumulativePoint> {
    let points = analytics::daily_series(snapshot)
        .into_iter()
        .map(|p| CumulativePoint {
            date: p.date,
            cumulative: p.cumulative_total,
        })
        .collect();
    ChartData::from_points(points, DAILY_TREND_PLACEHOLDER)
}

pub fn dashboard_charts(snapshot: &Snapshot) -> DashboardCharts {
    DashboardCharts {
        category_share: category_share_chart(snapshot),
        category_bars: category_bar_chart(snapshot),
        cumulative: cumulative_line_chart(snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;

    #[test]
    fn test_empty_snapshot_gives_placeholders() {
        let charts = dashboard_charts(&Snapshot::default());
        assert_eq!(
            charts.cumulative,
            ChartData::Placeholder(DAILY_TREND_PLACEHOLDER.to_string())
        );
        assert!(charts.category_share.is_placeholder());
        assert!(charts.category_bars.is_placeholder());
        assert!(charts.category_bars.points().is_empty());
    }

    #[test]
    fn test_cumulative_points() {
        let d1 = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 10, 2).unwrap();
        let snapshot = Snapshot::new(
            0.0,
            vec![
                ExpenseRecord::new(d2, "Food", 5.0),
                ExpenseRecord::new(d1, "Food", 10.0),
            ],
        );

        let chart = cumulative_line_chart(&snapshot);
        assert_eq!(
            chart.points(),
            &[
                CumulativePoint {
                    date: d1,
                    cumulative: 10.0
                },
                CumulativePoint {
                    date: d2,
                    cumulative: 15.0
                },
            ]
        );
    }

    #[test]
    fn test_chart_serialization_shape() {
        let value = serde_json::to_value(category_bar_chart(&Snapshot::default())).unwrap();
        assert_eq!(value["type"], "placeholder");
        assert_eq!(value["data"], CATEGORY_BAR_PLACEHOLDER);
    }
}
