//! Trend Projection Rule
//!
//! Extrapolates the average daily spend over the recorded span to a fixed
//! month-length horizon and reports projected savings or overspend.

use crate::analytics::safe_ratio;

use super::engine::{AdviceContext, Rule};
use super::types::{Advice, RuleId, Severity, Suggestion};

/// Default projection horizon in days
pub const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Result of projecting spending to the horizon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub span_days: i64,
    pub daily_average: f64,
    pub remaining_days: i64,
    pub projected_expense: f64,
    /// `income - projected_expense`
    pub projected_savings: f64,
}

/// Project `total` spent over `span_days` out to `horizon_days`
///
/// Spans at or beyond the horizon are not extrapolated.
pub fn project(total: f64, income: f64, span_days: i64, horizon_days: i64) -> Option<Projection> {
    let daily_average = safe_ratio(total, span_days as f64)?;
    let remaining_days = (horizon_days - span_days).max(0);
    let projected_expense = total + daily_average * remaining_days as f64;

    Some(Projection {
        span_days,
        daily_average,
        remaining_days,
        projected_expense,
        projected_savings: income - projected_expense,
    })
}

pub struct TrendProjectionRule {
    /// Number of days to project to (default 30)
    horizon_days: i64,
}

impl TrendProjectionRule {
    pub fn new() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    pub fn with_horizon_days(days: i64) -> Self {
        Self { horizon_days: days }
    }
}

impl Default for TrendProjectionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for TrendProjectionRule {
    fn id(&self) -> RuleId {
        RuleId::TrendProjection
    }

    fn name(&self) -> &'static str {
        "Trend Projection"
    }

    fn evaluate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        let Some(span) = ctx.span else {
            return vec![];
        };
        let Some(p) = project(
            ctx.total_expense(),
            ctx.income(),
            span.days(),
            self.horizon_days,
        ) else {
            return vec![];
        };

        let suggestion = if p.projected_savings < 0.0 {
            Suggestion::new(
                RuleId::TrendProjection,
                Severity::Warning,
                Advice::ProjectedOverspend {
                    shortfall: p.projected_savings.abs(),
                    projected_expense: p.projected_expense,
                    span_days: p.span_days,
                    horizon_days: self.horizon_days,
                },
            )
        } else {
            Suggestion::new(
                RuleId::TrendProjection,
                Severity::Info,
                Advice::ProjectedSavings {
                    savings: p.projected_savings,
                    projected_expense: p.projected_expense,
                    span_days: p.span_days,
                    horizon_days: self.horizon_days,
                },
            )
        };

        vec![suggestion]
    }
}
