//! Behavior Classification Rule
//!
//! Labels spending by its ratio to income. Always emits exactly one
//! suggestion.

use crate::analytics::safe_ratio;

use super::engine::{AdviceContext, Rule};
use super::types::{Advice, BehaviorLabel, RuleId, Severity, Suggestion};

/// Ratios above this are impulsive
pub const IMPULSIVE_RATIO: f64 = 1.1;
/// Ratios at or above this (up to the impulsive bound) are balanced
pub const BALANCED_RATIO: f64 = 0.8;

/// Spending-to-income ratio, 1.0 when income is not positive
pub fn spending_ratio(total_expense: f64, income: f64) -> f64 {
    safe_ratio(total_expense, income).unwrap_or(1.0)
}

/// Classify a ratio into exactly one behavior band
pub fn classify(ratio: f64, savings: f64) -> BehaviorLabel {
    if ratio > IMPULSIVE_RATIO {
        BehaviorLabel::Impulsive
    } else if (BALANCED_RATIO..=IMPULSIVE_RATIO).contains(&ratio) {
        BehaviorLabel::Balanced
    } else if ratio < BALANCED_RATIO && savings > 0.0 {
        BehaviorLabel::Conservative
    } else {
        BehaviorLabel::Undefined
    }
}

pub struct BehaviorRule;

impl BehaviorRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BehaviorRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for BehaviorRule {
    fn id(&self) -> RuleId {
        RuleId::Behavior
    }

    fn name(&self) -> &'static str {
        "Behavior Classification"
    }

    fn evaluate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        let ratio = spending_ratio(ctx.total_expense(), ctx.income());
        let label = classify(ratio, ctx.savings());

        let severity = match label {
            BehaviorLabel::Impulsive => Severity::Warning,
            BehaviorLabel::Undefined => Severity::Attention,
            BehaviorLabel::Balanced | BehaviorLabel::Conservative => Severity::Info,
        };

        vec![Suggestion::new(
            RuleId::Behavior,
            severity,
            Advice::Behavior { label, ratio },
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guard() {
        assert_eq!(spending_ratio(500.0, 0.0), 1.0);
        assert_eq!(spending_ratio(500.0, -100.0), 1.0);
        assert_eq!(spending_ratio(500.0, 1000.0), 0.5);
    }

    #[test]
    fn test_bands() {
        assert_eq!(classify(1.5, -500.0), BehaviorLabel::Impulsive);
        assert_eq!(classify(1.1, -100.0), BehaviorLabel::Balanced);
        assert_eq!(classify(0.8, 200.0), BehaviorLabel::Balanced);
        assert_eq!(classify(1.0, 0.0), BehaviorLabel::Balanced);
        assert_eq!(classify(0.79, 210.0), BehaviorLabel::Conservative);
        assert_eq!(classify(0.5, 0.0), BehaviorLabel::Undefined);
        assert_eq!(classify(-0.2, -10.0), BehaviorLabel::Undefined);
    }

    #[test]
    fn test_rule_emits_exactly_one() {
        use crate::models::ExpenseRecord;
        use crate::store::Snapshot;
        use chrono::NaiveDate;

        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let snapshot = Snapshot::new(1000.0, vec![ExpenseRecord::new(date, "Food", 300.0)]);
        let out = BehaviorRule::new().evaluate(&AdviceContext::new(&snapshot));

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].advice,
            Advice::Behavior {
                label: BehaviorLabel::Conservative,
                ratio: 0.3
            }
        );
    }
}
