//! Savings Rate Rule
//!
//! Compares savings to income. At most one message: overspending, a
//! savings rate under 5%, or a healthy rate above 20%. Anything between
//! 5% and 20% is left alone.

use super::engine::{AdviceContext, Rule};
use super::types::{Advice, RuleId, Severity, Suggestion};

/// Savings below this fraction of income trigger a low-savings warning
pub const LOW_SAVINGS_FRACTION: f64 = 0.05;
/// Savings rate suggested to users under the low threshold
pub const TARGET_SAVINGS_FRACTION: f64 = 0.10;
/// Savings above this fraction of income earn positive reinforcement
pub const HEALTHY_SAVINGS_FRACTION: f64 = 0.20;

pub struct SavingsRateRule;

impl SavingsRateRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsRateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SavingsRateRule {
    fn id(&self) -> RuleId {
        RuleId::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn evaluate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        let income = ctx.income();
        let savings = ctx.savings();

        let suggestion = if savings < 0.0 {
            Suggestion::new(
                RuleId::SavingsRate,
                Severity::Alert,
                Advice::Overspending {
                    deficit: savings.abs(),
                },
            )
        } else if savings < income * LOW_SAVINGS_FRACTION {
            Suggestion::new(
                RuleId::SavingsRate,
                Severity::Warning,
                Advice::LowSavingsRate {
                    savings,
                    floor_pct: LOW_SAVINGS_FRACTION * 100.0,
                    target_pct: TARGET_SAVINGS_FRACTION * 100.0,
                },
            )
        } else if savings > income * HEALTHY_SAVINGS_FRACTION {
            Suggestion::new(
                RuleId::SavingsRate,
                Severity::Info,
                Advice::HealthySavingsRate {
                    savings,
                    threshold_pct: HEALTHY_SAVINGS_FRACTION * 100.0,
                },
            )
        } else {
            return vec![];
        };

        vec![suggestion]
    }
}
