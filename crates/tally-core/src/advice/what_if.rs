//! What-If Rule
//!
//! Shows how much savings would grow if the biggest category were trimmed.

use super::engine::{AdviceContext, Rule};
use super::types::{Advice, RuleId, Severity, Suggestion};

/// Default hypothetical cut applied to the top category
pub const DEFAULT_CUT_FRACTION: f64 = 0.10;

pub struct WhatIfRule {
    /// Fraction of the top category removed (default 10%)
    cut_fraction: f64,
}

impl WhatIfRule {
    pub fn new() -> Self {
        Self {
            cut_fraction: DEFAULT_CUT_FRACTION,
        }
    }

    pub fn with_cut_fraction(cut_fraction: f64) -> Self {
        Self { cut_fraction }
    }
}

impl Default for WhatIfRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for WhatIfRule {
    fn id(&self) -> RuleId {
        RuleId::WhatIf
    }

    fn name(&self) -> &'static str {
        "What-If Analysis"
    }

    fn evaluate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        let Some(top) = ctx.breakdown.first() else {
            return vec![];
        };

        let reduced_total = ctx.total_expense() - top.amount * self.cut_fraction;
        let new_savings = ctx.income() - reduced_total;
        let delta = new_savings - ctx.savings();

        // Zero or negative top amounts give no gain
        if delta <= 0.0 {
            return vec![];
        }

        vec![Suggestion::new(
            RuleId::WhatIf,
            Severity::Info,
            Advice::WhatIf {
                category: top.category.clone(),
                cut_pct: self.cut_fraction * 100.0,
                savings_gain: delta,
            },
        )]
    }
}
