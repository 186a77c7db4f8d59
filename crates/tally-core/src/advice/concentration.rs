//! Category Concentration Rule
//!
//! Flags categories that take a large share of total spending, in
//! breakdown order (largest first).

use crate::analytics::safe_ratio;

use super::engine::{AdviceContext, Rule};
use super::types::{Advice, RuleId, Severity, Suggestion};

/// Share (percent) at or above which a category is a high dependency
pub const HIGH_SHARE_PCT: f64 = 30.0;
/// Share (percent) at or above which a category is worth reviewing
pub const MODERATE_SHARE_PCT: f64 = 15.0;
/// Cut applied to a high-dependency category for the savings estimate
pub const SUGGESTED_CUT_FRACTION: f64 = 0.15;

pub struct ConcentrationRule;

impl ConcentrationRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConcentrationRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ConcentrationRule {
    fn id(&self) -> RuleId {
        RuleId::Concentration
    }

    fn name(&self) -> &'static str {
        "Category Concentration"
    }

    fn evaluate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        let total = ctx.total_expense();
        let mut suggestions = Vec::new();

        for cat in &ctx.breakdown {
            let Some(share) = safe_ratio(cat.amount, total).map(|r| r * 100.0) else {
                continue;
            };

            if share >= HIGH_SHARE_PCT {
                suggestions.push(Suggestion::new(
                    RuleId::Concentration,
                    Severity::Attention,
                    Advice::HighConcentration {
                        category: cat.category.clone(),
                        share_pct: share,
                        cut_pct: SUGGESTED_CUT_FRACTION * 100.0,
                        cut_savings: cat.amount * SUGGESTED_CUT_FRACTION,
                    },
                ));
            } else if share >= MODERATE_SHARE_PCT {
                suggestions.push(Suggestion::new(
                    RuleId::Concentration,
                    Severity::Info,
                    Advice::ModerateConcentration {
                        category: cat.category.clone(),
                        share_pct: share,
                    },
                ));
            }
        }

        suggestions
    }
}
