//! Text rendering for suggestions
//!
//! Rules produce structured [`Suggestion`]s; this is the only place that
//! turns them into user-facing sentences.

use super::types::{Advice, Suggestion, Tip};

/// Default currency symbol for rendered amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Renders suggestions as display strings
#[derive(Debug, Clone)]
pub struct Renderer {
    currency_symbol: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Renderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Format an amount with the currency symbol and the given precision
    pub fn money(&self, amount: f64, precision: usize) -> String {
        format!("{}{:.*}", self.currency_symbol, precision, amount)
    }

    pub fn render(&self, suggestion: &Suggestion) -> String {
        match &suggestion.advice {
            Advice::NoData => {
                "No expense data yet. Add some expenses to receive personalized insights."
                    .to_string()
            }
            Advice::Overspending { deficit } => format!(
                "⚠️ You're overspending by {}. Cut discretionary items this week.",
                self.money(*deficit, 2)
            ),
            Advice::LowSavingsRate {
                floor_pct,
                target_pct,
                ..
            } => format!(
                "⚠️ Your savings rate is below {:.0}% of income. Try to increase savings to at least {:.0}%.",
                floor_pct, target_pct
            ),
            Advice::HealthySavingsRate { threshold_pct, .. } => format!(
                "✅ Great job! You're saving more than {:.0}% of your income. Maintain this habit!",
                threshold_pct
            ),
            Advice::HighConcentration {
                category,
                share_pct,
                cut_pct,
                cut_savings,
            } => format!(
                "🍔 High dependency on {} spending ({:.1}% of expenses). A {:.0}% cut here saves {}.",
                category,
                share_pct,
                cut_pct,
                self.money(*cut_savings, 0)
            ),
            Advice::ModerateConcentration {
                category,
                share_pct,
            } => format!(
                "🛒 {} takes {:.1}% of your expenses. Moderate, but review necessity.",
                category, share_pct
            ),
            Advice::Behavior { label, .. } => {
                format!("💬 Spending behavior detected: {}.", label)
            }
            Advice::WhatIf {
                category,
                cut_pct,
                savings_gain,
            } => format!(
                "If you reduce '{}' by {:.0}%, you can increase savings by {} this month.",
                category,
                cut_pct,
                self.money(*savings_gain, 2)
            ),
            Advice::ProjectedOverspend { shortfall, .. } => format!(
                "📉 At current pace, you may overspend by {} by month-end.",
                self.money(*shortfall, 2)
            ),
            Advice::ProjectedSavings { savings, .. } => format!(
                "📈 Projected month-end savings: {} if current habits continue.",
                self.money(*savings, 2)
            ),
            Advice::Tip { tip } => render_tip(*tip).to_string(),
        }
    }

    pub fn render_all(&self, suggestions: &[Suggestion]) -> Vec<String> {
        suggestions.iter().map(|s| self.render(s)).collect()
    }
}

fn render_tip(tip: Tip) -> &'static str {
    match tip {
        Tip::AutomateTransfer => "💡 Automate a monthly transfer to a savings account.",
        Tip::WeeklyReview => "📅 Review expenses every Sunday to track progress.",
        Tip::BiggestCategoryGoal => {
            "🎯 Set a weekly mini-goal: spend 10% less on the biggest category."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::types::{BehaviorLabel, RuleId, Severity};

    fn suggestion(advice: Advice) -> Suggestion {
        Suggestion::new(RuleId::SavingsRate, Severity::Info, advice)
    }

    #[test]
    fn test_render_overspending() {
        let text = Renderer::default().render(&suggestion(Advice::Overspending { deficit: 250.0 }));
        assert_eq!(
            text,
            "⚠️ You're overspending by ₹250.00. Cut discretionary items this week."
        );
    }

    #[test]
    fn test_render_uses_currency_symbol() {
        let text = Renderer::new("$").render(&suggestion(Advice::ProjectedSavings {
            savings: 12.5,
            projected_expense: 0.0,
            span_days: 30,
            horizon_days: 30,
        }));
        assert_eq!(
            text,
            "📈 Projected month-end savings: $12.50 if current habits continue."
        );
    }

    #[test]
    fn test_render_high_concentration() {
        let text = Renderer::default().render(&suggestion(Advice::HighConcentration {
            category: "Food".to_string(),
            share_pct: 62.5,
            cut_pct: 15.0,
            cut_savings: 75.0,
        }));
        assert_eq!(
            text,
            "🍔 High dependency on Food spending (62.5% of expenses). A 15% cut here saves ₹75."
        );
    }

    #[test]
    fn test_render_behavior_and_tips() {
        let renderer = Renderer::default();
        assert_eq!(
            renderer.render(&suggestion(Advice::Behavior {
                label: BehaviorLabel::Impulsive,
                ratio: 1.4,
            })),
            "💬 Spending behavior detected: Impulsive spender."
        );
        assert!(renderer
            .render(&suggestion(Advice::Tip {
                tip: Tip::WeeklyReview
            }))
            .contains("every Sunday"));
    }

    #[test]
    fn test_render_low_savings_thresholds() {
        let text = Renderer::default().render(&suggestion(Advice::LowSavingsRate {
            savings: 10.0,
            floor_pct: 5.0,
            target_pct: 10.0,
        }));
        assert_eq!(
            text,
            "⚠️ Your savings rate is below 5% of income. Try to increase savings to at least 10%."
        );
    }
}
