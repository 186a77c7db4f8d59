//! Advice Engine - runs the rule pipeline over a snapshot

use crate::analytics;
use crate::models::{CategoryTotal, DateSpan, Summary};
use crate::store::Snapshot;

use super::types::{RuleId, Suggestion};
use super::{
    BehaviorRule, ConcentrationRule, SavingsRateRule, StaticTipsRule, TrendProjectionRule,
    WhatIfRule,
};

/// Aggregates shared by every rule, computed once per run
#[derive(Debug, Clone)]
pub struct AdviceContext<'a> {
    /// Snapshot the aggregates were derived from
    pub snapshot: &'a Snapshot,
    pub summary: Summary,
    /// Category totals, largest first
    pub breakdown: Vec<CategoryTotal>,
    /// Expense date range, `None` when there are no expenses
    pub span: Option<DateSpan>,
}

impl<'a> AdviceContext<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            summary: analytics::summary(snapshot),
            breakdown: analytics::category_breakdown(snapshot),
            span: analytics::date_span(snapshot),
        }
    }

    pub fn income(&self) -> f64 {
        self.summary.income
    }

    pub fn total_expense(&self) -> f64 {
        self.summary.total_expense
    }

    pub fn savings(&self) -> f64 {
        self.summary.savings
    }
}

/// A single heuristic in the advice pipeline
///
/// Rules never fail: when their inputs make a message meaningless they
/// return no suggestions.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and produce suggestions
    fn evaluate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion>;
}

/// Ordered pipeline of advice rules
pub struct AdviceEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceEngine {
    /// Create an engine with the built-in rules in pipeline order
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(SavingsRateRule::new()));
        engine.register(Box::new(ConcentrationRule::new()));
        engine.register(Box::new(BehaviorRule::new()));
        engine.register(Box::new(WhatIfRule::new()));
        engine.register(Box::new(TrendProjectionRule::new()));
        engine.register(Box::new(StaticTipsRule::new()));

        engine
    }

    /// Create an engine with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Append a rule to the end of the pipeline
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Run every rule in order and collect their suggestions
    ///
    /// With no spending recorded, returns only the "no data" suggestion.
    /// Output keeps pipeline order; it is never re-sorted.
    pub fn generate(&self, ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        if ctx.total_expense() == 0.0 {
            tracing::debug!("No spending recorded, skipping advice rules");
            return vec![Suggestion::no_data()];
        }

        let mut all_suggestions = vec![];

        for rule in &self.rules {
            let suggestions = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.id().as_str(),
                count = suggestions.len(),
                "Advice rule evaluated"
            );
            all_suggestions.extend(suggestions);
        }

        all_suggestions
    }

    /// Build the context from a snapshot and generate suggestions
    pub fn generate_for(&self, snapshot: &Snapshot) -> Vec<Suggestion> {
        self.generate(&AdviceContext::new(snapshot))
    }

    /// Get list of registered rules in pipeline order
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}
