//! Static tips, appended on every run with data

use super::engine::{AdviceContext, Rule};
use super::types::{Advice, RuleId, Severity, Suggestion, Tip};

pub struct StaticTipsRule;

impl StaticTipsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticTipsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for StaticTipsRule {
    fn id(&self) -> RuleId {
        RuleId::Tips
    }

    fn name(&self) -> &'static str {
        "Static Tips"
    }

    fn evaluate(&self, _ctx: &AdviceContext<'_>) -> Vec<Suggestion> {
        Tip::ALL
            .iter()
            .map(|&tip| Suggestion::new(RuleId::Tips, Severity::Info, Advice::Tip { tip }))
            .collect()
    }
}
