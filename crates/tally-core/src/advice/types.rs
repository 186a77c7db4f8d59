//! Core types for the Advice Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rules in the advice pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Nothing to analyze yet
    NoData,
    /// Savings compared to income
    SavingsRate,
    /// Categories taking a large share of spending
    Concentration,
    /// Spending-to-income ratio label
    Behavior,
    /// Effect of trimming the biggest category
    WhatIf,
    /// Month-end projection from the daily average
    TrendProjection,
    /// General tips, always included
    Tips,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::NoData => "no_data",
            RuleId::SavingsRate => "savings_rate",
            RuleId::Concentration => "concentration",
            RuleId::Behavior => "behavior",
            RuleId::WhatIf => "what_if",
            RuleId::TrendProjection => "trend_projection",
            RuleId::Tips => "tips",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_data" => Ok(RuleId::NoData),
            "savings_rate" => Ok(RuleId::SavingsRate),
            "concentration" => Ok(RuleId::Concentration),
            "behavior" => Ok(RuleId::Behavior),
            "what_if" => Ok(RuleId::WhatIf),
            "trend_projection" => Ok(RuleId::TrendProjection),
            "tips" => Ok(RuleId::Tips),
            _ => Err(format!("Unknown rule: {}", s)),
        }
    }
}

/// Severity level of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
    /// Requires immediate attention
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
            Severity::Alert => "alert",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Attention => 2,
            Severity::Warning => 3,
            Severity::Alert => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse spending behavior label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorLabel {
    Impulsive,
    Balanced,
    Conservative,
    Undefined,
}

impl BehaviorLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorLabel::Impulsive => "Impulsive spender",
            BehaviorLabel::Balanced => "Balanced spender",
            BehaviorLabel::Conservative => "Conservative saver",
            BehaviorLabel::Undefined => "Undefined pattern",
        }
    }
}

impl fmt::Display for BehaviorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed general-purpose tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    AutomateTransfer,
    WeeklyReview,
    BiggestCategoryGoal,
}

impl Tip {
    /// All tips, in display order
    pub const ALL: [Tip; 3] = [Tip::AutomateTransfer, Tip::WeeklyReview, Tip::BiggestCategoryGoal];
}

/// What a suggestion says, with the numbers behind it
///
/// Amounts are in the tracker's single currency; percentages are 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advice {
    NoData,
    Overspending {
        deficit: f64,
    },
    LowSavingsRate {
        savings: f64,
        floor_pct: f64,
        target_pct: f64,
    },
    HealthySavingsRate {
        savings: f64,
        threshold_pct: f64,
    },
    HighConcentration {
        category: String,
        share_pct: f64,
        cut_pct: f64,
        cut_savings: f64,
    },
    ModerateConcentration {
        category: String,
        share_pct: f64,
    },
    Behavior {
        label: BehaviorLabel,
        ratio: f64,
    },
    WhatIf {
        category: String,
        cut_pct: f64,
        savings_gain: f64,
    },
    ProjectedOverspend {
        shortfall: f64,
        projected_expense: f64,
        span_days: i64,
        horizon_days: i64,
    },
    ProjectedSavings {
        savings: f64,
        projected_expense: f64,
        span_days: i64,
        horizon_days: i64,
    },
    Tip {
        tip: Tip,
    },
}

/// One piece of advice produced by a rule (before rendering)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Rule that produced this suggestion
    pub rule: RuleId,
    /// How urgent/important this suggestion is
    pub severity: Severity,
    /// Structured content
    pub advice: Advice,
}

impl Suggestion {
    pub fn new(rule: RuleId, severity: Severity, advice: Advice) -> Self {
        Self {
            rule,
            severity,
            advice,
        }
    }

    /// The single suggestion returned when there is nothing to analyze
    pub fn no_data() -> Self {
        Self::new(RuleId::NoData, Severity::Info, Advice::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_id_round_trip_names() {
        assert_eq!(RuleId::TrendProjection.as_str(), "trend_projection");
        assert_eq!(RuleId::from_str("what_if").unwrap(), RuleId::WhatIf);
        assert!(RuleId::from_str("bogus").is_err());
    }

    #[test]
    fn test_severity_priority() {
        assert!(Severity::Alert.priority() > Severity::Warning.priority());
        assert!(Severity::Warning.priority() > Severity::Attention.priority());
        assert!(Severity::Attention.priority() > Severity::Info.priority());
    }

    #[test]
    fn test_advice_serializes_with_kind_tag() {
        let suggestion = Suggestion::new(
            RuleId::Concentration,
            Severity::Attention,
            Advice::ModerateConcentration {
                category: "Travel".to_string(),
                share_pct: 20.0,
            },
        );
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["rule"], "concentration");
        assert_eq!(value["severity"], "attention");
        assert_eq!(value["advice"]["kind"], "moderate_concentration");
        assert_eq!(value["advice"]["category"], "Travel");
    }

    #[test]
    fn test_behavior_labels() {
        assert_eq!(BehaviorLabel::Conservative.to_string(), "Conservative saver");
        assert_eq!(BehaviorLabel::Undefined.as_str(), "Undefined pattern");
    }
}
