//! Advice Engine - Heuristic Spending Suggestions
//!
//! A fixed pipeline of rules turns the summary and category breakdown into
//! structured suggestions. Rules run in this order:
//!
//! 1. **Savings Rate** - overspending, low savings, or a healthy rate
//! 2. **Concentration** - categories taking 15%+ of spending
//! 3. **Behavior** - spending-to-income label
//! 4. **What-If** - savings gained by trimming the top category
//! 5. **Trend Projection** - month-end estimate from the daily average
//! 6. **Static Tips** - constant general advice
//!
//! When nothing has been spent, the engine returns a single "no data"
//! suggestion and skips the pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::advice::{AdviceEngine, Renderer};
//! use tally_core::store::TransactionStore;
//!
//! let store = TransactionStore::new();
//! store.set_income(1000.0);
//! store.add_expense("2026-10-01", "Food", 400.0);
//!
//! let suggestions = AdviceEngine::new().generate_for(&store.snapshot());
//! let lines = Renderer::default().render_all(&suggestions);
//! assert!(!lines.is_empty());
//! ```

pub mod behavior;
pub mod concentration;
pub mod engine;
pub mod projection;
pub mod render;
pub mod savings_rate;
pub mod tips;
pub mod types;
pub mod what_if;

pub use behavior::BehaviorRule;
pub use concentration::ConcentrationRule;
pub use engine::{AdviceContext, AdviceEngine, Rule};
pub use projection::{Projection, TrendProjectionRule};
pub use render::Renderer;
pub use savings_rate::SavingsRateRule;
pub use tips::StaticTipsRule;
pub use types::{Advice, BehaviorLabel, RuleId, Severity, Suggestion, Tip};
pub use what_if::WhatIfRule;
