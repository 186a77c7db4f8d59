//! Tracker facade
//!
//! Bundles a store, the advice engine and a renderer behind the operations a
//! front end needs. Each query takes a fresh snapshot, so results always
//! reflect the store at the moment of the call.

use serde::Serialize;

use crate::advice::{AdviceEngine, Renderer, Suggestion};
use crate::analytics;
use crate::charts::{self, DashboardCharts};
use crate::config::TallyConfig;
use crate::import::{self, ImportStats, RawExpense};
use crate::models::{CategoryTotal, DailyPoint, Summary};
use crate::store::{ExpenseOutcome, IntoAmount, TransactionStore};

/// Everything a dashboard shows, computed from one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub categories: Vec<CategoryTotal>,
    pub daily: Vec<DailyPoint>,
    pub suggestions: Vec<String>,
    pub charts: DashboardCharts,
}

pub struct Tracker {
    store: TransactionStore,
    engine: AdviceEngine,
    renderer: Renderer,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker {
    pub fn new() -> Self {
        Self::with_parts(TransactionStore::new(), AdviceEngine::new(), Renderer::default())
    }

    /// Create a tracker using the configured currency symbol and income
    pub fn from_config(config: &TallyConfig) -> Self {
        let tracker = Self::with_parts(
            TransactionStore::new(),
            AdviceEngine::new(),
            Renderer::new(config.currency_symbol.clone()),
        );
        tracker.set_income(config.default_income);
        tracker
    }

    pub fn with_parts(store: TransactionStore, engine: AdviceEngine, renderer: Renderer) -> Self {
        Self {
            store,
            engine,
            renderer,
        }
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn set_income(&self, amount: impl IntoAmount) {
        self.store.set_income(amount);
    }

    pub fn add_expense(&self, date: &str, category: &str, amount: impl IntoAmount) -> ExpenseOutcome {
        self.store.add_expense(date, category, amount)
    }

    pub fn import(&self, rows: impl IntoIterator<Item = RawExpense>) -> ImportStats {
        import::import_expenses(&self.store, rows)
    }

    pub fn get_summary(&self) -> Summary {
        analytics::summary(&self.store.snapshot())
    }

    pub fn get_category_breakdown(&self) -> Vec<CategoryTotal> {
        analytics::category_breakdown(&self.store.snapshot())
    }

    pub fn get_daily_series(&self) -> Vec<DailyPoint> {
        analytics::daily_series(&self.store.snapshot())
    }

    /// Structured suggestions in pipeline order
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.engine.generate_for(&self.store.snapshot())
    }

    /// Rendered suggestions in pipeline order
    pub fn generate_suggestions(&self) -> Vec<String> {
        self.renderer.render_all(&self.suggestions())
    }

    pub fn charts(&self) -> DashboardCharts {
        charts::dashboard_charts(&self.store.snapshot())
    }

    pub fn dashboard(&self) -> Dashboard {
        let snapshot = self.store.snapshot();
        Dashboard {
            summary: analytics::summary(&snapshot),
            categories: analytics::category_breakdown(&snapshot),
            daily: analytics::daily_series(&snapshot),
            suggestions: self
                .renderer
                .render_all(&self.engine.generate_for(&snapshot)),
            charts: charts::dashboard_charts(&snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_applies_income_and_symbol() {
        let config = TallyConfig {
            currency_symbol: "$".to_string(),
            default_income: 100.0,
            log_level: "info".to_string(),
        };
        let tracker = Tracker::from_config(&config);
        tracker.add_expense("2026-10-01", "Food", 150.0);

        assert_eq!(tracker.get_summary().income, 100.0);
        assert!(tracker.generate_suggestions()[0].contains("$50.00"));
    }

    #[test]
    fn test_dashboard_empty() {
        let dashboard = Tracker::new().dashboard();
        assert_eq!(dashboard.summary.transaction_count, 0);
        assert!(dashboard.categories.is_empty());
        assert!(dashboard.daily.is_empty());
        assert_eq!(dashboard.suggestions.len(), 1);
        assert!(dashboard.charts.cumulative.is_placeholder());
    }
}
