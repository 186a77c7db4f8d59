//! Report command implementations

use anyhow::Result;
use serde::Serialize;
use tally_core::charts::{CATEGORY_SHARE_PLACEHOLDER, DAILY_TREND_PLACEHOLDER};
use tally_core::{Suggestion, Tracker};

use super::{print_json, truncate};

pub fn cmd_summary(tracker: &Tracker, json: bool) -> Result<()> {
    let summary = tracker.get_summary();
    if json {
        return print_json(&summary);
    }

    let money = |v: f64| tracker.renderer().money(v, 2);

    println!();
    println!("📊 Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Income:        {:>12}", money(summary.income));
    println!("   Expenses:      {:>12}", money(summary.total_expense));
    if summary.savings < 0.0 {
        println!("   Savings:       {:>12}  ⚠️  overspending", money(summary.savings));
    } else {
        println!("   Savings:       {:>12}", money(summary.savings));
    }
    println!("   Transactions:  {:>12}", summary.transaction_count);

    Ok(())
}

pub fn cmd_categories(tracker: &Tracker, json: bool) -> Result<()> {
    let categories = tracker.get_category_breakdown();
    if json {
        return print_json(&categories);
    }

    println!();
    println!("🗂️  Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");

    if categories.is_empty() {
        println!("   {}", CATEGORY_SHARE_PLACEHOLDER);
        return Ok(());
    }

    println!(
        "   {:25} │ {:>10} │ {:>6} │ {:>5}",
        "Category", "Amount", "%", "Count"
    );
    println!("   ──────────────────────────┼────────────┼────────┼───────");

    for cat in &categories {
        println!(
            "   {:25} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            truncate(&cat.category, 25),
            cat.amount,
            cat.percentage,
            cat.transaction_count
        );
    }

    Ok(())
}

pub fn cmd_daily(tracker: &Tracker, json: bool) -> Result<()> {
    if json {
        return print_json(&tracker.get_daily_series());
    }

    println!();
    println!("📈 Cumulative Spending Over Time");
    println!("   ─────────────────────────────────────────────────────────────");

    let series = tracker.get_daily_series();
    if series.is_empty() {
        println!("   {}", DAILY_TREND_PLACEHOLDER);
        return Ok(());
    }

    println!(
        "   {:12} │ {:>10} │ {:>12} │ {:>5}",
        "Date", "Amount", "Cumulative", "Count"
    );
    println!("   ─────────────┼────────────┼──────────────┼───────");

    for point in &series {
        println!(
            "   {:12} │ {:>10.2} │ {:>12.2} │ {:>5}",
            point.date.to_string(),
            point.daily_total,
            point.cumulative_total,
            point.transaction_count
        );
    }

    Ok(())
}

#[derive(Serialize)]
struct DetailedSuggestion<'a> {
    text: String,
    #[serde(flatten)]
    suggestion: &'a Suggestion,
}

pub fn cmd_advice(tracker: &Tracker, detailed: bool, json: bool) -> Result<()> {
    let suggestions = tracker.suggestions();
    let renderer = tracker.renderer();

    if json {
        if detailed {
            let rows: Vec<_> = suggestions
                .iter()
                .map(|s| DetailedSuggestion {
                    text: renderer.render(s),
                    suggestion: s,
                })
                .collect();
            return print_json(&rows);
        }
        return print_json(&renderer.render_all(&suggestions));
    }

    println!();
    println!("🧭 Suggestions");
    println!("   ─────────────────────────────────────────────────────────────");

    for suggestion in &suggestions {
        let text = renderer.render(suggestion);
        if detailed {
            println!(
                "   [{:<9}] {:<16} {}",
                suggestion.severity.as_str(),
                suggestion.rule.as_str(),
                text
            );
        } else {
            println!("   {}", text);
        }
    }

    Ok(())
}

pub fn cmd_dashboard(tracker: &Tracker, json: bool) -> Result<()> {
    if json {
        return print_json(&tracker.dashboard());
    }

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Tally Dashboard            │");
    println!("╰─────────────────────────────────────────╯");

    cmd_summary(tracker, false)?;
    cmd_categories(tracker, false)?;
    cmd_daily(tracker, false)?;
    cmd_advice(tracker, false, false)?;

    println!();
    Ok(())
}
