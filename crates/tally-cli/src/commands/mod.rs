//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (building the tracker from files and entries, JSON output)
//! - `config` - Configuration display
//! - `reports` - Summary, category, daily, advice and dashboard reports

pub mod config;
pub mod core;
pub mod reports;

// Re-export command functions for main.rs
pub use self::config::*;
pub use self::core::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
