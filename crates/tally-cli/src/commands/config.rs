//! Config command implementation

use anyhow::Result;
use tally_core::config::default_config_path;
use tally_core::{ConfigSource, TallyConfig};

use super::print_json;

pub fn cmd_config(config: &TallyConfig, source: &ConfigSource, json: bool) -> Result<()> {
    if json {
        return print_json(config);
    }

    println!();
    println!("⚙️  Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Source:          {}", source);
    if let Some(path) = default_config_path() {
        println!("   Override path:   {}", path.display());
    }
    println!();
    println!("   Currency symbol: {}", config.currency_symbol);
    println!("   Default income:  {:.2}", config.default_income);
    println!("   Log level:       {}", config.log_level);

    Ok(())
}
