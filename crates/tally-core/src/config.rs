//! Tracker configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the user override (~/.config/tally/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Missing keys in an override keep their default values.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::advice::render::DEFAULT_CURRENCY_SYMBOL;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Resolved tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyConfig {
    /// Symbol prefixed to rendered amounts
    pub currency_symbol: String,
    /// Income used when none is supplied
    pub default_income: f64,
    /// Log level when RUST_LOG and --verbose are not set
    pub log_level: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_income: 0.0,
            log_level: "info".to_string(),
        }
    }
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "built-in defaults"),
        }
    }
}

impl TallyConfig {
    /// Load from the default override location, falling back to defaults
    pub fn load() -> Result<(Self, ConfigSource)> {
        Self::load_from(None)
    }

    /// Load from an explicit path if given, else the default override path
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// override is not.
    pub fn load_from(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = path {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config {}: {}", path.display(), e))
            })?;
            return Ok((parse_config(&content)?, ConfigSource::File(path.to_path_buf())));
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                let content = fs::read_to_string(&default_path)
                    .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
                return Ok((parse_config(&content)?, ConfigSource::File(default_path)));
            }
        }

        Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tally").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    defaults: Option<RawDefaults>,
    logging: Option<RawLogging>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    income: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawLogging {
    level: Option<String>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<TallyConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = TallyConfig::default();

    if let Some(display) = raw.display {
        if let Some(symbol) = display.currency_symbol {
            config.currency_symbol = symbol;
        }
    }

    if let Some(defaults) = raw.defaults {
        if let Some(income) = defaults.income {
            if !income.is_finite() {
                return Err(Error::Config(format!(
                    "defaults.income must be a finite number, got {}",
                    income
                )));
            }
            config.default_income = income;
        }
    }

    if let Some(logging) = raw.logging {
        if let Some(level) = logging.level {
            config.log_level = level;
        }
    }

    Ok(config)
}
