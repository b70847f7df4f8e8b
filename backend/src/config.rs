//! # Picker Configuration
//!
//! Fiscal calendar and mode settings for a picker session, loaded from a
//! YAML file.
//!
//! ## YAML Format
//!
//! ```yaml
//! fiscal_start_month: 4   # April
//! mode: quarter           # day | month | quarter | multi_year_quarter
//! ```
//!
//! Both keys are optional and default to a January fiscal year in day mode.
//! The fiscal start month is validated once here so the date math never sees
//! an out-of-range value.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::PickerMode;
use std::fs;
use std::path::Path;

/// Errors raised while building or loading a picker configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid fiscal start month: {month} (must be 1..=12)")]
    InvalidFiscalStartMonth { month: u32 },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Validated fiscal calendar settings shared by every operation of a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalConfig {
    fiscal_start_month: u32,
}

impl FiscalConfig {
    /// Create a fiscal configuration, rejecting start months outside 1..=12
    pub fn new(fiscal_start_month: u32) -> Result<Self, ConfigError> {
        if !(1..=12).contains(&fiscal_start_month) {
            return Err(ConfigError::InvalidFiscalStartMonth {
                month: fiscal_start_month,
            });
        }
        Ok(Self { fiscal_start_month })
    }

    /// Month the fiscal year starts in (1 = January)
    pub fn fiscal_start_month(&self) -> u32 {
        self.fiscal_start_month
    }

    /// Zero-based index of the fiscal start month
    pub fn start_month_index(&self) -> u32 {
        self.fiscal_start_month - 1
    }
}

impl Default for FiscalConfig {
    fn default() -> Self {
        Self {
            fiscal_start_month: 1,
        }
    }
}

/// On-disk picker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub fiscal_start_month: u32,
    pub mode: PickerMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            fiscal_start_month: 1,
            mode: PickerMode::Day,
        }
    }
}

impl PickerConfig {
    /// Parse a configuration from YAML text
    pub fn from_yaml(yaml_content: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig = serde_yaml::from_str(yaml_content)?;
        config.fiscal()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml_content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml_content)?;
        info!(
            "⚙️ Loaded picker config from {:?}: fiscal start month {}, mode {:?}",
            path, config.fiscal_start_month, config.mode
        );
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("⚙️ No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validated fiscal settings of this configuration
    pub fn fiscal(&self) -> Result<FiscalConfig, ConfigError> {
        FiscalConfig::new(self.fiscal_start_month)
    }
}
