//! TOML configuration.
//!
//! ```toml
//! [export]
//! format = "obj"
//! pretty = false
//!
//! [pricing]
//! default_base_price = 160.0
//!
//! [pricing.base_prices]
//! fixed-awning = 125.0
//! ```
//!
//! Every section and key is optional.

use crate::error::Result;
use crate::export::ExportFormat;
use crate::pricing::PricingTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is given on the command line.
    pub format: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json.extension().to_string(),
            pretty: true,
        }
    }
}

impl ExportConfig {
    /// The configured format, validated.
    pub fn format(&self) -> Result<ExportFormat> {
        ExportFormat::from_name(&self.format)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export defaults.
    pub export: ExportConfig,
    /// Price tables.
    pub pricing: PricingTable,
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
