//! Configuration management for the generator
//!
//! A flat, strongly-typed configuration with TOML support. Every field has
//! a default matching the command-line defaults, so a config file only needs
//! the values it changes.

use crate::domain::{default_keyword_tlds, normalize_tlds};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory scanned for rule lists
pub const DEFAULT_INPUT_DIR: &str = "litsts";
/// Default domain list output
pub const DEFAULT_OUTPUT_FILE: &str = "generated/keenetic_dns_routes.txt";
/// Default unsupported entries output
pub const DEFAULT_UNSUPPORTED_FILE: &str = "generated/keenetic_dns_routes_unsupported.txt";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory with `*.list` files
    pub input_dir: PathBuf,

    /// Domain list output path
    pub output_file: PathBuf,

    /// Unsupported entries output path; empty disables the file
    pub unsupported_file: PathBuf,

    /// Treat unsupported entries as a failure
    pub strict: bool,

    /// TLDs appended to `DOMAIN-KEYWORD` values
    pub keyword_tlds: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            unsupported_file: PathBuf::from(DEFAULT_UNSUPPORTED_FILE),
            strict: false,
            keyword_tlds: default_keyword_tlds(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    ///
    /// Keyword TLDs are normalized the same way as on the command line.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.keyword_tlds = normalize_tlds(&config.keyword_tlds);
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Unsupported entries output, `None` when disabled
    pub fn unsupported_path(&self) -> Option<&Path> {
        if self.unsupported_file.as_os_str().is_empty() {
            None
        } else {
            Some(self.unsupported_file.as_path())
        }
    }

    /// Validate the configuration
    ///
    /// Keyword TLDs are not restricted to single labels, so `co.uk` expands
    /// `shop` to `shop.co.uk`.
    pub fn validate(&self) -> Result<()> {
        if self.output_file.as_os_str().is_empty() {
            return Err(Error::config_value("output_file", "Must not be empty"));
        }

        Ok(())
    }
}
