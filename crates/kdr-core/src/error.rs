//! Error types for kdr-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for kdr-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input directory does not exist
    #[error("Input directory not found: {}", path.display())]
    InputDirNotFound {
        /// Directory that was expected to hold the rule lists
        path: PathBuf,
    },

    /// Input directory exists but holds no `*.list` files
    #[error("No .list files found in {}", path.display())]
    NoListFiles {
        /// Directory that was scanned
        path: PathBuf,
    },

    /// Reading a rule list or directory failed
    #[error("Failed to read {}", path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing an output list failed
    #[error("Failed to write {}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigValue {
        /// Configuration key
        key: String,
        /// Error message
        message: String,
    },

    /// Configuration serialization failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a read error for `path`
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error for `path`
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a config value error
    pub fn config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Process exit code this error maps to.
    ///
    /// Missing or empty input directories are usage errors (`2`); everything
    /// else is a fatal failure (`1`).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputDirNotFound { .. } | Self::NoListFiles { .. } => 2,
            _ => 1,
        }
    }
}
