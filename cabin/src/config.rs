//! Configuration system for cabin.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides (`CABIN_*`)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CABIN_*`)
//! 3. User config (`~/.cabin/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```
//! use cabin::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .build()
//!     .unwrap();
//! assert_eq!(config.maximum_lock_wait_seconds, 5);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use cabin::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     data_dir: Some(PathBuf::from("/tmp/cabin-test")),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.data_dir, PathBuf::from("/tmp/cabin-test"));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::database::default_data_dir;
use crate::error::{Error, Result};

/// Default maximum time to wait for the database lock, in seconds.
const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Application configuration.
///
/// Optional fields are unset layers during merging; `build` fills in
/// defaults for anything no layer provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the database and config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Maximum time to wait for the database lock, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Skip automatic database creation on first use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Overlays `other` on top of this config, field by field.
    fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = other.maximum_lock_wait_seconds;
        }
        if other.disable_autoinit.is_some() {
            self.disable_autoinit = other.disable_autoinit;
        }
    }

    /// Reads configuration from `CABIN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unparseable value.
    fn from_env() -> Result<Self> {
        let data_dir = env::var_os("CABIN_DATA_DIR").map(PathBuf::from);

        let maximum_lock_wait_seconds = match env::var("CABIN_MAXIMUM_LOCK_WAIT_SECONDS") {
            Ok(value) => Some(value.parse().map_err(|_| Error::Validation {
                field: "CABIN_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                message: format!("expected a non-negative integer, got '{value}'"),
            })?),
            Err(_) => None,
        };

        let disable_autoinit = match env::var("CABIN_DISABLE_AUTOINIT") {
            Ok(value) => match value.as_str() {
                "1" | "true" | "yes" => Some(true),
                "0" | "false" | "no" => Some(false),
                _ => {
                    return Err(Error::Validation {
                        field: "CABIN_DISABLE_AUTOINIT".into(),
                        message: format!("expected a boolean, got '{value}'"),
                    })
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            data_dir,
            maximum_lock_wait_seconds,
            disable_autoinit,
        })
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(Error::from)
    }
}

/// Resolved configuration with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory holding the database and config file.
    pub data_dir: PathBuf,

    /// Maximum time to wait for the database lock, in seconds.
    pub maximum_lock_wait_seconds: u64,

    /// Skip automatic database creation on first use.
    pub disable_autoinit: bool,
}

impl ResolvedConfig {
    /// Returns the database path inside the data directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("cabin.db")
    }
}

/// Builds a [`ResolvedConfig`] by merging configuration layers.
///
/// # Examples
///
/// ```
/// use cabin::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(!config.disable_autoinit);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    overrides: Config,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a new builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies programmatic overrides on top of all other layers.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = config;
        self
    }

    /// Skips loading the user configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading `CABIN_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merges all layers and resolves defaults.
    ///
    /// The data directory is resolved first since it determines where the
    /// user config file lives: an explicit override or `CABIN_DATA_DIR`
    /// wins over the default `~/.cabin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, an
    /// environment variable holds an unparseable value, or the user config
    /// file exists but cannot be parsed.
    pub fn build(self) -> Result<ResolvedConfig> {
        let env_config = if self.skip_env {
            Config::default()
        } else {
            Config::from_env()?
        };

        let data_dir = self
            .overrides
            .data_dir
            .clone()
            .or_else(|| env_config.data_dir.clone())
            .map_or_else(default_data_dir, Ok)?;

        let mut merged = Config::default();

        if !self.skip_files {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                merged.merge(Config::from_file(&config_path)?);
            }
        }

        merged.merge(env_config);
        merged.merge(self.overrides);

        Ok(ResolvedConfig {
            data_dir,
            maximum_lock_wait_seconds: merged
                .maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
            disable_autoinit: merged.disable_autoinit.unwrap_or(false),
        })
    }
}
