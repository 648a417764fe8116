//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and output
//! formatting.

use crate::error::CliError;
use cabin::{
    Config, ConfigBuilder, Database, DatabaseConfig, ResolvedConfig, SeatId, SeatInventory,
};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<ResolvedConfig, CliError> {
    let overrides = Config {
        data_dir: global.data_dir.clone(),
        maximum_lock_wait_seconds: global.busy_timeout.map(u64::from),
        disable_autoinit: global.disable_autoinit.then_some(true),
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the seat database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(config: &ResolvedConfig) -> Result<Database, CliError> {
    let db_path = config.database_path();

    if !db_path.exists() && config.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(
        std::time::Duration::from_secs(config.maximum_lock_wait_seconds),
    );

    Database::open(db_config).map_err(CliError::from)
}

/// Load the full seat inventory from the database.
///
/// Seats with no persisted row yet are filled in as free, so the result
/// always covers the whole cabin.
pub fn load_inventory(db: &Database) -> Result<SeatInventory, CliError> {
    let seats = Database::load_seats(db.connection()).map_err(CliError::from)?;
    Ok(SeatInventory::from_seats(seats))
}

/// Parse seat text from the command line.
///
/// Unknown or malformed seats map to the library's `SeatNotFound`, which
/// carries exit code 1.
pub fn parse_seat(input: &str) -> Result<SeatId, CliError> {
    SeatId::parse(input)
        .map_err(cabin::Error::from)
        .map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
#[allow(dead_code)]
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
