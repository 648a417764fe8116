//! Data directory initialization.
//!
//! This module provides functionality for explicitly initializing the cabin
//! data directory and database, with support for overwriting a stale store
//! and optional configuration file creation. A fresh store is seeded with
//! every seat in the cabin marked free.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::{Database, DatabaseConfig};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of an initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default minimal configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# Cabin Configuration File
# See documentation for available options

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Skip automatic database creation on first use (default: false)
# disable_autoinit: false
";

/// Initializes the cabin data directory and database.
///
/// This function creates the data directory if needed, initializes the
/// database with every seat free, and optionally creates a default
/// configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database cannot be initialized or seeded
/// - The configuration file cannot be written
/// - Overwrite is false and the database already exists
///
/// # Examples
///
/// ```no_run
/// use cabin::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/cabin-test"))
///     .with_overwrite(false)
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join("cabin.db");
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists && options.overwrite {
        fs::remove_file(&db_path)?;
    }

    let db_config = DatabaseConfig::new(&db_path);
    let mut db = Database::open(db_config)?;

    // Seed the full cabin so availability queries see every seat
    let inventory = SeatInventory::new();
    db.save_all_seats(inventory.iter())?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");

        // Never clobber an existing config
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    log::info!(
        "Initialized data directory at {}",
        options.data_dir.display()
    );
    Ok(result)
}
