//! Init command implementation.
//!
//! This module implements the `init` command, which explicitly creates
//! the data directory and seat database, seeding every seat as free.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use cabin::operations::{init_database, InitOptions};
use clap::Args;

/// Initialize the data directory and seat database.
#[derive(Args)]
pub struct InitCommand {
    /// Replace an existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Also write a default config.yaml
    #[arg(long)]
    pub create_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let options = InitOptions::new(config.data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.create_config);

        let result = init_database(&options).map_err(CliError::from)?;

        if !global.quiet {
            println!("Initialized data directory: {}", result.data_dir.display());
            if result.database_created {
                println!("Created seat database with all seats free");
            }
            if result.config_created {
                println!("Wrote default config.yaml");
            }
        }

        Ok(())
    }
}
