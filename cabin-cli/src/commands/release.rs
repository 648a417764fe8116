//! Release command implementation.
//!
//! This module implements the `release` command, which returns a reserved
//! seat to the free pool. The booking that held the seat stays in the
//! history.

use crate::error::CliError;
use crate::utils::{load_configuration, load_inventory, open_database, parse_seat, GlobalOptions};
use cabin::{PlanExecutor, ReleaseOptions, ReleasePlan};
use clap::Args;

/// Return a reserved seat to the free pool.
#[derive(Args)]
pub struct ReleaseCommand {
    /// Seat to release
    #[arg(long, value_name = "SEAT")]
    pub seat: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ReleaseCommand {
    /// Execute the release command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let seat = parse_seat(&self.seat)?;

        let config = load_configuration(global)?;
        let mut db = open_database(&config)?;
        let mut inventory = load_inventory(&db)?;

        let plan = ReleasePlan::new(ReleaseOptions::new(seat))
            .build_plan(&inventory)
            .map_err(CliError::from)?;

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for action in &plan.actions {
                    eprintln!("  - {}", action.description());
                }
            }
            return Ok(());
        }

        PlanExecutor::new(&mut inventory, &mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if !global.quiet {
            println!("Released {seat}");
        }

        Ok(())
    }
}
