//! Book command implementation.
//!
//! This module implements the `book` command, which reserves one or more
//! seats for a customer. Each seat gets its own outcome; a bad seat never
//! aborts the rest of the request.

use crate::error::CliError;
use crate::utils::{load_configuration, load_inventory, open_database, parse_seat, GlobalOptions};
use cabin::operations::reserve_batch;
use cabin::{Occupant, ReserveOptions, ReservePlan};
use clap::Args;

/// Reserve one or more seats for a customer.
#[derive(Args)]
pub struct BookCommand {
    /// Seat to reserve (repeat for multiple seats)
    #[arg(long = "seat", value_name = "SEAT", required = true)]
    pub seats: Vec<String>,

    /// Customer name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Passport number
    #[arg(long, value_name = "PASSPORT")]
    pub passport: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let occupant = Occupant::new(&self.name, &self.passport)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(&config)?;
        let mut inventory = load_inventory(&db)?;

        if self.dry_run {
            return self.dry_run(global, &inventory, &db, &occupant);
        }

        let report = reserve_batch(&mut inventory, &mut db, &self.seats, &occupant)?;

        // Successful seats go to stdout; a single-seat request prints just
        // the reference for easy capture in scripts
        let single = self.seats.len() == 1;
        for outcome in &report.outcomes {
            match &outcome.result {
                Ok(reference) => {
                    if single {
                        println!("{reference}");
                    } else {
                        println!("{}\t{}", outcome.input, reference);
                    }
                }
                Err(error) => {
                    if !global.quiet {
                        eprintln!("Warning: seat {} not booked: {error}", outcome.input);
                    }
                }
            }
        }

        if report.all_failed() {
            return Err(CliError::SemanticFailure(
                "no seats could be booked".into(),
            ));
        }

        Ok(())
    }

    /// Print what would happen without touching the store.
    fn dry_run(
        &self,
        global: &GlobalOptions,
        inventory: &cabin::SeatInventory,
        db: &cabin::Database,
        occupant: &Occupant,
    ) -> Result<(), CliError> {
        if global.quiet {
            return Ok(());
        }

        eprintln!("Dry run - would perform the following actions:");
        for input in &self.seats {
            let seat = match parse_seat(input) {
                Ok(seat) => seat,
                Err(error) => {
                    eprintln!("  - seat {input} would fail: {error}");
                    continue;
                }
            };

            match ReservePlan::new(ReserveOptions::new(seat, occupant.clone()))
                .build_plan(inventory, db)
            {
                Ok(plan) => {
                    for action in &plan.actions {
                        eprintln!("  - {}", action.description());
                    }
                }
                Err(error) => eprintln!("  - seat {input} would fail: {error}"),
            }
        }

        Ok(())
    }
}
