//! Status command implementation.
//!
//! This module implements the `status` command, which looks up a single
//! seat or finds every seat held by a customer.

use crate::error::CliError;
use crate::utils::{load_configuration, load_inventory, open_database, parse_seat, GlobalOptions};
use cabin::SeatStatus;
use clap::Args;

/// Look up a seat or find a customer's seats.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct StatusCommand {
    /// Seat to look up
    #[arg(long, value_name = "SEAT")]
    pub seat: Option<String>,

    /// Customer name to search for (case-insensitive exact match)
    #[arg(long, value_name = "NAME")]
    pub customer: Option<String>,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(&config)?;
        let inventory = load_inventory(&db)?;

        if let Some(ref input) = self.seat {
            let id = parse_seat(input)?;
            let seat = inventory
                .seat(id)
                .ok_or_else(|| cabin::Error::SeatNotFound { id: id.to_string() })
                .map_err(CliError::from)?;

            match seat.status() {
                SeatStatus::Free => println!("{id}\tfree"),
                SeatStatus::Reserved {
                    reference,
                    occupant,
                } => {
                    println!("{id}\treserved\t{reference}\t{}", occupant.customer_name());
                }
            }
            return Ok(());
        }

        // A customer with no seats is an empty result, not an error
        let name = self.customer.as_deref().unwrap_or_default();
        for (id, occupant) in inventory.find_by_customer(name) {
            println!("{id}\t{}\t{}", occupant.customer_name(), occupant.passport_number());
        }

        Ok(())
    }
}
