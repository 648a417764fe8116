//! Bookings command implementation.
//!
//! This module implements the `bookings` command, which displays the
//! append-only booking history in various formats (table, JSON, CSV).
//! Bookings whose seat has since been released are still listed.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_database, parse_seat, GlobalOptions,
};
use cabin::{Booking, Database};
use clap::{Args, ValueEnum};
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 5] = [
    "reference",
    "seat",
    "customer_name",
    "passport_number",
    "created_at",
];

/// Show the booking history.
#[derive(Args)]
pub struct BookingsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "CABIN_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only show history for the given seat
    #[arg(long, value_name = "SEAT")]
    pub seat: Option<String>,
}

/// Output format for the bookings command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl BookingsCommand {
    /// Execute the bookings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(&config)?;

        let bookings = match self.seat {
            Some(ref input) => {
                let seat = parse_seat(input)?;
                Database::bookings_for_seat(db.connection(), seat).map_err(CliError::from)?
            }
            None => Database::list_bookings(db.connection()).map_err(CliError::from)?,
        };

        match self.format {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => format_as_json(&bookings)?,
            OutputFormat::Csv => format_as_csv(&bookings)?,
        }

        Ok(())
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            booking.reference(),
            booking.seat(),
            booking.occupant().customer_name(),
            booking.occupant().passport_number(),
            format_timestamp(booking.created_at()),
        )?;
    }

    Ok(())
}

/// Format bookings as JSON.
fn format_as_json(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = bookings
        .iter()
        .map(|b| {
            serde_json::json!({
                "reference": b.reference().as_str(),
                "seat": b.seat().to_string(),
                "customer_name": b.occupant().customer_name(),
                "passport_number": b.occupant().passport_number(),
                "created_at": format_timestamp(b.created_at()),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format bookings as CSV.
fn format_as_csv(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for booking in bookings {
        writer
            .write_record(&[
                booking.reference().as_str().to_string(),
                booking.seat().to_string(),
                booking.occupant().customer_name().to_string(),
                booking.occupant().passport_number().to_string(),
                format_timestamp(booking.created_at()),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
