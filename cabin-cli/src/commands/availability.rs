//! Availability command implementation.
//!
//! This module implements the `availability` command, which displays free
//! seats grouped by row in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{load_configuration, load_inventory, open_database, GlobalOptions};
use cabin::{SeatId, SeatInventory, SeatRow};
use clap::{Args, ValueEnum};
use std::io::Write;

/// Show free seats grouped by row.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "CABIN_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only show the given row (A-F)
    #[arg(long, value_name = "ROW")]
    pub row: Option<char>,

    /// List individual seats instead of counts
    #[arg(long)]
    pub seats: bool,
}

/// Output format for availability.
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

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(&config)?;
        let inventory = load_inventory(&db)?;

        let row_filter = match self.row {
            Some(c) => Some(SeatRow::try_from(c).map_err(|e| {
                CliError::InvalidArguments(e.to_string())
            })?),
            None => None,
        };

        let mut by_row = inventory.available_by_row();
        if let Some(row) = row_filter {
            by_row.retain(|r, _| *r == row);
        }

        match self.format {
            OutputFormat::Table => format_as_table(&inventory, &by_row, self.seats)?,
            OutputFormat::Json => format_as_json(&by_row)?,
            OutputFormat::Csv => format_as_csv(&by_row)?,
        }

        Ok(())
    }
}

fn seat_list(seats: &[SeatId]) -> String {
    seats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format availability as a human-readable table.
fn format_as_table(
    inventory: &SeatInventory,
    by_row: &std::collections::BTreeMap<SeatRow, Vec<SeatId>>,
    show_seats: bool,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ROW\tAVAILABLE")?;
    for (row, seats) in by_row {
        if show_seats {
            writeln!(handle, "{row}\t{}\t{}", seats.len(), seat_list(seats))?;
        } else {
            writeln!(handle, "{row}\t{}", seats.len())?;
        }
    }
    writeln!(handle, "TOTAL\t{}", inventory.available_count())?;

    Ok(())
}

/// Format availability as JSON.
fn format_as_json(
    by_row: &std::collections::BTreeMap<SeatRow, Vec<SeatId>>,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let total: usize = by_row.values().map(Vec::len).sum();
    let rows: serde_json::Map<String, serde_json::Value> = by_row
        .iter()
        .map(|(row, seats)| {
            let seats: Vec<String> = seats.iter().map(ToString::to_string).collect();
            (row.to_string(), serde_json::json!(seats))
        })
        .collect();

    let json_data = serde_json::json!({
        "available": total,
        "rows": rows,
    });

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format availability as CSV.
fn format_as_csv(
    by_row: &std::collections::BTreeMap<SeatRow, Vec<SeatId>>,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer
        .write_record(["row", "available", "seats"])
        .map_err(csv_error)?;

    for (row, seats) in by_row {
        writer
            .write_record(&[row.to_string(), seats.len().to_string(), seat_list(seats)])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
