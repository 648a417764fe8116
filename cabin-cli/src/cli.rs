//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AvailabilityCommand, BookCommand, BookingsCommand, CompletionsCommand, InitCommand,
    ReleaseCommand, StatusCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing cabin seat bookings.
#[derive(Parser)]
#[command(name = "cabin")]
#[command(version, about = "Manage cabin seat bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "CABIN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "CABIN_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "CABIN_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and seat database
    Init(InitCommand),

    /// Reserve one or more seats for a customer
    Book(BookCommand),

    /// Return a reserved seat to the free pool
    Release(ReleaseCommand),

    /// Show free seats grouped by row
    Availability(AvailabilityCommand),

    /// Look up a seat or find a customer's seats
    Status(StatusCommand),

    /// Show the booking history
    Bookings(BookingsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
