//! Main entry point for the cabin CLI.
//!
//! This is the command-line interface for the cabin seat booking system.
//! It provides commands for managing seat reservations:
//! - `book`: Reserve one or more seats for a customer
//! - `release`: Return a reserved seat to the free pool
//! - `availability`: Show free seats by row
//! - `status`: Look up a seat or a customer
//! - `bookings`: Show the booking history

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = cabin::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Release(cmd) => cmd.execute(&global),
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::Status(cmd) => cmd.execute(&global),
        cli::Command::Bookings(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
