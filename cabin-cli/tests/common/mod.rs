//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files
/// - A separate data directory for the cabin database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the cabin data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A temporary directory for test files
    /// - A data directory path (not created yet - cabin will create it)
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("cabin-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Inherited `CABIN_*` environment variables are cleared so tests are
    /// isolated from the developer's environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cabin").expect("Failed to find cabin binary");
        cmd.env_remove("CABIN_DATA_DIR")
            .env_remove("CABIN_BUSY_TIMEOUT")
            .env_remove("CABIN_DISABLE_AUTOINIT")
            .env_remove("CABIN_OUTPUT_FORMAT")
            .env_remove("CABIN_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Book a single seat and return the reference.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print a reference.
    pub fn book_simple(&self, seat: &str, name: &str, passport: &str) -> String {
        let output = self
            .command()
            .arg("book")
            .arg("--seat")
            .arg(seat)
            .arg("--name")
            .arg(name)
            .arg("--passport")
            .arg(passport)
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        let reference = stdout.trim().to_string();
        assert_eq!(reference.len(), 8, "expected a reference, got '{reference}'");
        reference
    }

    /// Release a seat.
    pub fn release(&self, seat: &str) {
        self.command()
            .arg("release")
            .arg("--seat")
            .arg(seat)
            .assert()
            .success();
    }

    /// Show availability and return stdout.
    pub fn availability(&self) -> String {
        let output = self
            .command()
            .arg("availability")
            .output()
            .expect("Failed to run availability command");

        assert!(
            output.status.success(),
            "Availability failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
