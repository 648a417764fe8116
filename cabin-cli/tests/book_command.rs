//! Integration tests for the `book` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn book_single_seat_prints_reference() {
    let env = TestEnv::new();

    let reference = env.book_simple("1A", "Alice Smith", "P123456");

    assert_eq!(reference.len(), 8);
    assert!(reference
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn book_multiple_seats_prints_one_line_per_seat() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("book")
        .arg("--seat")
        .arg("1A")
        .arg("--seat")
        .arg("1B")
        .arg("--name")
        .arg("Alice Smith")
        .arg("--passport")
        .arg("P123456")
        .output()
        .expect("Failed to run book command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1A\t"));
    assert!(lines[1].starts_with("1B\t"));
}

#[test]
fn booking_a_taken_seat_fails() {
    let env = TestEnv::new();
    env.book_simple("5C", "Alice Smith", "P123456");

    env.command()
        .arg("book")
        .arg("--seat")
        .arg("5C")
        .arg("--name")
        .arg("Bob Jones")
        .arg("--passport")
        .arg("Q654321")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already reserved"));
}

#[test]
fn partial_failure_still_succeeds() {
    let env = TestEnv::new();
    env.book_simple("2B", "Alice Smith", "P123456");

    // One seat is taken, the other is free; the command books what it can
    env.command()
        .arg("book")
        .arg("--seat")
        .arg("2B")
        .arg("--seat")
        .arg("2C")
        .arg("--name")
        .arg("Bob Jones")
        .arg("--passport")
        .arg("Q654321")
        .assert()
        .success()
        .stdout(predicate::str::contains("2C\t"))
        .stderr(predicate::str::contains("2B"));
}

#[test]
fn unknown_seat_fails_with_semantic_exit_code() {
    let env = TestEnv::new();

    env.command()
        .arg("book")
        .arg("--seat")
        .arg("999Z")
        .arg("--name")
        .arg("Alice Smith")
        .arg("--passport")
        .arg("P123456")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn seat_text_is_case_insensitive() {
    let env = TestEnv::new();

    env.book_simple("12f", "Alice Smith", "P123456");

    // The same seat, differently spelled, is now taken
    env.command()
        .arg("book")
        .arg("--seat")
        .arg("12F")
        .arg("--name")
        .arg("Bob Jones")
        .arg("--passport")
        .arg("Q654321")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn empty_customer_name_is_an_argument_error() {
    let env = TestEnv::new();

    env.command()
        .arg("book")
        .arg("--seat")
        .arg("1A")
        .arg("--name")
        .arg("   ")
        .arg("--passport")
        .arg("P123456")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn dry_run_makes_no_booking() {
    let env = TestEnv::new();

    env.command()
        .arg("book")
        .arg("--seat")
        .arg("1A")
        .arg("--name")
        .arg("Alice Smith")
        .arg("--passport")
        .arg("P123456")
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"));

    // The seat is still free afterwards
    env.book_simple("1A", "Alice Smith", "P123456");
}

#[test]
fn two_bookings_get_distinct_references() {
    let env = TestEnv::new();

    let first = env.book_simple("1A", "Alice Smith", "P123456");
    let second = env.book_simple("1B", "Alice Smith", "P123456");

    assert_ne!(first, second);
}
