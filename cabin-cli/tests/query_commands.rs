//! Integration tests for the read-only query commands:
//! `availability`, `status`, and `bookings`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_availability_reports_full_cabin() {
    let env = TestEnv::new();

    let output = env.availability();
    assert!(output.contains("ROW\tAVAILABLE"));
    assert!(output.contains("A\t80"));
    assert!(output.contains("F\t80"));
    assert!(output.contains("TOTAL\t480"));
}

#[test]
fn test_availability_drops_after_booking() {
    let env = TestEnv::new();
    env.book_simple("1A", "Alice Smith", "P123456");

    let output = env.availability();
    assert!(output.contains("A\t79"));
    assert!(output.contains("TOTAL\t479"));
}

#[test]
fn test_availability_row_filter() {
    let env = TestEnv::new();
    env.book_simple("1B", "Alice Smith", "P123456");

    let output = env
        .command()
        .arg("availability")
        .arg("--row")
        .arg("B")
        .output()
        .expect("Failed to run availability command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("B\t79"));
    assert!(!stdout.contains("A\t80"));
}

#[test]
fn test_availability_invalid_row_is_usage_error() {
    let env = TestEnv::new();

    env.command()
        .arg("availability")
        .arg("--row")
        .arg("Z")
        .assert()
        .code(4);
}

#[test]
fn test_availability_json_is_parseable() {
    let env = TestEnv::new();
    env.book_simple("1A", "Alice Smith", "P123456");

    let output = env
        .command()
        .arg("availability")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run availability command");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("availability output is not valid JSON");
    assert_eq!(json["available"], 479);
    let row_a = json["rows"]["A"].as_array().expect("row A missing");
    assert_eq!(row_a.len(), 79);
    assert!(!row_a.iter().any(|s| s == "1A"));
}

#[test]
fn test_availability_csv_lists_seats() {
    let env = TestEnv::new();

    let output = env
        .command()
        .arg("availability")
        .arg("--format")
        .arg("csv")
        .output()
        .expect("Failed to run availability command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("row,available,seats"));
    // One record per row plus the header.
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn test_status_of_free_seat() {
    let env = TestEnv::new();
    // Touch the database so the query has something to read.
    env.book_simple("2B", "Alice Smith", "P123456");

    env.command()
        .arg("status")
        .arg("--seat")
        .arg("1A")
        .assert()
        .success()
        .stdout(predicate::eq("1A\tfree\n"));
}

#[test]
fn test_status_of_reserved_seat_shows_reference_and_name() {
    let env = TestEnv::new();
    let reference = env.book_simple("1A", "Alice Smith", "P123456");

    env.command()
        .arg("status")
        .arg("--seat")
        .arg("1A")
        .assert()
        .success()
        .stdout(predicate::eq(format!(
            "1A\treserved\t{reference}\tAlice Smith\n"
        )));
}

#[test]
fn test_status_by_customer_is_case_insensitive() {
    let env = TestEnv::new();
    env.book_simple("1A", "Alice Smith", "P123456");
    env.book_simple("2B", "Alice Smith", "P123456");
    env.book_simple("3C", "Bob Jones", "P654321");

    let output = env
        .command()
        .arg("status")
        .arg("--customer")
        .arg("alice smith")
        .output()
        .expect("Failed to run status command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1A\tAlice Smith\tP123456"));
    assert!(lines[1].starts_with("2B\tAlice Smith\tP123456"));
}

#[test]
fn test_status_by_unknown_customer_is_empty_success() {
    let env = TestEnv::new();
    env.book_simple("1A", "Alice Smith", "P123456");

    env.command()
        .arg("status")
        .arg("--customer")
        .arg("Nobody Here")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_status_requires_exactly_one_selector() {
    let env = TestEnv::new();

    env.command().arg("status").assert().failure();

    env.command()
        .arg("status")
        .arg("--seat")
        .arg("1A")
        .arg("--customer")
        .arg("Alice Smith")
        .assert()
        .failure();
}

#[test]
fn test_bookings_table_lists_history() {
    let env = TestEnv::new();
    let reference = env.book_simple("1A", "Alice Smith", "P123456");

    let output = env
        .command()
        .arg("bookings")
        .output()
        .expect("Failed to run bookings command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("REFERENCE\tSEAT\tCUSTOMER_NAME\tPASSPORT_NUMBER\tCREATED_AT"));
    assert!(stdout.contains(&reference));
    assert!(stdout.contains("1A\tAlice Smith\tP123456"));
}

#[test]
fn test_bookings_survive_release() {
    let env = TestEnv::new();
    let reference = env.book_simple("1A", "Alice Smith", "P123456");
    env.release("1A");

    let output = env
        .command()
        .arg("bookings")
        .output()
        .expect("Failed to run bookings command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains(&reference),
        "history must keep released bookings"
    );
}

#[test]
fn test_bookings_seat_filter() {
    let env = TestEnv::new();
    let kept = env.book_simple("1A", "Alice Smith", "P123456");
    let other = env.book_simple("2B", "Bob Jones", "P654321");

    let output = env
        .command()
        .arg("bookings")
        .arg("--seat")
        .arg("1A")
        .output()
        .expect("Failed to run bookings command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&kept));
    assert!(!stdout.contains(&other));
}

#[test]
fn test_bookings_json_round_trips() {
    let env = TestEnv::new();
    let reference = env.book_simple("1A", "Alice Smith", "P123456");

    let output = env
        .command()
        .arg("bookings")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run bookings command");
    assert!(output.status.success());

    let json: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("bookings output is not valid JSON");
    assert_eq!(json.len(), 1);
    assert_eq!(json[0]["reference"], reference.as_str());
    assert_eq!(json[0]["seat"], "1A");
    assert_eq!(json[0]["customer_name"], "Alice Smith");
}

#[test]
fn test_bookings_csv_has_headers() {
    let env = TestEnv::new();
    env.book_simple("1A", "Alice Smith", "P123456");

    let output = env
        .command()
        .arg("bookings")
        .arg("--format")
        .arg("csv")
        .output()
        .expect("Failed to run bookings command");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("reference,seat,customer_name,passport_number,created_at"));
    assert_eq!(stdout.lines().count(), 2);
}
