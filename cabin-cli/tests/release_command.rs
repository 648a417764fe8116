//! Integration tests for the `release` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_release_booked_seat_succeeds() {
    let env = TestEnv::new();
    env.book_simple("1A", "Alice Smith", "P123456");

    env.command()
        .arg("release")
        .arg("--seat")
        .arg("1A")
        .assert()
        .success()
        .stdout(predicate::str::contains("Released 1A"));
}

#[test]
fn test_release_free_seat_fails() {
    let env = TestEnv::new();

    env.command()
        .arg("release")
        .arg("--seat")
        .arg("1A")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not reserved"));
}

#[test]
fn test_release_unknown_seat_fails() {
    let env = TestEnv::new();

    env.command()
        .arg("release")
        .arg("--seat")
        .arg("81A")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("seat not found"));
}

#[test]
fn test_seat_is_bookable_again_after_release() {
    let env = TestEnv::new();
    let first = env.book_simple("12C", "Alice Smith", "P123456");
    env.release("12C");

    let second = env.book_simple("12C", "Bob Jones", "P654321");
    assert_ne!(first, second, "rebooking must issue a fresh reference");
}

#[test]
fn test_release_accepts_lowercase_seat_ids() {
    let env = TestEnv::new();
    env.book_simple("12F", "Alice Smith", "P123456");

    env.command()
        .arg("release")
        .arg("--seat")
        .arg("12f")
        .assert()
        .success();
}

#[test]
fn test_release_dry_run_keeps_seat_reserved() {
    let env = TestEnv::new();
    env.book_simple("3B", "Alice Smith", "P123456");

    env.command()
        .arg("release")
        .arg("--seat")
        .arg("3B")
        .arg("--dry-run")
        .assert()
        .success();

    // The seat must still be held after a dry run.
    env.command()
        .arg("release")
        .arg("--seat")
        .arg("3B")
        .assert()
        .success();
}

#[test]
fn test_release_quiet_prints_nothing() {
    let env = TestEnv::new();
    env.book_simple("4D", "Alice Smith", "P123456");

    env.command()
        .arg("--quiet")
        .arg("release")
        .arg("--seat")
        .arg("4D")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
