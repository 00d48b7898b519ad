use predicates::prelude::*;
use serial_test::serial;
use std::fs;

use test_helpers::{add_entry, base_daybook_command, journal_in_tempdir};

#[test]
#[serial]
fn test_cli_no_args() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    // A subcommand is required
    base_daybook_command(&journal_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
#[serial]
fn test_cli_add_then_view_all() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    add_entry(
        &journal_path,
        &["2023-04-15", "Went", "running.", "Felt", "great!", "+health", "+morning"],
    );
    assert!(journal_path.exists());

    base_daybook_command(&journal_path)
        .args(["view", "all", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[2023-04-15, 00:00] Went running. Went running. Felt great! +health +morning +health +morning\n",
        ));
}

#[test]
#[serial]
fn test_cli_add_with_time_flag() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    add_entry(&journal_path, &["--time", "14.30", "2023-04-15", "Dentist."]);

    base_daybook_command(&journal_path)
        .args(["view", "2023-04-15", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[2023-04-15, 14:30] Dentist."));
}

#[test]
#[serial]
fn test_cli_all_is_case_insensitive() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["2023-04-15", "Went", "running."]);

    base_daybook_command(&journal_path)
        .args(["view", "ALL", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Went running."));

    base_daybook_command(&journal_path)
        .args(["remove", "All"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 entry"));
}

#[test]
#[serial]
fn test_cli_time_flag_refused_for_month() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    base_daybook_command(&journal_path)
        .args(["add", "--time", "14.30", "2023-04", "Spring", "cleaning."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("specific day"));

    assert!(!journal_path.exists());
}

#[test]
#[serial]
fn test_cli_view_human_output() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["2023-04-15", "Read.", "pages=40", "+books"]);

    base_daybook_command(&journal_path)
        .args(["view", "2023-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: "))
        .stdout(predicate::str::contains("Read."))
        .stdout(predicate::str::contains("pages=40"));
}

#[test]
#[serial]
fn test_cli_view_json_matches_file_schema() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["2023-04-15", "Read.", "pages=40", "+books"]);

    let output = base_daybook_command(&journal_path)
        .args(["view", "all", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&journal_path).unwrap()).unwrap();
    assert_eq!(printed, stored);
    assert_eq!(stored[0]["tags"][0], "books");
    assert_eq!(stored[0]["fields"][0]["key"], "pages");
}

#[test]
#[serial]
fn test_cli_view_range_is_exclusive() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["2023-01-01", "New", "year."]);
    add_entry(&journal_path, &["2023-01-15", "Mid", "month."]);
    add_entry(&journal_path, &["2023-02-01", "February."]);

    base_daybook_command(&journal_path)
        .args(["view", "all", "--from", "2023-01-01", "--to", "2023-02-01", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[2023-01-15, 00:00] Mid month. Mid month.\n"));
}

#[test]
#[serial]
fn test_cli_range_requires_all() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    base_daybook_command(&journal_path)
        .args(["view", "today", "--from", "2023-01-01", "--to", "2023-02-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can only be used with 'all'"));
}

#[test]
#[serial]
fn test_cli_view_invalid_date() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    base_daybook_command(&journal_path)
        .args(["view", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a recognised date"));
}

#[test]
#[serial]
fn test_cli_search() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["Went", "running.", "+health"]);
    add_entry(&journal_path, &["Quiet", "evening.", "mood=calm"]);

    base_daybook_command(&journal_path)
        .args(["search", "--keywords", "running", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Went running."))
        .stdout(predicate::str::contains("Quiet evening.").not());

    base_daybook_command(&journal_path)
        .args(["search", "--fields", "mood", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mood=calm"))
        .stdout(predicate::str::contains("Went running.").not());
}

#[test]
#[serial]
fn test_cli_search_rejects_blank_values() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    base_daybook_command(&journal_path)
        .args(["search", "--tags", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty"));
}

#[test]
#[serial]
fn test_cli_tags_and_fields() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["Ran.", "km=5", "+health", "+morning"]);
    add_entry(&journal_path, &["Swam.", "+health"]);

    base_daybook_command(&journal_path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"health\S* 2").unwrap())
        .stdout(predicate::str::is_match(r"morning\S* 1").unwrap());

    base_daybook_command(&journal_path)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("km"))
        .stdout(predicate::str::contains(" 5"));
}

#[test]
#[serial]
fn test_cli_remove() {
    let (_temp_dir, journal_path) = journal_in_tempdir();
    add_entry(&journal_path, &["2023-04-15", "Keep", "me."]);
    add_entry(&journal_path, &["2022-04-15", "Drop", "me."]);

    base_daybook_command(&journal_path)
        .args(["remove", "2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 entry"));

    base_daybook_command(&journal_path)
        .args(["view", "all", "--plaintext"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me."))
        .stdout(predicate::str::contains("Drop me.").not());

    base_daybook_command(&journal_path)
        .args(["remove", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 entry"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&journal_path).unwrap()).unwrap();
    assert_eq!(stored, serde_json::json!([]));
}

#[test]
#[serial]
fn test_cli_strict_dates() {
    let (_temp_dir, journal_path) = journal_in_tempdir();

    base_daybook_command(&journal_path)
        .env("DAYBOOK_STRICT_DATES", "1")
        .args(["add", "Undated", "thought."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a recognised date"));

    assert!(!journal_path.exists());
}

#[test]
#[serial]
fn test_cli_relative_journal_path() {
    base_daybook_command(std::path::Path::new("relative/journal.json"))
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}
