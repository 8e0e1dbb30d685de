//! CLI integration tests.
//!
//! Exercises the socialink binary end-to-end with assert_cmd against
//! fixture workbooks in temp directories.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").unwrap();

    worksheet.write_string(0, 0, "Artist").unwrap();
    worksheet.write_string(0, 1, "Artist country").unwrap();

    for (idx, (artist, country)) in [("DJ Isaac", "NL"), ("東京事変", "JP")]
        .iter()
        .enumerate()
    {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, *artist).unwrap();
        worksheet.write_string(row, 1, *country).unwrap();
    }

    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("socialink"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("socialink"));
}

#[test]
fn test_enrich_help() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["enrich", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enrich"));
}

#[test]
fn test_handle_help() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["handle", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleaned handle"));
}

#[test]
fn test_coverage_help() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["coverage", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coverage"));
}

// ═══════════════════════════════════════════════════════════════════════════
// HANDLE COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_handle_known_example() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["handle", "DJ Isaac"])
        .assert()
        .success()
        .stdout(predicate::str::contains("isaac"))
        .stdout(predicate::str::contains("https://www.instagram.com/isaac"));
}

#[test]
fn test_handle_non_latin_name() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["handle", "東京事変"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empty_handle"));
}

#[test]
fn test_handle_requires_a_name() {
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.arg("handle").assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// ENRICH COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_enrich_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    let output = dir.path().join("artists_social.xlsx");
    write_fixture(&input);

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args([
        "enrich",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--verbose",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Enrichment Complete"))
    .stdout(predicate::str::contains("50.0%"));

    assert!(output.exists());
}

#[test]
fn test_enrich_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    let output = dir.path().join("artists_social.xlsx");
    write_fixture(&input);

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args([
        "enrich",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run complete"));

    assert!(!output.exists());
}

#[test]
fn test_enrich_writes_markdown_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    let output = dir.path().join("artists_social.xlsx");
    let report = dir.path().join("coverage.md");
    write_fixture(&input);

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args([
        "enrich",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
    ])
    .assert()
    .success();

    let markdown = std::fs::read_to_string(&report).unwrap();
    assert!(markdown.contains("# Social Links Coverage Report"));
    assert!(markdown.contains("| Total rows | 2 |"));
}

#[test]
fn test_enrich_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.xlsx");

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["enrich", "no_such_file.xlsx", output.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_enrich_with_config_platform_subset() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    let output = dir.path().join("out.xlsx");
    let config = dir.path().join("socialink.yaml");
    write_fixture(&input);
    std::fs::write(&config, "platforms: [instagram]\n").unwrap();

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args([
        "enrich",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--verbose",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Platforms: instagram"));
}

#[test]
fn test_enrich_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    let output = dir.path().join("out.xlsx");
    let config = dir.path().join("socialink.yaml");
    write_fixture(&input);
    std::fs::write(&config, "platforms: [myspace]\n").unwrap();

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args([
        "enrich",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .assert()
    .failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// COVERAGE COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_coverage_on_enriched_workbook() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    let output = dir.path().join("artists_social.xlsx");
    write_fixture(&input);

    Command::cargo_bin("socialink")
        .unwrap()
        .args(["enrich", input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["coverage", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total rows"))
        .stdout(predicate::str::contains("50.0%"));
}

#[test]
fn test_coverage_on_plain_workbook_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("artists.xlsx");
    write_fixture(&input);

    // Not enriched: no Social Links sheet
    let mut cmd = Command::cargo_bin("socialink").unwrap();
    cmd.args(["coverage", input.to_str().unwrap()])
        .assert()
        .failure();
}
