use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const SETTINGS: &str = "\
page WIDGET
  layout VBOX
    title LABEL(Settings)
    buttons HBOX
      <>
      ok BUTTON(OK)
";

#[test]
fn build_prints_the_hierarchy() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.tl");
    fs::write(&file, SETTINGS).unwrap();

    cargo_bin_cmd!("trellis")
        .arg("build")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("page.layout.buttons.ok")
                .and(predicate::str::contains("QPushButton")),
        );
}

#[test]
fn check_fails_on_a_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.tl");
    let bad = dir.path().join("bad.tl");
    fs::write(&good, SETTINGS).unwrap();
    fs::write(&bad, "a WIDGET\n    b VBOX\n").unwrap();

    cargo_bin_cmd!("trellis")
        .arg("check")
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("ok     ")
                .and(predicate::str::contains("(Line number: 2, from"))
                .and(predicate::str::contains("This line: b VBOX")),
        );
}

#[test]
fn check_reports_a_missing_file_and_goes_on() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.tl");
    let good = dir.path().join("good.tl");
    fs::write(&good, SETTINGS).unwrap();

    cargo_bin_cmd!("trellis")
        .arg("check")
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("error  ")
                .and(predicate::str::contains("Failed to read"))
                .and(predicate::str::contains("ok     ")),
        );
}

#[test]
fn format_refuses_a_zero_gutter() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.tl");
    fs::write(&file, "page WIDGET\n  layout VBOX\n").unwrap();

    cargo_bin_cmd!("trellis")
        .args(["format", "--write", "--gutter", "0"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--gutter"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "page WIDGET\n  layout VBOX\n");
}

#[test]
fn format_prints_aligned_text() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.tl");
    fs::write(&file, "page WIDGET\n  layout VBOX\n").unwrap();

    cargo_bin_cmd!("trellis")
        .arg("format")
        .arg(&file)
        .assert()
        .success()
        .stdout("page          WIDGET\n  layout      VBOX\n");
    assert_eq!(fs::read_to_string(&file).unwrap(), "page WIDGET\n  layout VBOX\n");
}

#[test]
fn format_write_keeps_a_backup() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.tl");
    let backups = dir.path().join("archive");
    fs::write(&file, "page WIDGET\n  layout VBOX\n").unwrap();

    for _ in 0..2 {
        cargo_bin_cmd!("trellis")
            .args(["format", "--write", "--gutter", "2", "--backup-dir"])
            .arg(&backups)
            .arg(&file)
            .assert()
            .success();
    }

    let text = fs::read_to_string(&file).unwrap();
    assert_eq!(text.matches("# This file has been automatically re-formatted.").count(), 1);
    assert!(text.ends_with("##\npage      WIDGET\n  layout  VBOX\n"));
    assert_eq!(fs::read_dir(&backups).unwrap().count(), 2);
}
