//! shelf theme の統合テスト

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn shelf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home.path());
    cmd
}

#[test]
fn test_theme_defaults_to_dark() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_theme_toggle_persists() {
    let home = TempDir::new().unwrap();
    shelf(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    let content = std::fs::read_to_string(home.path().join("theme.json")).unwrap();
    assert!(content.contains("\"light\""));

    shelf(&home)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"))
        .stdout(predicate::str::contains("(default)").not());
}

#[test]
fn test_theme_set_rejects_unknown_value() {
    let home = TempDir::new().unwrap();
    shelf(&home).args(["theme", "set", "sepia"]).assert().failure();
}
