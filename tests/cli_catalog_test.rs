//! カタログ系コマンドの統合テスト

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const PRODUCTS: &str = r#"[
  {"id": "mug", "title": "Red Mug", "description": "Ceramic", "category": "Kitchen", "affiliateUrl": "https://example.com/mug"},
  {"id": "pen", "title": "Blue Pen", "description": "Smooth <ink>", "category": "Office"},
  {"id": 7, "title": "Plain Box"}
]"#;

/// 一時ディレクトリに products.json を作り、環境を隔離したコマンドを返す
fn setup() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.json");
    std::fs::write(&path, PRODUCTS).unwrap();
    let source = path.to_string_lossy().into_owned();
    (temp_dir, source)
}

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home).env_remove("SHELF_SOURCE");
    cmd
}

#[test]
fn test_list_all() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["list", "--source", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Mug"))
        .stdout(predicate::str::contains("Plain Box"))
        .stdout(predicate::str::contains("3 results shown"));
}

#[test]
fn test_list_query_single_result() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["list", "--source", &source, "--query", "MUG", "--simple"])
        .assert()
        .success()
        .stdout("Red Mug\n");
}

#[test]
fn test_list_category_and_query_no_results() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["list", "--source", &source, "-q", "pen", "-c", "Kitchen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 results shown"));
}

#[test]
fn test_list_numeric_id_is_searchable() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["list", "--source", &source, "-q", "7", "--simple"])
        .assert()
        .success()
        .stdout("Plain Box\n");
}

#[test]
fn test_list_json() {
    let (temp_dir, source) = setup();
    let output = shelf(temp_dir.path())
        .args(["list", "--source", &source, "-c", "Office", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Blue Pen");
}

#[test]
fn test_list_html_escapes() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["list", "--source", &source, "-q", "pen", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smooth &lt;ink&gt;"))
        .stdout(predicate::str::contains("1 result shown"));
}

#[test]
fn test_list_shuffle_hint() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["list", "--source", &source, "--shuffle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 results shown (shuffled)"));
}

#[test]
fn test_list_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");
    shelf(temp_dir.path())
        .args(["list", "--source", &missing.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load products."))
        .stderr(predicate::str::contains("Error: "));
}

#[test]
fn test_source_from_config_file() {
    let (temp_dir, source) = setup();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        format!("source = {:?}\n", source),
    )
    .unwrap();
    shelf(temp_dir.path())
        .args(["list", "--simple", "-c", "Kitchen"])
        .assert()
        .success()
        .stdout("Red Mug\n");
}

#[test]
fn test_categories_json() {
    let (temp_dir, source) = setup();
    let output = shelf(temp_dir.path())
        .args(["categories", "--source", &source, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let values: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["all", "Kitchen", "Office"]);
    assert_eq!(value[0]["label"], "All categories");
}

#[test]
fn test_copy_unknown_id_fails() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["copy", "nope", "--source", &source])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: nope"));
}

#[test]
fn test_copy_product_without_link_is_skipped() {
    let (temp_dir, source) = setup();
    shelf(temp_dir.path())
        .args(["copy", "pen", "--source", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("No link to copy for 'pen'"));
}
