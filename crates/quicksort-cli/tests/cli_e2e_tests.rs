//! CLI end-to-end tests that invoke the compiled `quicksort` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use quicksort_test_utils::dir::TestConfigDir;
use quicksort_test_utils::document::{ChestEntry, config_document};
use quicksort_test_utils::fixtures::fixture_path;

/// `quicksort` with its config directory pointed at `dir`.
fn quicksort(dir: &TestConfigDir) -> Command {
    let mut cmd = Command::cargo_bin("quicksort").unwrap();
    cmd.env_remove("QUICKSORT_CONFIG_DIR")
        .arg("--config-dir")
        .arg(dir.root());
    cmd
}

#[test]
fn test_help_exits_zero() {
    let dir = TestConfigDir::new();
    quicksort(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_init_writes_default_then_skips() {
    let dir = TestConfigDir::new();

    quicksort(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    dir.assert_file_contains("quicksort.json5", "quicksortChests");

    dir.write("quicksort.json5", "{}");
    quicksort(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(dir.read("quicksort.json5"), "{}");

    quicksort(&dir).args(["init", "--force"]).assert().success();
    dir.assert_file_contains("quicksort.json5", "quicksortChests");
}

#[test]
fn test_check_bootstraps_missing_config() {
    let dir = TestConfigDir::new();

    quicksort(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 chest profile(s)"));
    dir.assert_file_exists("quicksort.json5");
}

#[test]
fn test_check_reports_bad_document_with_path() {
    let dir = TestConfigDir::new();
    let broken = dir.write(
        "broken.json5",
        config_document(vec![ChestEntry::empty().with("range", "far".into())], None),
    );

    quicksort(&dir)
        .arg("check")
        .arg(&broken)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("broken.json5"));
}

#[test]
fn test_check_invalid_log_level_fails() {
    let dir = TestConfigDir::new();
    quicksort(&dir)
        .arg("check")
        .arg(fixture_path("invalid-log-level.json5"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid logLevel VERBOSE_XYZ"));
}

#[test]
fn test_show_json_is_parseable() {
    let dir = TestConfigDir::new();
    let output = quicksort(&dir)
        .arg("show")
        .arg(fixture_path("cascade.json5"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = json["chestProfiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[2]["baseBlockId"], "minecraft:iron_block");
    assert_eq!(profiles[2]["range"], 4);
    assert_eq!(json["logSeverity"], "DEBUG");
}

#[test]
fn test_show_human_lists_profiles() {
    let dir = TestConfigDir::new();
    quicksort(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("minecraft:diamond_block"))
        .stdout(predicate::str::contains("minecraft:gold_block"))
        .stdout(predicate::str::contains("minecraft:*_wool"));
}

#[test]
fn test_classify_tokens() {
    let dir = TestConfigDir::new();
    quicksort(&dir)
        .args(["classify", "minecraft:stick", "minecraft:*wool", "wool_items"])
        .assert()
        .success()
        .stdout(predicate::str::contains("item-wildcard"))
        .stdout(predicate::str::contains("#minecraft:wool_items"));
}

#[test]
fn test_classify_malformed_token_fails() {
    let dir = TestConfigDir::new();
    quicksort(&dir)
        .args(["classify", "minecraft:"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("malformed"));
}

#[test]
fn test_default_prints_bundled_document() {
    let dir = TestConfigDir::new();
    quicksort(&dir)
        .arg("default")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"logLevel\": \"INFO\""));
}
