use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn itask(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("itask").unwrap();
    cmd.env("ITASK_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stored(home: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(home.join("todos.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos to display"));
}

#[test]
fn test_add_persists_and_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Buy milk"));

    let todos = stored(temp_dir.path());
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["text"], "Buy milk");
    assert_eq!(todos[0]["isCompleted"], false);
    assert!(todos[0]["id"].is_string());

    itask(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Buy milk"));
}

#[test]
fn test_short_add_is_rejected_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("longer than 3 characters"));

    assert!(!temp_dir.path().join("todos.json").exists());
}

#[test]
fn test_toggle_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    itask(home).args(["add", "Task A"]).assert().success();
    itask(home).args(["add", "Task B"]).assert().success();

    itask(home)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed (1): Task A"));

    let todos = stored(home);
    assert_eq!(todos[0]["isCompleted"], true);
    assert_eq!(todos[1]["isCompleted"], false);

    itask(home)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted (1): Task A"));

    let todos = stored(home);
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["text"], "Task B");
}

#[test]
fn test_edit_moves_to_end_with_new_id() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    itask(home).args(["add", "Task1"]).assert().success();
    itask(home).args(["add", "Task2"]).assert().success();
    let old_id = stored(home)[0]["id"].clone();

    itask(home)
        .args(["edit", "1", "Task1", "revised"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated (1): Task1 revised"));

    let todos = stored(home);
    assert_eq!(todos[0]["text"], "Task2");
    assert_eq!(todos[1]["text"], "Task1 revised");
    assert_ne!(todos[1]["id"], old_id);
}

#[test]
fn test_bad_index_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["delete", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 3 not found"));
}

#[test]
fn test_edit_keeps_short_legacy_item() {
    let temp_dir = tempfile::tempdir().unwrap();
    let legacy = r#"[{"id":"x","todo":"ab","isCompleted":false}]"#;
    std::fs::write(temp_dir.path().join("todos.json"), legacy).unwrap();

    itask(temp_dir.path())
        .args(["edit", "1", "no"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot edit (1)"));

    let raw = std::fs::read_to_string(temp_dir.path().join("todos.json")).unwrap();
    assert_eq!(raw, legacy);
}

#[test]
fn test_corrupt_storage_reads_as_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("todos.json"), "not json").unwrap();

    itask(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos to display"));
}

#[test]
fn test_config_storage_key() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    itask(home)
        .args(["config", "storage-key", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = work"));

    itask(home).args(["add", "Ship release"]).assert().success();
    assert!(home.join("work.json").exists());
    assert!(!home.join("todos.json").exists());

    itask(home)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("work.json"));
}

#[test]
fn test_unknown_config_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["config", "file-ext"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = tempfile::tempdir().unwrap();
    let flag_dir = tempfile::tempdir().unwrap();

    itask(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["add", "Flag wins"])
        .assert()
        .success();

    assert!(flag_dir.path().join("todos.json").exists());
    assert!(!env_dir.path().join("todos.json").exists());
}
