use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn filenav() -> Command {
    let mut cmd = Command::cargo_bin("filenav").unwrap();
    cmd.env_remove("FILENAV_DEBUG_LOG");
    cmd.env_remove("FILENAV_CONFIG");
    cmd
}

#[test]
fn test_help() {
    filenav()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--replay"));
}

#[test]
fn test_replay_scenario() {
    filenav()
        .args(["--replay", "ArrowDown,ArrowDown,ArrowDown,ArrowDown", "A", "B", "C"])
        .assert()
        .success()
        .stdout("selected 0 A\nselected 1 B\nselected 2 C\nselected 2 C\n");
}

#[test]
fn test_replay_escape_and_ignored_keys() {
    filenav()
        .args(["--replay", "ArrowDown,Enter,Escape", "one", "two"])
        .assert()
        .success()
        .stdout("selected 0 one\ncleared\n");
}

#[test]
fn test_replay_without_items() {
    filenav()
        .args(["--replay", "ArrowDown"])
        .assert()
        .success()
        .stdout("cleared\n");
}

#[test]
fn test_explicit_config_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "tick_rate_ms = 33\n").unwrap();

    filenav()
        .args(["--config", path.to_str().unwrap(), "--replay", "ArrowDown", "x"])
        .assert()
        .success()
        .stdout("selected 0 x\n");
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "tick_rate_ms = [").unwrap();

    filenav()
        .args(["--config", path.to_str().unwrap(), "--replay", "ArrowDown", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
