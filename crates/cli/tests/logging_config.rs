use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn config(root: &std::path::Path, logging: &str) -> std::path::PathBuf {
    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
templates_dir = "{}"

[logging]
{}
"#,
        root.join("templates").display(),
        logging
    );
    fs::write(&config_path, &config_content).unwrap();
    fs::create_dir_all(root.join("templates")).unwrap();
    config_path
}

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("logs").join("spad.log");

    let config_path =
        config(root, &format!("level = \"debug\"\nfile = \"{}\"", log_file.display()));

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spad"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();

    assert!(log_file.exists(), "Log file should be created");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let config_path = config(dir.path(), "level = \"trace\"");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spad"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();
}

#[test]
fn test_unknown_level_falls_back() {
    let dir = tempdir().unwrap();
    let config_path = config(dir.path(), "level = \"loud\"\nfile_level = \"chatty\"");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spad"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();
}
