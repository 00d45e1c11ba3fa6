use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_workspace_from_environment() {
    let dir = TempDir::new().unwrap();
    let workspace = dir.path().join("from-env");

    let mut cmd = cargo_bin_cmd!("nimbus");
    cmd.env("NIMBUS_PATH", &workspace)
        .env_remove("RUST_LOG")
        .args(["size", "2048"])
        .assert()
        .success()
        .stdout("2KiB\n");

    let history = std::fs::read_to_string(workspace.join("history")).unwrap();
    assert_eq!(history, "size 2048\n");
}

#[test]
fn test_explicit_config_dir_beats_environment() {
    let dir = TempDir::new().unwrap();
    let from_env = dir.path().join("env");
    let explicit = dir.path().join("explicit");

    let mut cmd = cargo_bin_cmd!("nimbus");
    cmd.env("NIMBUS_PATH", &from_env)
        .arg("--config-dir")
        .arg(&explicit)
        .args(["to-bytes", "1KiB"])
        .assert()
        .success()
        .stdout("1024\n");

    assert!(explicit.join("history").exists());
    assert!(!from_env.exists());
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = cargo_bin_cmd!("nimbus");
    cmd.arg("launch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_no_color_env_keeps_output_plain() {
    let dir = TempDir::new().unwrap();
    let input = r#"[{"id": 1, "name": "vm"}]"#;

    let mut cmd = cargo_bin_cmd!("nimbus");
    cmd.env("NIMBUS_PATH", dir.path())
        .env("NO_COLOR", "1")
        .arg("show")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("1 vm\n");
}
