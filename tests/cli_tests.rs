//! CLI integration tests

use std::process::Command;

fn local_notifier_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_local-notifier"))
}

#[test]
fn help_output() {
    let output = local_notifier_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("local_notifier"));
    assert!(stdout.contains("--app-name"));
    assert!(stdout.contains("--no-permission-request"));
    assert!(stdout.contains("--config"));
}

#[test]
fn version_output() {
    let output = local_notifier_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("local-notifier"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let output = local_notifier_bin()
        .args(["config", "path", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), path.display().to_string());
}

#[test]
fn config_init_creates_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let output = local_notifier_bin()
        .args(["config", "init", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("channel = \"local_notifier\""));
    assert!(content.contains("request_permission = true"));

    let output = local_notifier_bin()
        .args(["config", "init", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already exists"),
        "Expected error about existing config, got: {}",
        stderr
    );
}

#[test]
fn config_show_merges_cli_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "sound = \"Glass\"\n").unwrap();

    let output = local_notifier_bin()
        .args(["--app-name", "MyApp", "config", "show", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("app_name = \"MyApp\""));
    assert!(stdout.contains("sound = \"Glass\""));
    assert!(stdout.contains("channel = \"local_notifier\""));
}

#[test]
fn config_show_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "app_name = [").unwrap();

    let output = local_notifier_bin()
        .args(["config", "show", "--config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse"), "got: {}", stderr);
}
