//! Integration tests for the mozdef-event CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Helper to run mozdef-event in `cwd` and return (stdout, stderr, exit_code).
fn run_in(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_mozdef-event"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to run mozdef-event");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Helper to write a config file into a temp dir.
fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_in(dir.path(), &["version"]);

    assert_eq!(exit_code, 0);
    assert!(
        stdout.starts_with("mozdef-event "),
        "Unexpected version output: {}",
        stdout
    );
}

#[test]
fn test_check_prints_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "mozdef.cfg",
        "[mozdef]\nmozdef_url = https://mozdef.example.com/events\nsend_to_syslog = True\n",
    );
    let (stdout, stderr, exit_code) =
        run_in(dir.path(), &["check", "--config", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "check failed: {}", stderr);
    assert!(stdout.contains(&format!("config_file = {}", path.display())));
    assert!(stdout.contains("mozdef_url = https://mozdef.example.com/events"));
    assert!(stdout.contains("send_events = true"));
    assert!(stdout.contains("send_to_syslog = true"));
    assert!(stdout.contains("syslog_only = false"));
    assert!(stderr.contains("Configuration is valid."));
}

#[test]
fn test_check_quiet() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "mozdef.cfg", "[mozdef]\nmozdef_url = foo\n");
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["-q", "check", "-c", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(!stderr.contains("Configuration is valid."));
}

#[test]
fn test_check_missing_url_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "mozdef.cfg", "[mozdef]\nsend_events = True\n");
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["check", "--config", path.to_str().unwrap()]);

    assert_ne!(exit_code, 0, "Missing URL should fail");
    assert!(stderr.contains("mozdef_url"), "stderr: {}", stderr);
}

#[test]
fn test_check_without_any_config_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.conf");
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["check", "--config", missing.to_str().unwrap()]);

    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("No usable configuration file found"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_check_reports_parse_error_of_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "context.py", "import os\nimport sys\n");
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["check", "--config", path.to_str().unwrap()]);

    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("Failed to load config file"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("no section headers"), "stderr: {}", stderr);
    assert!(!stderr.contains("No usable configuration file found"));
}

#[test]
fn test_send_reports_parse_error_of_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "mozdef.cfg", "[mozdef]\nmozdef_url = a\nmozdef_url = b\n");
    let (_stdout, stderr, exit_code) = run_in(
        dir.path(),
        &["send", "-c", path.to_str().unwrap(), "--summary", "x"],
    );

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
}

#[test]
fn test_check_search_order() {
    let dir = TempDir::new().unwrap();
    let first = write_config(&dir, "first.conf", "[mozdef]\nmozdef_url = first\n");
    let second = write_config(&dir, "second.conf", "[mozdef]\nmozdef_url = second\n");
    let (stdout, _stderr, exit_code) = run_in(
        dir.path(),
        &[
            "check",
            "-c",
            first.to_str().unwrap(),
            "-c",
            second.to_str().unwrap(),
        ],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("mozdef_url = first"));
    assert!(!stdout.contains("mozdef_url = second"));
}

#[test]
fn test_check_uses_project_local_file() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "mozdef_client_config.conf",
        "[mozdef]\nmozdef_url = https://local.example.com/\n",
    );
    let (stdout, stderr, exit_code) = run_in(dir.path(), &["check"]);

    assert_eq!(exit_code, 0, "check failed: {}", stderr);
    assert!(stdout.contains("config_file = mozdef_client_config.conf"));
    assert!(stdout.contains("mozdef_url = https://local.example.com/"));
}

#[test]
fn test_check_invalid_boolean_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "mozdef.cfg",
        "[mozdef]\nmozdef_url = foo\nsyslog_only = maybe\n",
    );
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["check", "--config", path.to_str().unwrap()]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("syslog_only"), "stderr: {}", stderr);
}

#[test]
fn test_send_is_noop_when_disabled() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "mozdef.cfg", "[mozdef]\nsend_events = False\n");
    let (stdout, stderr, exit_code) = run_in(
        dir.path(),
        &[
            "send",
            "--config",
            path.to_str().unwrap(),
            "--summary",
            "a test message",
            "--category",
            "Authentication",
            "--tag",
            "test-tag1",
            "--detail",
            "alert=false",
        ],
    );

    assert_eq!(exit_code, 0, "Disabled send should succeed: {}", stderr);
    assert!(stdout.is_empty());
    assert!(stderr.contains("send_events is off"));
}

#[test]
fn test_send_without_url_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "mozdef.cfg", "[aa]\nbb = cc\n");
    let (_stdout, stderr, exit_code) = run_in(
        dir.path(),
        &["send", "-c", path.to_str().unwrap(), "--summary", "x"],
    );

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to configure MozDef event"));
}

#[test]
fn test_send_rejects_malformed_detail() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "mozdef.cfg", "[mozdef]\nsend_events = off\n");
    let (_stdout, stderr, exit_code) = run_in(
        dir.path(),
        &[
            "send",
            "-c",
            path.to_str().unwrap(),
            "--summary",
            "x",
            "--detail",
            "novalue",
        ],
    );

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("expected KEY=VALUE"));
}

#[test]
fn test_init_writes_valid_config() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["init", "--url", "https://mozdef.internal/events"]);

    assert_eq!(exit_code, 0, "init failed: {}", stderr);
    let path = dir.path().join("mozdef_client_config.conf");
    assert!(path.exists());
    assert!(stderr.contains("Configuration file created at"));

    let (stdout, _stderr, exit_code) = run_in(dir.path(), &["check"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("mozdef_url = https://mozdef.internal/events"));
}

#[test]
fn test_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "custom.conf", "[mozdef]\nmozdef_url = keep\n");
    let (_stdout, stderr, exit_code) =
        run_in(dir.path(), &["init", "--path", path.to_str().unwrap()]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("already exists"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[mozdef]\nmozdef_url = keep\n"
    );

    let (_stdout, _stderr, exit_code) = run_in(
        dir.path(),
        &["init", "--path", path.to_str().unwrap(), "--force"],
    );
    assert_eq!(exit_code, 0);
    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("https://mozdef.example.com/events"));
}
