//! End-to-end tests driving the `ssa` binary.
//!
//! Tests the editor flow: typed times -> prepared records -> public agenda.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn ssa_binary() -> String {
    env!("CARGO_BIN_EXE_ssa").to_string()
}

/// Runs `ssa` with an isolated home directory, feeding `stdin`.
fn run_ssa(home: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(ssa_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("SSA_AGENDA_DAYS")
        .env_remove("SSA_KEYWORD")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ssa");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for ssa")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "ssa should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_normalize_command() {
    let temp = TempDir::new().unwrap();

    let output = run_ssa(temp.path(), &["normalize", "2:30 PM"], "");
    assert_eq!(stdout_of(&output), "14:30\n");

    let output = run_ssa(temp.path(), &["normalize", "7", "--end"], "");
    assert_eq!(stdout_of(&output), "19:00\n");

    let output = run_ssa(
        temp.path(),
        &["normalize", "11", "--end", "--start", "09:00"],
        "",
    );
    assert_eq!(stdout_of(&output), "11:00\n");
}

#[test]
fn test_normalize_rejects_unrecognized_input() {
    let temp = TempDir::new().unwrap();
    let output = run_ssa(temp.path(), &["normalize", "invalid"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unrecognized time: invalid"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_display_command() {
    let temp = TempDir::new().unwrap();

    let output = run_ssa(temp.path(), &["display", "00:30"], "");
    assert_eq!(stdout_of(&output), "12:30 AM\n");

    let output = run_ssa(temp.path(), &["display"], "");
    assert_eq!(stdout_of(&output), "—\n");
}

/// Forms prepared by `ssa prepare` feed straight into `ssa agenda`.
#[test]
fn test_prepare_then_agenda() {
    let temp = TempDir::new().unwrap();
    let forms = concat!(
        r#"{"id":"a","title":"Harbor cleanup","date":"2025-06-14","start_time":"9a","end_time":"11","status":"published"}"#,
        "\n",
        r#"{"id":"b","title":"Night market","date":"2025-06-14","start_time":"6:30 PM","end_time":"10","status":"published"}"#,
        "\n",
        r#"{"id":"c","title":"Draft picnic","date":"2025-06-14","start_time":"12"}"#,
        "\n",
    );

    let prepared = stdout_of(&run_ssa(temp.path(), &["prepare"], forms));
    assert_eq!(prepared.lines().count(), 3);

    let output = run_ssa(
        temp.path(),
        &["agenda", "--from", "2025-06-14", "--to", "2025-06-14"],
        &prepared,
    );
    assert_eq!(
        stdout_of(&output),
        concat!(
            "Saturday, June 14, 2025\n",
            "  9:00 AM - 11:00 AM    Harbor cleanup\n",
            "  6:30 PM - 10:00 PM    Night market\n",
        )
    );
}

#[test]
fn test_agenda_reads_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("ssa.toml");
    std::fs::write(&config_path, "agenda_days = 1\nkeyword = \"market\"\n").unwrap();

    let records = concat!(
        r#"{"id":"a","title":"Flea market","date":"2025-06-15","status":"published"}"#,
        "\n",
        r#"{"id":"b","title":"Farmers market","date":"2025-06-20","status":"published"}"#,
        "\n",
        r#"{"id":"c","title":"Book club","date":"2025-06-15","status":"published"}"#,
        "\n",
    );

    let output = run_ssa(
        temp.path(),
        &[
            "--config",
            config_path.to_str().unwrap(),
            "agenda",
            "--from",
            "2025-06-14",
        ],
        records,
    );
    assert_eq!(
        stdout_of(&output),
        "Sunday, June 15, 2025\n  —                     Flea market\n"
    );
}

#[test]
fn test_agenda_rejects_inverted_range() {
    let temp = TempDir::new().unwrap();
    let output = run_ssa(
        temp.path(),
        &["agenda", "--from", "2025-06-14", "--to", "2025-06-01"],
        "",
    );
    assert!(!output.status.success());
}
