/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{SessionsDirBuilder, TranscriptBuilder, real_project, visible};
use predicates::prelude::*;

fn cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_claude-sessions"));
    cmd.env("HOME", home).env_remove("CLAUDE_SESSIONS_DIR").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_list_from_env_dir() {
    let home = tempfile::TempDir::new().unwrap();
    let (real, encoded) = real_project(home.path(), "work/site");
    let sessions = SessionsDirBuilder::new()
        .with_project(
            &encoded,
            &[
                TranscriptBuilder::new("old-session").user("older work").age_secs(3 * 86_400),
                TranscriptBuilder::new("new-session").user("newer work").age_secs(120),
            ],
        )
        .build();

    let output = cmd(home.path())
        .env("CLAUDE_SESSIONS_DIR", sessions.path())
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(visible(lines[0]).contains("~/work/site"));
    assert!(!lines[0].contains('\t'));

    let newer: Vec<&str> = lines[1].split('\t').collect();
    let older: Vec<&str> = lines[2].split('\t').collect();
    assert_eq!(newer.len(), 3);
    assert_eq!(newer[1], real.to_string_lossy());
    assert_eq!(newer[2], "new-session");
    assert_eq!(older[2], "old-session");
    assert!(visible(older[0]).contains("[ 3d]"));
}

#[test]
fn test_cli_list_with_sessions_dir_flag() {
    let home = tempfile::TempDir::new().unwrap();
    let sessions = SessionsDirBuilder::new()
        .with_project("-no-such-root-dir", &[TranscriptBuilder::new("s1").user("hi")])
        .build();

    cmd(home.path())
        .arg("list")
        .arg("--sessions-dir")
        .arg(sessions.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(unknown)"))
        .stdout(predicate::str::contains(format!("\t{}\ts1", home.path().display())));
}

#[test]
fn test_cli_list_default_dir_under_home() {
    let home = tempfile::TempDir::new().unwrap();
    let projects = home.path().join(".claude").join("projects");
    std::fs::create_dir_all(projects.join("-nowhere-x")).unwrap();
    TranscriptBuilder::new("default-session").user("from default").create_in(&projects.join("-nowhere-x"));

    cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-session"))
        .stdout(predicate::str::contains("from default"));
}

#[test]
fn test_cli_list_missing_root_fails() {
    let home = tempfile::TempDir::new().unwrap();

    cmd(home.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No claude projects directory found"));
}

#[test]
fn test_cli_list_verbose_summary() {
    let home = tempfile::TempDir::new().unwrap();
    let sessions = SessionsDirBuilder::new()
        .with_project("-nowhere-a", &[TranscriptBuilder::new("s1").user("hi")])
        .build();

    cmd(home.path())
        .env("CLAUDE_SESSIONS_DIR", sessions.path())
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Indexed 1 sessions across 1 projects"));
}

#[test]
fn test_cli_preview_renders_conversation() {
    let home = tempfile::TempDir::new().unwrap();
    let (real, encoded) = real_project(home.path(), "proj");
    let sessions = SessionsDirBuilder::new()
        .with_project(
            &encoded,
            &[TranscriptBuilder::new("0123456789abcdef")
                .user("How do I wrap text?")
                .assistant("Split on whitespace and fill greedily.")],
        )
        .build();

    cmd(home.path())
        .env("CLAUDE_SESSIONS_DIR", sessions.path())
        .arg("preview")
        .arg(&real)
        .arg("0123456789abcdef")
        .assert()
        .success()
        .stdout(predicate::str::contains("~/proj"))
        .stdout(predicate::str::contains("01234567…"))
        .stdout(predicate::str::contains("you"))
        .stdout(predicate::str::contains("How do I wrap text?"))
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("Split on whitespace and fill greedily."));
}

#[test]
fn test_cli_preview_session_not_found() {
    let home = tempfile::TempDir::new().unwrap();
    let sessions = SessionsDirBuilder::new()
        .with_project("-nowhere-a", &[TranscriptBuilder::new("present").user("hi")])
        .build();

    let output = cmd(home.path())
        .env("CLAUDE_SESSIONS_DIR", sessions.path())
        .args(["preview", "/nowhere/a", "missing-id"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = visible(&String::from_utf8(output.stdout).unwrap());
    assert_eq!(stdout, "Session file not found: missing-id\n");
}

#[test]
fn test_cli_preview_without_arguments() {
    let home = tempfile::TempDir::new().unwrap();

    cmd(home.path())
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::diff("No session selected.\n"));

    cmd(home.path())
        .args(["preview", "/only/a/path"])
        .assert()
        .success()
        .stdout(predicate::str::diff("No session selected.\n"));
}

#[test]
fn test_cli_preview_ignores_extra_arguments() {
    let home = tempfile::TempDir::new().unwrap();
    let sessions = SessionsDirBuilder::new()
        .with_project("-nowhere-a", &[TranscriptBuilder::new("sid").user("hello there")])
        .build();

    cmd(home.path())
        .env("CLAUDE_SESSIONS_DIR", sessions.path())
        .args(["preview", "/nowhere/a", "sid", "extra", "--more"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("hello there"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let home = tempfile::TempDir::new().unwrap();
    cmd(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let home = tempfile::TempDir::new().unwrap();
    cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("List and preview Claude session transcripts"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_cli_version_flag() {
    let home = tempfile::TempDir::new().unwrap();
    cmd(home.path()).arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let home = tempfile::TempDir::new().unwrap();
    cmd(home.path()).arg("invalid-command").assert().failure();
}
