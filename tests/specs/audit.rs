//! Specs for `wordaudit audit`.

use std::io::Write;
use std::process::Stdio;
use std::time::{Duration, Instant};

use crate::prelude::*;

#[test]
fn matched_text_is_printed_and_logged() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "bot-1", "--group", "group-9", "--friend", "u-3"])
        .args(&["ushers"])
        .passes()
        .stdout_has("bot: bot-1\n")
        .stdout_has("group: group-9\n")
        .stdout_has("friend: u-3\n")
        .stdout_has("keywords: she, he, hers\n")
        .stdout_has("message: ushers\n");

    let lines = temp.audit_lines("audit_logs");
    assert_eq!(lines.len(), 1);
    let record = &lines[0];
    assert_eq!(record["bot"], "bot-1");
    assert_eq!(record["group"], "group-9");
    assert_eq!(record["friend"], "u-3");
    assert_eq!(record["message"], "ushers");
    assert_eq!(record["keywords"], serde_json::json!(["she", "he", "hers"]));
    assert!(record["time"].as_str().unwrap().contains('T'));
}

#[test]
fn log_lives_under_a_date_directory() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", "his"])
        .passes();

    let days: Vec<String> = std::fs::read_dir(temp.path().join("audit_logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(days.len(), 1);
    let day = &days[0];
    assert_eq!(day.len(), 10, "{day}");
    assert_eq!(&day[4..5], "-");
    assert_eq!(&day[7..8], "-");
    assert!(
        temp.path()
            .join("audit_logs")
            .join(day)
            .join("audit.log")
            .is_file()
    );
}

#[test]
fn clean_text_is_not_logged() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", "nothing here"])
        .passes()
        .stdout_eq("");
    assert!(temp.audit_lines("audit_logs").is_empty());
}

#[test]
fn each_matching_stdin_line_is_one_record() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b"])
        .stdin("she\nclean\n敏感词\n")
        .passes();

    let lines = temp.audit_lines("audit_logs");
    let messages: Vec<&str> = lines
        .iter()
        .map(|l| l["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["she", "敏感词"]);
    assert_eq!(lines[1]["keywords"], serde_json::json!(["敏感", "敏感词"]));
}

#[test]
fn stdin_line_is_logged_before_eof() {
    let temp = default_project();
    let mut child = wordaudit_cmd()
        .args(["audit", "--bot", "b"])
        .current_dir(temp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all("she\n".as_bytes()).unwrap();
    stdin.flush().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    let mut logged = Vec::new();
    while Instant::now() < deadline {
        if temp.path().join("audit_logs").is_dir() {
            logged = temp.audit_lines("audit_logs");
            if !logged.is_empty() {
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    let still_running = child.try_wait().unwrap().is_none();

    drop(stdin);
    let status = child.wait().unwrap();
    assert_eq!(logged.len(), 1, "no record written while stdin was open");
    assert_eq!(logged[0]["message"], "she");
    assert!(still_running, "audit exited before stdin was closed");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn blank_stdin_line_is_skipped_with_warning() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b"])
        .stdin("she\n\nhe\n")
        .passes()
        .stderr_has("skipping stdin line 2: argument error: text must not be empty");

    let messages: Vec<String> = temp
        .audit_lines("audit_logs")
        .iter()
        .map(|l| l["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["she", "he"]);
}

#[test]
fn overlong_stdin_line_is_skipped() {
    let temp = default_project();
    temp.config("[scan]\nmax_text_chars = 4\n");
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b"])
        .stdin("ushers\nhers\n")
        .passes()
        .stderr_has("skipping stdin line 1: argument error: text too long");

    let lines = temp.audit_lines("audit_logs");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["message"], "hers");
}

#[test]
fn audit_color_flag_forces_color() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", "--color", "he"])
        .passes()
        .stdout_has("\x1b[");
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", "--no-color", "he"])
        .passes()
        .stdout_lacks("\x1b[");
}

#[test]
fn audit_dir_flag_overrides_config() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", "--audit-dir", "elsewhere", "he"])
        .passes();
    assert_eq!(temp.audit_lines("elsewhere").len(), 1);
    assert!(!temp.path().join("audit_logs").exists());
}

#[test]
fn configured_audit_dir_is_relative_to_config() {
    let temp = default_project();
    temp.config("[audit]\ndir = \"logs/audit\"\ncompress = false\n");
    temp.file("sub/keep", "");
    audit()
        .pwd(temp.path().join("sub"))
        .args(&["--bot", "b", "hers"])
        .passes();
    assert_eq!(temp.audit_lines("logs/audit").len(), 1);
}

// =============================================================================
// ARGUMENT ERRORS
// =============================================================================

#[test]
fn bot_is_required() {
    let temp = default_project();
    audit().pwd(temp.path()).args(&["he"]).exits(2);
}

#[test]
fn empty_bot_is_rejected() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "", "he"])
        .exits(2)
        .stderr_has("--bot must not be empty");
}

#[test]
fn empty_text_is_rejected() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", ""])
        .exits(2)
        .stderr_has("text must not be empty");
    assert!(!temp.path().join("audit_logs").exists());
}

#[test]
fn one_empty_argument_rejects_all_texts() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b", "she", ""])
        .exits(2)
        .stderr_has("text must not be empty");
    assert!(!temp.path().join("audit_logs").exists());
}

#[test]
fn missing_text_is_rejected() {
    let temp = default_project();
    audit()
        .pwd(temp.path())
        .args(&["--bot", "b"])
        .exits(2)
        .stderr_has("text must not be empty");
}
