//! Specs for `wordaudit scan`.

use crate::prelude::*;

#[test]
fn reports_overlapping_and_nested_matches() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["ahishers"])
        .matches()
        .stdout_eq(
            "ahishers\n  [1, 4) his\n  [3, 6) she\n  [4, 6) he\n  [4, 8) hers\n\
             1 of 1 text matched (4 matches)\n",
        );
}

#[test]
fn clean_text_exits_zero() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["nothing to see"])
        .passes()
        .stdout_eq("clean: 1 text scanned\n");
}

#[test]
fn spans_are_code_points() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["这是敏感词"])
        .matches()
        .stdout_has("  [2, 4) 敏感\n  [2, 5) 敏感词\n");
}

#[test]
fn only_matching_texts_are_listed() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["clean", "she", "also clean"])
        .matches()
        .stdout_lacks("also clean")
        .stdout_has("1 of 3 texts matched (2 matches)");
}

#[test]
fn reads_stdin_lines_without_arguments() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .stdin("first line\r\nhis\n")
        .matches()
        .stdout_has("his\n  [0, 3) his\n")
        .stdout_has("1 of 2 texts matched");
}

#[test]
fn empty_stdin_scans_nothing() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .stdin("")
        .passes()
        .stdout_eq("clean: 0 texts scanned\n");
}

#[test]
fn json_output_lists_spans() {
    let temp = default_project();
    let json = scan()
        .json()
        .pwd(temp.path())
        .args(&["ushers", "clean"])
        .matches();

    assert_eq!(json.value()["matched"], serde_json::json!(true));
    assert_eq!(json.keywords(0), vec!["she", "he", "hers"]);
    assert_eq!(json.spans(0), vec![(1, 4), (2, 4), (2, 6)]);
    assert!(json.keywords(1).is_empty());
    assert_eq!(
        json.value()["summary"],
        serde_json::json!({"texts": 2, "matched": 1, "matches": 3})
    );
}

#[test]
fn json_output_without_matches_exits_zero() {
    let temp = default_project();
    let json = scan().json().pwd(temp.path()).args(&["hello"]).passes();
    assert_eq!(json.value()["matched"], serde_json::json!(false));
}

#[test]
fn dict_flag_overrides_config() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["--dict", fixture("sensitive_words.txt").to_str().unwrap()])
        .args(&["a forbidden word"])
        .matches()
        .stdout_has("[2, 11) forbidden");
}

#[test]
fn text_over_limit_is_rejected() {
    let temp = default_project();
    temp.config("[scan]\nmax_text_chars = 4\n");
    scan()
        .pwd(temp.path())
        .args(&["ok", "longer than four"])
        .exits(2)
        .stderr_has("text too long");
}

#[test]
fn text_at_limit_is_accepted() {
    let temp = default_project();
    temp.config("[scan]\nmax_text_chars = 3\n");
    scan().pwd(temp.path()).args(&["敏感词"]).matches();
}

// =============================================================================
// DICTIONARY ERRORS
// =============================================================================

#[test]
fn missing_dictionary_prevents_scan() {
    let temp = Project::empty();
    temp.config("");
    scan()
        .pwd(temp.path())
        .args(&["text"])
        .exits(3)
        .stderr_has("sensitive_words.txt");
}

#[test]
fn blank_dictionary_is_rejected() {
    let temp = default_project();
    temp.dictionary("\n\r\n\n");
    scan()
        .pwd(temp.path())
        .args(&["text"])
        .exits(2)
        .stderr_has("no patterns");
}

#[test]
fn blank_lines_in_dictionary_are_ignored() {
    let temp = default_project();
    temp.dictionary("\nhe\n\n");
    scan()
        .pwd(temp.path())
        .args(&["the end"])
        .matches()
        .stdout_has("[1, 3) he");
}

// =============================================================================
// COLOR
// =============================================================================

#[test]
fn piped_output_has_no_color() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["she"])
        .matches()
        .stdout_lacks("\x1b[");
}

#[test]
fn color_flag_forces_color() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .args(&["--color", "she"])
        .matches()
        .stdout_has("\x1b[");
}

#[test]
fn color_env_forces_color() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .env("COLOR", "1")
        .args(&["she"])
        .matches()
        .stdout_has("\x1b[");
}

#[test]
fn no_color_env_wins_over_color_env() {
    let temp = default_project();
    scan()
        .pwd(temp.path())
        .env("COLOR", "1")
        .env("NO_COLOR", "")
        .args(&["she"])
        .matches()
        .stdout_lacks("\x1b[");
}
