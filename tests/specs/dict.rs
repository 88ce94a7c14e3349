//! Specs for `wordaudit dict`.

use crate::prelude::*;

#[test]
fn prints_dictionary_statistics() {
    let temp = default_project();
    temp.dictionary("he\nshe\nhis\nhers\n");
    dict()
        .pwd(temp.path())
        .passes()
        .stdout_has("patterns: 4\n")
        .stdout_has("states: 10\n")
        .stdout_has("lines: 4 (blank: 0, duplicates: 0)\n");
}

#[test]
fn counts_blank_and_duplicate_lines() {
    let temp = default_project();
    temp.dictionary("he\r\n\r\nhe\nshe\n\n");
    dict()
        .pwd(temp.path())
        .passes()
        .stdout_has("patterns: 2\n")
        .stdout_has("lines: 5 (blank: 2, duplicates: 1)\n");
}

#[test]
fn names_the_dictionary_file() {
    let temp = default_project();
    let path = fixture("sensitive_words.txt");
    dict()
        .pwd(temp.path())
        .args(&["-d", path.to_str().unwrap()])
        .passes()
        .stdout_has(format!("dictionary: {}\n", path.display()).as_str())
        .stdout_has("patterns: 5\n");
}

#[test]
fn invalid_utf8_is_rejected_with_line() {
    let temp = default_project();
    temp.file("sensitive_words.txt", b"good\n\xff\xfe\n".as_slice());
    dict()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("sensitive_words.txt:2: invalid UTF-8");
}

#[test]
fn empty_dictionary_is_rejected() {
    let temp = default_project();
    temp.dictionary("");
    dict().pwd(temp.path()).exits(2).stderr_has("no patterns");
}
