//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the wordaudit crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temp directory with a minimal wordaudit.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wordaudit.toml"), "version = 1\n").unwrap();
    dir
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wordaudit.toml"), config).unwrap();
    dir
}

/// Writes a dictionary file with the given raw content and returns its path.
pub fn write_dictionary(root: &Path, content: &str) -> PathBuf {
    let path = root.join("sensitive_words.txt");
    fs::write(&path, content).unwrap();
    path
}

/// Every `(start, end, text)` occurrence of any pattern, found by checking
/// each pattern at each code-point offset. Sorted, duplicates removed.
pub fn brute_force_matches<S: AsRef<str>>(
    patterns: &[S],
    text: &str,
) -> Vec<(usize, usize, String)> {
    let chars: Vec<char> = text.chars().collect();
    let mut found = Vec::new();
    for pattern in patterns {
        let pattern: Vec<char> = pattern.as_ref().chars().collect();
        if pattern.is_empty() || pattern.len() > chars.len() {
            continue;
        }
        for start in 0..=chars.len() - pattern.len() {
            if chars[start..start + pattern.len()] == pattern[..] {
                let end = start + pattern.len();
                found.push((start, end, chars[start..end].iter().collect()));
            }
        }
    }
    found.sort();
    found.dedup();
    found
}

/// Matches from the automaton as sorted `(start, end, text)` triples.
pub fn sorted_matches(
    automaton: &crate::Automaton,
    text: &str,
) -> Vec<(usize, usize, String)> {
    let mut found: Vec<_> = automaton
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
        .collect();
    found.sort();
    found
}
