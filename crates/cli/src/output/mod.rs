// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for scan results.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::automaton::{Automaton, Match};

/// Matches found in one scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult<'t> {
    pub text: &'t str,
    pub matches: Vec<Match<'t>>,
}

impl<'t> ScanResult<'t> {
    /// Scan `text` and collect every match in scan order.
    pub fn scan(automaton: &Automaton, text: &'t str) -> Self {
        Self {
            text,
            matches: automaton.find_all(text),
        }
    }

    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Matched substrings in scan order.
    pub fn keywords(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.as_str().to_string()).collect()
    }
}

/// Totals over one scan invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Texts scanned.
    pub texts: usize,
    /// Texts with at least one match.
    pub matched: usize,
    /// Matches across all texts.
    pub matches: usize,
}

impl ScanSummary {
    pub fn from_results(results: &[ScanResult<'_>]) -> Self {
        Self {
            texts: results.len(),
            matched: results.iter().filter(|r| r.is_match()).count(),
            matches: results.iter().map(|r| r.matches.len()).sum(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
