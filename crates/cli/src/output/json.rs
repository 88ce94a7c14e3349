// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::{ScanResult, ScanSummary};

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

#[derive(Debug, Serialize)]
struct ScanOutput<'a> {
    matched: bool,
    summary: ScanSummary,
    results: &'a [ScanResult<'a>],
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write every result with its summary.
    pub fn write(&mut self, results: &[ScanResult<'_>]) -> std::io::Result<()> {
        let summary = ScanSummary::from_results(results);
        let output = ScanOutput {
            matched: summary.matched > 0,
            summary,
            results,
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
