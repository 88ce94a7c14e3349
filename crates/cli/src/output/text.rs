//! Text output formatter.
//!
//! Clean texts are silent. A text with matches prints as:
//! ```text
//! <text>
//!   [<start>, <end>) <keyword>
//! ```

use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{ScanResult, ScanSummary};
use crate::audit::AuditRecord;
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one scan result (streaming).
    pub fn write_result(&mut self, result: &ScanResult<'_>) -> std::io::Result<()> {
        if !result.is_match() {
            return Ok(());
        }

        self.out.set_color(&scheme::text())?;
        write!(self.out, "{}", result.text)?;
        self.out.reset()?;
        writeln!(self.out)?;

        for m in &result.matches {
            write!(self.out, "  ")?;
            self.out.set_color(&scheme::span())?;
            write!(self.out, "[{}, {})", m.start(), m.end())?;
            self.out.reset()?;
            write!(self.out, " ")?;
            self.out.set_color(&scheme::keyword())?;
            write!(self.out, "{}", m.as_str())?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, summary: &ScanSummary) -> std::io::Result<()> {
        if summary.matched == 0 {
            self.out.set_color(&scheme::clean())?;
            write!(self.out, "clean")?;
            self.out.reset()?;
            writeln!(
                self.out,
                ": {} text{} scanned",
                summary.texts,
                plural(summary.texts)
            )?;
            return Ok(());
        }
        writeln!(
            self.out,
            "{} of {} text{} matched ({} match{})",
            summary.matched,
            summary.texts,
            plural(summary.texts),
            summary.matches,
            if summary.matches == 1 { "" } else { "es" }
        )
    }

    /// Write one audit event, as submitted to the audit log.
    pub fn write_audit_event(&mut self, record: &AuditRecord) -> std::io::Result<()> {
        self.field("time", &record.time.to_rfc3339())?;
        self.field("bot", &record.bot)?;
        self.field("group", &record.group)?;
        self.field("friend", &record.friend)?;

        self.out.set_color(&scheme::label())?;
        write!(self.out, "keywords:")?;
        self.out.reset()?;
        for (i, keyword) in record.keywords.iter().enumerate() {
            write!(self.out, "{}", if i == 0 { " " } else { ", " })?;
            self.out.set_color(&scheme::keyword())?;
            write!(self.out, "{}", keyword)?;
            self.out.reset()?;
        }
        writeln!(self.out)?;

        self.field("message", &record.message)?;
        writeln!(self.out)
    }

    fn field(&mut self, label: &str, value: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "{}:", label)?;
        self.out.reset()?;
        writeln!(self.out, " {}", value)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
