// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audit command implementation.
//!
//! Scans each text on behalf of a caller; texts with matches are printed
//! as audit events and handed to the audit sink. Texts given as arguments
//! are validated together before anything is logged. Stdin is streamed:
//! each line is audited as soon as it arrives, and unusable lines are
//! skipped with a warning.

use std::io::BufRead;

use termcolor::StandardStream;
use wordaudit::audit::{AuditRecord, AuditSink, Caller, Submit};
use wordaudit::automaton::Automaton;
use wordaudit::cli::{AuditArgs, Cli};
use wordaudit::config::ScanConfig;
use wordaudit::error::{Error, ExitCode};
use wordaudit::output::text::TextFormatter;

/// Run the audit command.
pub fn run(cli: &Cli, args: &AuditArgs) -> anyhow::Result<ExitCode> {
    if args.bot.is_empty() {
        return Err(Error::Argument("--bot must not be empty".to_string()).into());
    }
    if args.texts.iter().any(String::is_empty) {
        return Err(empty_text().into());
    }

    let (mut config, dictionary) = crate::load_context(cli, args.dict.as_deref())?;
    if let Some(dir) = &args.audit_dir {
        config.audit.dir = dir.clone();
    }
    for text in &args.texts {
        config.scan.check_len(text)?;
    }

    let mut auditor = Auditor {
        automaton: &dictionary.automaton,
        sink: AuditSink::spawn(&config.audit)?,
        caller: Caller {
            bot: args.bot.clone(),
            group: args.group.clone(),
            friend: args.friend.clone(),
        },
        formatter: TextFormatter::stdout(args.color.choice()),
        texts: 0,
        matched: 0,
        skipped: 0,
    };

    if args.texts.is_empty() {
        auditor.stream(std::io::stdin().lock(), &config.scan)?;
    } else {
        for text in &args.texts {
            auditor.audit(text)?;
        }
    }

    let Auditor {
        sink,
        texts,
        matched,
        skipped,
        ..
    } = auditor;
    let stats = sink.shutdown();
    tracing::info!(
        texts,
        matched,
        skipped,
        written = stats.written,
        dropped = stats.dropped,
        failed = stats.failed,
        "audit complete"
    );
    if texts == 0 {
        return Err(empty_text().into());
    }
    Ok(ExitCode::Success)
}

fn empty_text() -> Error {
    Error::Argument("text must not be empty".to_string())
}

struct Auditor<'a> {
    automaton: &'a Automaton,
    sink: AuditSink,
    caller: Caller,
    formatter: TextFormatter<StandardStream>,
    texts: usize,
    matched: usize,
    skipped: usize,
}

impl Auditor<'_> {
    /// Audit stdin line by line until EOF.
    fn stream(&mut self, input: impl BufRead, scan: &ScanConfig) -> anyhow::Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let text = line.strip_suffix('\r').unwrap_or(&line);
            let rejected = if text.is_empty() {
                Err(empty_text())
            } else {
                scan.check_len(text)
            };
            if let Err(err) = rejected {
                self.skipped += 1;
                tracing::warn!(line = index + 1, "skipping stdin line: {}", err);
                eprintln!("wordaudit: warning: skipping stdin line {}: {}", index + 1, err);
                continue;
            }
            self.audit(text)?;
        }
        Ok(())
    }

    /// Scan one text; print and submit it when anything matched.
    fn audit(&mut self, text: &str) -> std::io::Result<()> {
        self.texts += 1;
        let keywords = self.automaton.matched_keywords(text);
        if keywords.is_empty() {
            return Ok(());
        }
        self.matched += 1;
        let record = AuditRecord::new(&self.caller, text, keywords);
        self.formatter.write_audit_event(&record)?;
        if self.sink.submit(record) == Submit::Dropped {
            tracing::debug!(bot = %self.caller.bot, "audit record not queued");
        }
        Ok(())
    }
}
