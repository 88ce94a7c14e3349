// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use rayon::prelude::*;

use wordaudit::cli::{Cli, OutputFormat, ScanArgs, read_texts};
use wordaudit::error::ExitCode;
use wordaudit::output::json::JsonFormatter;
use wordaudit::output::text::TextFormatter;
use wordaudit::output::{ScanResult, ScanSummary};

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let (config, dictionary) = crate::load_context(cli, args.dict.as_deref())?;

    let texts = read_texts(&args.texts, std::io::stdin().lock())?;
    for text in &texts {
        config.scan.check_len(text)?;
    }

    let automaton = &dictionary.automaton;
    let results: Vec<ScanResult<'_>> = texts
        .par_iter()
        .map(|text| ScanResult::scan(automaton, text))
        .collect();
    let summary = ScanSummary::from_results(&results);
    tracing::debug!(
        texts = summary.texts,
        matched = summary.matched,
        matches = summary.matches,
        "scan complete"
    );

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(args.color.choice());
            for result in &results {
                formatter.write_result(result)?;
            }
            formatter.write_summary(&summary)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&results)?;
        }
    }

    if summary.matched > 0 {
        Ok(ExitCode::Matched)
    } else {
        Ok(ExitCode::Success)
    }
}
