// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dict command implementation.

use wordaudit::cli::{Cli, DictArgs};
use wordaudit::error::ExitCode;

/// Run the dict command.
pub fn run(cli: &Cli, args: &DictArgs) -> anyhow::Result<ExitCode> {
    let (config, dictionary) = crate::load_context(cli, args.dict.as_deref())?;
    let automaton = &dictionary.automaton;
    let stats = &dictionary.stats;

    println!("dictionary: {}", config.dictionary.path.display());
    println!("patterns: {}", automaton.pattern_count());
    println!("states: {}", automaton.state_count());
    println!(
        "lines: {} (blank: {}, duplicates: {})",
        stats.lines, stats.blank, stats.duplicates
    );
    Ok(ExitCode::Success)
}
