// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::color::resolve_color;

/// Sensitive-word scanner with an asynchronous audit log
#[derive(Parser)]
#[command(name = "wordaudit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "WORDAUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report every dictionary word found in each text
    Scan(ScanArgs),
    /// Scan texts on behalf of a caller and record matches in the audit log
    Audit(AuditArgs),
    /// Validate the dictionary and print its statistics
    Dict(DictArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Texts to scan (one per line from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Dictionary file (overrides dictionary.path)
    #[arg(short = 'd', long = "dict", value_name = "FILE")]
    pub dict: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    #[command(flatten)]
    pub color: ColorArgs,
}

/// `--color` / `--no-color`, shared by commands that print matches.
#[derive(clap::Args)]
pub struct ColorArgs {
    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

impl ColorArgs {
    /// Color choice from flags, falling back to environment detection.
    pub fn choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.color {
            ColorChoice::Always
        } else {
            resolve_color()
        }
    }
}

#[derive(clap::Args)]
pub struct AuditArgs {
    /// Texts to audit (streamed line by line from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Bot that received the text
    #[arg(long, value_name = "ID")]
    pub bot: String,

    /// Group the text was sent in
    #[arg(long, value_name = "ID", default_value = "")]
    pub group: String,

    /// Friend who sent the text
    #[arg(long, value_name = "ID", default_value = "")]
    pub friend: String,

    /// Dictionary file (overrides dictionary.path)
    #[arg(short = 'd', long = "dict", value_name = "FILE")]
    pub dict: Option<PathBuf>,

    /// Audit log root directory (overrides audit.dir)
    #[arg(long, value_name = "DIR")]
    pub audit_dir: Option<PathBuf>,

    #[command(flatten)]
    pub color: ColorArgs,
}

#[derive(clap::Args)]
pub struct DictArgs {
    /// Dictionary file (overrides dictionary.path)
    #[arg(short = 'd', long = "dict", value_name = "FILE")]
    pub dict: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Texts given on the command line, or one per line from `stdin`.
///
/// A trailing `\r` is stripped from stdin lines.
pub fn read_texts(args: &[String], stdin: impl BufRead) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    stdin
        .lines()
        .map(|line| line.map(|l| l.strip_suffix('\r').map(str::to_string).unwrap_or(l)))
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
