// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wordaudit CLI entry point.

use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use wordaudit::cli::{Cli, Command};
use wordaudit::config::Config;
use wordaudit::dictionary::{self, Dictionary};
use wordaudit::discovery;
use wordaudit::error::ExitCode;

mod cmd_audit;
mod cmd_dict;
mod cmd_scan;

fn init_logging() {
    let filter = EnvFilter::try_from_env("WORDAUDIT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wordaudit: {}", e);
            match e.downcast_ref::<wordaudit::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Audit(args)) => cmd_audit::run(&cli, args),
        Some(Command::Dict(args)) => cmd_dict::run(&cli, args),
    }
}

/// Resolve the config and load the dictionary it names, or `dict` when given.
///
/// Any dictionary error aborts the command before a text is scanned.
fn load_context(cli: &Cli, dict: Option<&Path>) -> anyhow::Result<(Config, Dictionary)> {
    let cwd = std::env::current_dir()?;
    let mut config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    if let Some(path) = dict {
        config.dictionary.path = path.to_path_buf();
    }
    let dictionary = dictionary::load(&config.dictionary.path)?;
    Ok((config, dictionary))
}
