pub mod audit;
pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod output;

pub use audit::{AuditRecord, AuditSink, AuditStats, Caller, Submit};
pub use automaton::{Automaton, Match, Matches, PatternError, StateId, TrieBuilder};
pub use cli::{AuditArgs, Cli, ColorArgs, Command, DictArgs, OutputFormat, ScanArgs};
pub use config::Config;
pub use dictionary::{Dictionary, DictionaryLoader, LoadStats};
pub use error::{Error, ExitCode, Result};
pub use output::{ScanResult, ScanSummary};

#[cfg(test)]
pub mod test_utils;
