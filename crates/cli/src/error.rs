use std::path::PathBuf;

use crate::automaton::PatternError;

/// Wordaudit error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary line could not be inserted.
    #[error("invalid dictionary: {}:{}: {}", .path.display(), .line, .source)]
    Dictionary {
        path: PathBuf,
        line: usize,
        #[source]
        source: PatternError,
    },

    /// Dictionary contains no patterns.
    #[error("invalid dictionary: {}: no patterns", .path.display())]
    EmptyDictionary { path: PathBuf },

    /// Dictionary line is not UTF-8.
    #[error("invalid dictionary: {}:{}: invalid UTF-8", .path.display(), .line)]
    InvalidUtf8 { path: PathBuf, line: usize },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Audit sink could not be started.
    #[error("audit error: {0}")]
    Audit(String),
}

/// Result type using wordaudit Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Finished, nothing matched
    Success = 0,
    /// At least one text contained a dictionary word
    Matched = 1,
    /// Configuration, dictionary or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Dictionary { .. }
            | Error::EmptyDictionary { .. }
            | Error::InvalidUtf8 { .. }
            | Error::FileTooLarge { .. } => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Audit(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
