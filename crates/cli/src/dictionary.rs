// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dictionary file loading.
//!
//! Format: one pattern per line, UTF-8, `\n` or `\r\n` line endings, no
//! escaping. Blank lines are skipped; any other line (whitespace included)
//! is a pattern. A file that yields no patterns is rejected.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::automaton::{Automaton, TrieBuilder};
use crate::error::{Error, Result};

/// Default dictionary file name, relative to the working directory.
pub const DEFAULT_DICTIONARY: &str = "sensitive_words.txt";

/// Maximum dictionary file size (64MB).
pub const MAX_DICTIONARY_SIZE: u64 = 64 * 1024 * 1024;

/// Size at which to note a large dictionary (8MB).
const LARGE_DICTIONARY_WARN: u64 = 8 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A built automaton plus what loading it saw.
#[derive(Debug)]
pub struct Dictionary {
    pub automaton: Automaton,
    pub stats: LoadStats,
}

/// Line counts from a dictionary load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Blank lines skipped.
    pub blank: usize,
    /// Lines repeating an earlier pattern.
    pub duplicates: usize,
}

/// Size-gated dictionary reader.
pub struct DictionaryLoader {
    max_size: u64,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self {
            max_size: MAX_DICTIONARY_SIZE,
        }
    }
}

impl DictionaryLoader {
    /// Create a loader with the default size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with a custom size limit.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read, validate and build the dictionary at `path`.
    pub fn load(&self, path: &Path) -> Result<Dictionary> {
        let bytes = self.read(path)?;
        parse(&bytes, path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }
        if size > LARGE_DICTIONARY_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "reading large dictionary"
            );
        }

        let mut buffer = Vec::with_capacity(size as usize);
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(io_err)?;
        Ok(buffer)
    }
}

/// Load a dictionary with the default loader.
pub fn load(path: &Path) -> Result<Dictionary> {
    DictionaryLoader::new().load(path)
}

/// Build a dictionary from raw file content. `path` is only used in errors.
pub fn parse(bytes: &[u8], path: &Path) -> Result<Dictionary> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut builder = TrieBuilder::new();
    let mut stats = LoadStats::default();

    for (index, raw) in lines(bytes).enumerate() {
        let line = index + 1;
        stats.lines += 1;

        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            stats.blank += 1;
            continue;
        }

        let pattern = std::str::from_utf8(raw).map_err(|_| Error::InvalidUtf8 {
            path: PathBuf::from(path),
            line,
        })?;

        let inserted = builder.insert(pattern).map_err(|source| Error::Dictionary {
            path: PathBuf::from(path),
            line,
            source,
        })?;
        if !inserted {
            tracing::debug!(line, pattern, "duplicate dictionary entry");
            stats.duplicates += 1;
        }
    }

    if builder.pattern_count() == 0 {
        return Err(Error::EmptyDictionary {
            path: path.to_path_buf(),
        });
    }

    let automaton = builder.build();
    tracing::debug!(
        path = %path.display(),
        patterns = automaton.pattern_count(),
        lines = stats.lines,
        blank = stats.blank,
        duplicates = stats.duplicates,
        "loaded dictionary"
    );

    Ok(Dictionary { automaton, stats })
}

/// Split on `\n`, dropping the empty remainder after a trailing newline.
fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
