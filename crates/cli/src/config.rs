// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles wordaudit.toml parsing with version validation and unknown key
//! warnings. Relative paths are resolved against the directory holding the
//! config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dictionary::DEFAULT_DICTIONARY;
use crate::error::{Error, Result};

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "wordaudit.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "dictionary", "audit", "scan"];

const KNOWN_DICTIONARY_KEYS: &[&str] = &["path"];
const KNOWN_AUDIT_KEYS: &[&str] = &["dir", "queue_capacity", "compress", "max_age_days"];
const KNOWN_SCAN_KEYS: &[&str] = &["max_text_chars"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Dictionary source.
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Audit log writer.
    #[serde(default)]
    pub audit: AuditConfig,

    /// Per-text scan limits.
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            dictionary: DictionaryConfig::default(),
            audit: AuditConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

/// Dictionary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryConfig {
    /// Newline-delimited pattern file.
    #[serde(default = "DictionaryConfig::default_path")]
    pub path: PathBuf,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl DictionaryConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_DICTIONARY)
    }
}

/// Audit writer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuditConfig {
    /// Root directory; records go to `<dir>/<YYYY-MM-DD>/audit.log`.
    #[serde(default = "AuditConfig::default_dir")]
    pub dir: PathBuf,

    /// Records buffered between callers and the writer thread.
    #[serde(default = "AuditConfig::default_queue_capacity")]
    pub queue_capacity: usize,

    /// Gzip the previous day's log after rotating.
    #[serde(default = "AuditConfig::default_compress")]
    pub compress: bool,

    /// Day directories older than this are removed on rotation (0 = keep all).
    #[serde(default = "AuditConfig::default_max_age_days")]
    pub max_age_days: u32,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            queue_capacity: Self::default_queue_capacity(),
            compress: Self::default_compress(),
            max_age_days: Self::default_max_age_days(),
        }
    }
}

impl AuditConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("audit_logs")
    }

    fn default_queue_capacity() -> usize {
        1000
    }

    fn default_compress() -> bool {
        true
    }

    fn default_max_age_days() -> u32 {
        365
    }
}

/// Scan limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Longest accepted text in code points (0 = unlimited).
    #[serde(default)]
    pub max_text_chars: usize,
}

impl ScanConfig {
    /// Reject texts longer than the configured limit.
    pub fn check_len(&self, text: &str) -> Result<()> {
        if self.max_text_chars == 0 {
            return Ok(());
        }
        let len = text.chars().count();
        if len > self.max_text_chars {
            return Err(Error::Argument(format!(
                "text too long: {} characters (max: {})",
                len, self.max_text_chars
            )));
        }
        Ok(())
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    let config = parse(&content, path)?;
    Ok(rebase(config, path))
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    let config = parse_with_warnings(&content, path)?;
    Ok(rebase(config, path))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_err = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_err(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_err("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_err(format!(
            "unsupported config version {} (supported: {})\n  Upgrade wordaudit to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let config: Config = toml::from_str(content).map_err(|e| config_err(e.to_string()))?;
    validate(&config).map_err(config_err)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    // parse() already validated the syntax.
    if let Ok(table) = content.parse::<toml::Table>() {
        for key in unknown_keys(&table) {
            warn_unknown_key(path, &key);
        }
    }

    Ok(config)
}

/// Dotted names of keys the config does not recognize.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        let known_children = match key.as_str() {
            "dictionary" => KNOWN_DICTIONARY_KEYS,
            "audit" => KNOWN_AUDIT_KEYS,
            "scan" => KNOWN_SCAN_KEYS,
            _ if KNOWN_KEYS.contains(&key.as_str()) => continue,
            _ => {
                unknown.push(key.clone());
                continue;
            }
        };
        if let toml::Value::Table(section) = value {
            for child in section.keys() {
                if !known_children.contains(&child.as_str()) {
                    unknown.push(format!("{}.{}", key, child));
                }
            }
        }
    }
    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "wordaudit: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn validate(config: &Config) -> std::result::Result<(), String> {
    if config.audit.queue_capacity == 0 {
        return Err("audit.queue_capacity must be at least 1".to_string());
    }
    if config.dictionary.path.as_os_str().is_empty() {
        return Err("dictionary.path must not be empty".to_string());
    }
    Ok(())
}

/// Resolve relative paths against the config file's directory.
fn rebase(mut config: Config, config_path: &Path) -> Config {
    let Some(base) = config_path.parent() else {
        return config;
    };
    if config.dictionary.path.is_relative() {
        config.dictionary.path = base.join(&config.dictionary.path);
    }
    if config.audit.dir.is_relative() {
        config.audit.dir = base.join(&config.audit.dir);
    }
    config
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
