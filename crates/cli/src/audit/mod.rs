// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Asynchronous audit log.
//!
//! Callers hand records to [`AuditSink::submit`], which never blocks: the
//! record goes into a bounded queue, or is dropped and counted when the queue
//! is full. A single writer thread appends JSON lines to
//! `<dir>/<YYYY-MM-DD>/audit.log` and switches files at local midnight.

mod daily;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;

use chrono::{DateTime, Local};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError, bounded};
use serde::{Deserialize, Serialize};

use crate::config::AuditConfig;
use crate::error::{Error, Result};

use daily::{DailyLog, until_next_midnight};
pub use daily::LOG_FILE_NAME;

/// Who sent the audited text. Values are opaque and passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub bot: String,
    pub group: String,
    pub friend: String,
}

/// One audit log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub time: DateTime<Local>,
    pub bot: String,
    pub group: String,
    pub friend: String,
    /// Matched substrings in scan order.
    pub keywords: Vec<String>,
    /// The full audited text.
    pub message: String,
}

impl AuditRecord {
    /// Record a text that matched, stamped with the current local time.
    pub fn new(caller: &Caller, message: &str, keywords: Vec<String>) -> Self {
        Self {
            time: Local::now(),
            bot: caller.bot.clone(),
            group: caller.group.clone(),
            friend: caller.friend.clone(),
            keywords,
            message: message.to_string(),
        }
    }
}

/// Outcome of a non-blocking submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Queued,
    /// Queue full or writer gone; the record was discarded.
    Dropped,
}

/// Counters reported when the sink shuts down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditStats {
    /// Records appended to a log file.
    pub written: u64,
    /// Records discarded at submit time.
    pub dropped: u64,
    /// Records the writer failed to append.
    pub failed: u64,
    /// Day changes performed by the writer.
    pub rotations: u64,
}

/// Handle to the audit queue and its writer thread.
pub struct AuditSink {
    tx: Option<Sender<AuditRecord>>,
    writer: Option<JoinHandle<AuditStats>>,
    dropped: Arc<AtomicU64>,
    dir: PathBuf,
}

impl AuditSink {
    /// Open today's log and start the writer thread.
    ///
    /// Fails if the log directory or file cannot be created.
    pub fn spawn(config: &AuditConfig) -> Result<Self> {
        if config.queue_capacity == 0 {
            return Err(Error::Audit("queue capacity must be at least 1".to_string()));
        }

        let today = Local::now().date_naive();
        let log = DailyLog::open(&config.dir, today, config.compress, config.max_age_days)
            .map_err(|source| Error::Io {
                path: config.dir.clone(),
                source,
            })?;
        tracing::debug!(path = %log.path().display(), "opened audit log");

        let (tx, rx) = bounded(config.queue_capacity);
        let writer = std::thread::Builder::new()
            .name("audit-writer".to_string())
            .spawn(move || run_writer(rx, log))
            .map_err(|e| Error::Audit(format!("failed to start writer thread: {}", e)))?;

        Ok(Self {
            tx: Some(tx),
            writer: Some(writer),
            dropped: Arc::new(AtomicU64::new(0)),
            dir: config.dir.clone(),
        })
    }

    /// Root directory of the audit logs.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Enqueue a record without blocking.
    pub fn submit(&self, record: AuditRecord) -> Submit {
        let Some(tx) = &self.tx else {
            return self.drop_record("audit sink closed");
        };
        match tx.try_send(record) {
            Ok(()) => Submit::Queued,
            Err(TrySendError::Full(_)) => self.drop_record("audit queue full"),
            Err(TrySendError::Disconnected(_)) => self.drop_record("audit writer stopped"),
        }
    }

    fn drop_record(&self, reason: &str) -> Submit {
        let total = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(dropped = total, "{}, record dropped", reason);
        Submit::Dropped
    }

    /// Close the queue, let the writer drain it, and return final counters.
    pub fn shutdown(mut self) -> AuditStats {
        self.close()
    }

    fn close(&mut self) -> AuditStats {
        drop(self.tx.take());
        let mut stats = match self.writer.take() {
            Some(handle) => handle.join().unwrap_or_else(|_| {
                tracing::error!("audit writer thread panicked");
                AuditStats::default()
            }),
            None => AuditStats::default(),
        };
        stats.dropped = self.dropped.load(Ordering::Relaxed);
        stats
    }
}

impl Drop for AuditSink {
    fn drop(&mut self) {
        if self.writer.is_some() {
            let stats = self.close();
            tracing::debug!(?stats, "audit sink dropped");
        }
    }
}

/// Writer loop: append records until every sender is gone, rotating at
/// local midnight even when idle.
fn run_writer(rx: Receiver<AuditRecord>, mut log: DailyLog) -> AuditStats {
    let mut stats = AuditStats::default();

    loop {
        match rx.recv_timeout(until_next_midnight(&Local::now())) {
            Ok(record) => {
                rotate_if_needed(&mut log, &mut stats);
                match log.append(&record) {
                    Ok(()) => stats.written += 1,
                    Err(err) => {
                        stats.failed += 1;
                        tracing::error!(path = %log.path().display(), "failed to write audit record: {}", err);
                    }
                }
                if rx.is_empty() {
                    flush(&mut log);
                }
            }
            Err(RecvTimeoutError::Timeout) => rotate_if_needed(&mut log, &mut stats),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    flush(&mut log);
    stats
}

fn rotate_if_needed(log: &mut DailyLog, stats: &mut AuditStats) {
    let today = Local::now().date_naive();
    if today == log.date() {
        return;
    }
    match log.rotate_to(today) {
        Ok(()) => stats.rotations += 1,
        Err(err) => tracing::error!("failed to rotate audit log: {}", err),
    }
}

fn flush(log: &mut DailyLog) {
    if let Err(err) = log.flush() {
        tracing::error!(path = %log.path().display(), "failed to flush audit log: {}", err);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
