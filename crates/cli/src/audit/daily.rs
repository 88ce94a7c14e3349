// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date-partitioned log file: `<root>/<YYYY-MM-DD>/audit.log`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use flate2::Compression;
use flate2::write::GzEncoder;

use super::AuditRecord;

/// File name inside each day directory.
pub const LOG_FILE_NAME: &str = "audit.log";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Open log for one calendar day.
pub(crate) struct DailyLog {
    root: PathBuf,
    date: NaiveDate,
    path: PathBuf,
    out: BufWriter<File>,
    compress: bool,
    max_age_days: u32,
}

impl DailyLog {
    /// Open (appending) the log for `date`, creating its directory, then
    /// compress and prune days left behind by earlier runs.
    pub(crate) fn open(
        root: &Path,
        date: NaiveDate,
        compress: bool,
        max_age_days: u32,
    ) -> io::Result<Self> {
        let (path, out) = open_day(root, date)?;
        let log = Self {
            root: root.to_path_buf(),
            date,
            path,
            out,
            compress,
            max_age_days,
        };
        log.tidy();
        Ok(log)
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a JSON line.
    pub(crate) fn append(&mut self, record: &AuditRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Switch output to `date`'s file, then compress and prune old days.
    ///
    /// Compression and pruning failures are logged; only failing to open
    /// the new file is an error.
    pub(crate) fn rotate_to(&mut self, date: NaiveDate) -> io::Result<()> {
        if date == self.date {
            return Ok(());
        }
        self.out.flush()?;

        let (path, out) = open_day(&self.root, date)?;
        let previous = std::mem::replace(&mut self.path, path);
        // Dropping the old writer closes the previous day's file.
        self.out = out;
        self.date = date;
        tracing::info!(date = %date, path = %self.path.display(), "rotated audit log");

        if self.compress {
            compress_logged(&previous);
        }
        self.tidy();
        Ok(())
    }

    /// Compress plain logs of earlier days and remove expired day
    /// directories. Failures are logged.
    fn tidy(&self) {
        if self.max_age_days > 0
            && let Some(cutoff) = self
                .date
                .checked_sub_days(Days::new(u64::from(self.max_age_days)))
        {
            prune_before(&self.root, cutoff);
        }
        if self.compress {
            for (_, dir) in day_dirs(&self.root).filter(|(day, _)| *day < self.date) {
                compress_logged(&dir.join(LOG_FILE_NAME));
            }
        }
    }
}

fn open_day(root: &Path, date: NaiveDate) -> io::Result<(PathBuf, BufWriter<File>)> {
    let dir = root.join(date.format(DATE_FORMAT).to_string());
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, BufWriter::new(file)))
}

/// Gzip `path` to `path.gz` and remove the original.
pub(crate) fn compress_file(path: &Path) -> io::Result<()> {
    if !path.is_file() {
        return Ok(());
    }
    let mut gz_name = path.as_os_str().to_owned();
    gz_name.push(".gz");
    let gz_path = PathBuf::from(gz_name);

    let mut input = File::open(path)?;
    let mut encoder = GzEncoder::new(File::create(&gz_path)?, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;
    fs::remove_file(path)
}

fn compress_logged(path: &Path) {
    if let Err(err) = compress_file(path) {
        tracing::warn!(path = %path.display(), "failed to compress audit log: {}", err);
    }
}

/// Date-named directories directly under `root`.
fn day_dirs(root: &Path) -> impl Iterator<Item = (NaiveDate, PathBuf)> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => Some(entries),
        Err(err) => {
            tracing::warn!(root = %root.display(), "failed to list audit log directory: {}", err);
            None
        }
    };
    entries.into_iter().flatten().flatten().filter_map(|entry| {
        let date = entry
            .file_name()
            .to_str()
            .and_then(|n| NaiveDate::parse_from_str(n, DATE_FORMAT).ok())?;
        let path = entry.path();
        path.is_dir().then_some((date, path))
    })
}

/// Remove day directories dated strictly before `cutoff`.
pub(crate) fn prune_before(root: &Path, cutoff: NaiveDate) {
    for (date, dir) in day_dirs(root).filter(|(date, _)| *date < cutoff) {
        match fs::remove_dir_all(dir) {
            Ok(()) => tracing::info!(date = %date, "removed expired audit logs"),
            Err(err) => tracing::warn!(date = %date, "failed to remove expired audit logs: {}", err),
        }
    }
}

/// Time left until the next local midnight of `now`'s time zone.
///
/// Falls back to 24 hours when midnight does not exist locally.
pub(crate) fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    now.date_naive()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .and_then(|midnight| midnight.and_local_timezone(now.timezone()).earliest())
        .and_then(|next| next.signed_duration_since(now.clone()).to_std().ok())
        .unwrap_or(Duration::from_secs(24 * 60 * 60))
}

#[cfg(test)]
#[path = "daily_tests.rs"]
mod tests;
