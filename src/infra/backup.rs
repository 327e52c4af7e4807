// ============================================================
// Backup-on-Overwrite
// ============================================================
// Every writer in this crate replaces whole files. Before it
// does, the file about to be lost is copied byte-for-byte to a
// date-suffixed sibling:
//
//   runs/mnist.json  →  runs/mnist20260825.json
//   runs/mnist_history.csv  →  runs/mnist20260825_history.csv
//
// The date lands between the stem and the FULL suffix, which is
// why this module works on (stem, suffix) pairs rather than on
// finished paths: "_history.csv" is one suffix, not a ".csv".
//
// At most one backup per target per day: a second overwrite on
// the same date replaces the earlier backup, so the dated copy
// always holds the state from just before the latest write.
//
// The exists-check → copy → write sequence is not atomic;
// concurrent writers on one stem can lose a backup. Callers
// that need that must serialize externally.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// Backup stamp format: YYYYMMDD.
const STAMP_FORMAT: &str = "%Y%m%d";

/// Full path of the file a (stem, suffix) pair addresses.
pub fn target_path(stem: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{stem}{suffix}"))
}

/// Back up `<stem><suffix>` under today's date, if it exists.
///
/// Returns the backup path when a backup was taken, `None` when
/// there was nothing to back up.
pub fn backup_existing(stem: &str, suffix: &str) -> Result<Option<PathBuf>> {
    backup_existing_on(stem, suffix, Local::now().date_naive())
}

/// Same as `backup_existing`, with an explicit stamp date.
///
/// The date is injectable so the same-day-overwrite behaviour
/// can be exercised deterministically.
pub fn backup_existing_on(
    stem:   &str,
    suffix: &str,
    date:   NaiveDate,
) -> Result<Option<PathBuf>> {
    let original = target_path(stem, suffix);
    if !original.exists() {
        return Ok(None);
    }

    let stamped = PathBuf::from(format!("{stem}{}{suffix}", date.format(STAMP_FORMAT)));
    tracing::info!(
        "File '{}' already exists, backing it up to '{}'",
        original.display(),
        stamped.display(),
    );

    // fs::copy truncates an existing destination, which is what
    // keeps same-day backups down to one file.
    fs::copy(&original, &stamped).with_context(|| {
        format!(
            "Failed to back up '{}' to '{}'",
            original.display(),
            stamped.display()
        )
    })?;

    Ok(Some(stamped))
}
