// ============================================================
// Metric-History CSV Writer
// ============================================================
// Dumps a full training history to <stem>_history.csv so the
// trajectories can be plotted later:
//
//   loss,accuracy          ← header, History insertion order
//   0.9,0.1                ← epoch 0
//   0.5,0.6                ← epoch 1
//   0.2,0.9                ← epoch 2
//
// One column per metric, one row per epoch; values in their
// natural `Display` form. Row i of the body is epoch i across
// every column, which only holds when all series have the same
// length. Unequal series (early stopping on just one metric,
// a half-recorded epoch) are rejected up front rather than
// silently mis-pairing rows.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::domain::history::History;
use crate::infra::backup;

/// Suffix of the history file. The backup date lands before the
/// whole suffix: `model20260825_history.csv`.
pub const HISTORY_SUFFIX: &str = "_history.csv";

/// Write the full metric history under `stem`.
///
/// `None` as the stem is a no-op. A pre-existing history file
/// is backed up to its dated name first.
pub fn save_history(stem: Option<&str>, history: &History) -> Result<()> {
    match stem {
        Some(stem) => save_history_on(stem, history, Local::now().date_naive()),
        None => Ok(()),
    }
}

/// `save_history` with an explicit backup-stamp date.
pub(crate) fn save_history_on(stem: &str, history: &History, date: NaiveDate) -> Result<()> {
    let names: Vec<&str> = history.names().collect();
    let epochs = history.epochs();

    // Column lengths must agree before anything touches disk.
    let mut columns: Vec<&[f64]> = Vec::with_capacity(names.len());
    for name in &names {
        let series = history.series(name).unwrap_or(&[]);
        if series.len() != epochs {
            bail!(
                "Metric '{}' has {} values but '{}' has {}, history rows would mis-pair",
                name,
                series.len(),
                names[0],
                epochs,
            );
        }
        columns.push(series);
    }

    backup::backup_existing_on(stem, HISTORY_SUFFIX, date)?;

    let path = backup::target_path(stem, HISTORY_SUFFIX);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create history file '{}'", path.display()))?;
    let mut f = BufWriter::new(file);

    writeln!(f, "{}", names.join(","))?;
    for epoch in 0..epochs {
        let row: Vec<String> = columns.iter().map(|col| col[epoch].to_string()).collect();
        writeln!(f, "{}", row.join(","))?;
    }

    f.flush()
        .with_context(|| format!("Failed to write history to '{}'", path.display()))?;
    tracing::debug!(
        "Saved {} epochs of {} metrics to '{}'",
        epochs,
        names.len(),
        path.display(),
    );
    Ok(())
}
