// ============================================================
// Model Archive: structure + weights persistence
// ============================================================
// Two files per model, both derived from one stem:
//
//   <stem>.json — the architecture, pretty-printed JSON
//   <stem>.h5   — the weights, written by the model itself in
//                 its native binary format
//
// Saving backs up whichever of the two already exists (see
// infra::backup), then replaces it. Loading is forgiving about
// missing files (a missing structure file means "nothing to
// restore", a missing weights file means "structure only")
// but strict about present-and-malformed ones, which propagate
// as hard errors from the deserialization layer.
//
// An absent stem is a deliberate no-op on both paths, so
// callers can thread an optional save location straight
// through without guarding every call site.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::domain::traits::{ModelArchive, ModelDecoder};
use crate::infra::backup;

/// Suffix of the architecture file.
pub const STRUCTURE_SUFFIX: &str = ".json";

/// Suffix of the weights file.
pub const WEIGHTS_SUFFIX: &str = ".h5";

/// Persist `model`'s structure and weights under `stem`.
///
/// `None` as the stem is a no-op. The stem's parent directory
/// is created recursively; a creation failure is logged and
/// swallowed, leaving the subsequent write to surface the real
/// filesystem error. Pre-existing `.json`/`.h5` files are
/// backed up to their dated names before being replaced.
pub fn save_model<M: ModelArchive>(model: &M, stem: Option<&str>) -> Result<()> {
    match stem {
        Some(stem) => save_model_on(model, stem, Local::now().date_naive()),
        None => Ok(()),
    }
}

/// `save_model` with an explicit backup-stamp date.
pub(crate) fn save_model_on<M: ModelArchive>(
    model: &M,
    stem:  &str,
    date:  NaiveDate,
) -> Result<()> {
    // mkdir -p the stem's folder; failure is non-fatal here.
    if let Some(parent) = Path::new(stem).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(
                    "Error while creating folder '{}': {}",
                    parent.display(),
                    err,
                );
            }
        }
    }

    // Structure first, so a failed weight write still leaves a
    // readable architecture on disk.
    let structure = model.structure()?;
    backup::backup_existing_on(stem, STRUCTURE_SUFFIX, date)?;
    let path = backup::target_path(stem, STRUCTURE_SUFFIX);
    fs::write(&path, serde_json::to_string_pretty(&structure)?).with_context(|| {
        format!("Failed to write model structure to '{}'", path.display())
    })?;

    backup::backup_existing_on(stem, WEIGHTS_SUFFIX, date)?;
    let path = backup::target_path(stem, WEIGHTS_SUFFIX);
    model
        .write_weights(&path)
        .with_context(|| format!("Failed to write model weights to '{}'", path.display()))?;

    tracing::debug!("Saved model structure and weights under '{}'", stem);
    Ok(())
}

/// Restore a model previously persisted under `stem`.
///
/// Returns `None` when the stem is absent or the structure file
/// does not exist. A missing weights file leaves the decoded
/// model with its initial weights (logged, not an error). A
/// structure or weights file that exists but cannot be decoded
/// is a hard error.
pub fn load_model<D: ModelDecoder>(stem: Option<&str>, decoder: &D) -> Result<Option<D::Model>> {
    let Some(stem) = stem else {
        return Ok(None);
    };

    let structure_path = backup::target_path(stem, STRUCTURE_SUFFIX);
    if !structure_path.exists() {
        tracing::info!(
            "File '{}' does not exist, nothing to restore",
            structure_path.display(),
        );
        return Ok(None);
    }

    let raw = fs::read_to_string(&structure_path).with_context(|| {
        format!("Failed to read model structure from '{}'", structure_path.display())
    })?;
    let structure: Value = serde_json::from_str(&raw).with_context(|| {
        format!("Malformed model structure in '{}'", structure_path.display())
    })?;
    let mut model = decoder.from_structure(&structure)?;

    let weights_path = backup::target_path(stem, WEIGHTS_SUFFIX);
    if weights_path.exists() {
        model.read_weights(&weights_path).with_context(|| {
            format!("Failed to load model weights from '{}'", weights_path.display())
        })?;
    } else {
        tracing::info!(
            "File '{}' does not exist, weights not restored",
            weights_path.display(),
        );
    }

    Ok(Some(model))
}
