// ============================================================
// model-artifacts: save/restore helpers for trained models
// ============================================================
// Persists a model's architecture and weights, writes a
// human-readable results report, and dumps per-epoch metric
// histories to CSV. Every writer backs up the file it is about
// to overwrite by copying it to a date-suffixed sibling first.
//
// File layout, given a base stem P and a report path R:
//   P.json            ← model structure (JSON)
//   P.h5              ← model weights (opaque binary)
//   P_history.csv     ← per-epoch metric values
//   R.txt             ← training/validation/testing report
//   P20260825.json    ← dated backup of a prior P.json, etc.
//
// The deep-learning framework stays out of scope: models are
// reached through the `ModelArchive`/`ModelDecoder` traits and
// never constructed here.
//
// Everything is synchronous and stateless; only the filesystem
// carries state between calls. Concurrent writers racing on the
// same stem can lose a backup (exists-check, then copy, then
// write); callers needing that must serialize externally.

pub mod domain;
pub mod infra;

pub use domain::config::TrainSetup;
pub use domain::history::{History, TestResults};
pub use domain::traits::{ModelArchive, ModelDecoder};
pub use infra::archive::{load_model, save_model};
pub use infra::metrics::save_history;
pub use infra::report::save_results;

#[cfg(test)]
mod testutil;
