// ============================================================
// Infrastructure Layer
// ============================================================
// Everything that touches the filesystem lives here:
//
//   backup.rs  — Date-suffixed backup-on-overwrite
//                Before any file is replaced, the existing copy
//                is duplicated to <stem><YYYYMMDD><suffix>.
//                Shared by every writer below.
//
//   archive.rs — Model structure + weights persistence
//                <stem>.json holds the architecture as JSON,
//                <stem>.h5 holds the weights in the model's
//                native binary format.
//
//   report.rs  — Results report writer
//                Fixed-section plain-text summary of a training
//                run at <save_path>.txt.
//
//   metrics.rs — Metric-history CSV writer
//                One column per metric, one row per epoch, at
//                <stem>_history.csv.
//
// All four derive their paths from a single stem by appending a
// fixed suffix, and none of them holds state across calls.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// Dated backup-on-overwrite scheme
pub mod backup;

/// Model structure and weights persistence
pub mod archive;

/// Training results report writer
pub mod report;

/// Metric-history CSV writer
pub mod metrics;
