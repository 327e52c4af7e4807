// ============================================================
// Domain Layer
// ============================================================
// Pure Rust structs and traits that define what this crate
// talks about: no file I/O, no framework types.
//
//   config.rs  — TrainSetup, the training-run configuration
//                record (loss, optimiser, learning rate, batch
//                size, epochs, save path, validate/eval_test).
//
//   history.rs — History, the metric-name → per-epoch-values
//                container produced during training, and
//                TestResults, the final test-evaluation values.
//
//   traits.rs  — ModelArchive and ModelDecoder, the seam that
//                keeps the deep-learning framework opaque.
//
// Rules for this layer:
//   - NO filesystem access (that lives in `infra`)
//   - NO framework-specific model types
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Training-run configuration record
pub mod config;

// Metric history and test-result containers
pub mod history;

// Core abstractions (traits) that model owners implement
pub mod traits;
