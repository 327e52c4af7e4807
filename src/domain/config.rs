// ============================================================
// Training-Run Configuration
// ============================================================
// All the knobs of a training run that the results report
// echoes back, plus the flags that decide which report sections
// appear. Serialisable so callers can persist a run's setup
// alongside its artifacts if they wish.

use serde::{Deserialize, Serialize};

// ─── TrainSetup ───────────────────────────────────────────────────────────────
/// Configuration of a completed (or about-to-run) training run.
///
/// `save_path` is the stem for the results report (`<stem>.txt`);
/// when it is `None`, `save_results` is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSetup {
    /// Name of the loss function, e.g. "categorical_crossentropy"
    pub loss:          String,

    /// Name of the optimisation method, e.g. "adam"
    pub optimiser:     String,

    /// Learning rate the optimiser was configured with
    pub learning_rate: f64,

    /// Number of samples per gradient update
    pub batch_size:    usize,

    /// Number of full passes through the training data
    pub epochs:        usize,

    /// Stem for the results report file; `None` disables it
    pub save_path:     Option<String>,

    /// Whether validation ran (emits the Validation Results block)
    pub validate:      bool,

    /// Whether test evaluation ran (emits the Testing Results block)
    pub eval_test:     bool,
}

impl Default for TrainSetup {
    fn default() -> Self {
        Self {
            loss:          "categorical_crossentropy".to_string(),
            optimiser:     "adam".to_string(),
            learning_rate: 1e-3,
            batch_size:    32,
            epochs:        10,
            save_path:     None,
            validate:      false,
            eval_test:     false,
        }
    }
}
