// ============================================================
// Metric Containers
// ============================================================
// History holds one value sequence per metric, one value per
// completed epoch, in the order metrics were first recorded.
// The recording order matters: it fixes the column order of the
// CSV history dump and the lookup order of report sections, so
// a plain HashMap (arbitrary iteration order) is not enough:
// the names live in a Vec and the series in a map beside it.
//
// TestResults is the flat sibling: one final value per metric,
// produced by a single test-set evaluation after training.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── History ──────────────────────────────────────────────────────────────────
/// Per-epoch metric trajectories recorded during training.
///
/// Insertion order of metric names is preserved and drives the
/// iteration order of `names()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    /// Metric names in first-recorded order
    names:  Vec<String>,

    /// One value sequence per metric, indexed by epoch
    series: HashMap<String, Vec<f64>>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one epoch's value for `metric`, registering the
    /// metric on first use.
    pub fn push(&mut self, metric: &str, value: f64) {
        if !self.series.contains_key(metric) {
            self.names.push(metric.to_string());
        }
        self.series.entry(metric.to_string()).or_default().push(value);
    }

    /// Metric names in first-recorded order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The full value sequence for `metric`, if recorded.
    pub fn series(&self, metric: &str) -> Option<&[f64]> {
        self.series.get(metric).map(Vec::as_slice)
    }

    /// The last recorded value for `metric`, the "final" value
    /// the results report prints.
    pub fn last(&self, metric: &str) -> Option<f64> {
        self.series.get(metric).and_then(|s| s.last().copied())
    }

    /// Number of recorded epochs, taken from the first metric's
    /// series. Series lengths are not forced to agree here; the
    /// CSV writer validates that before it writes.
    pub fn epochs(&self) -> usize {
        self.names
            .first()
            .and_then(|n| self.series.get(n))
            .map_or(0, Vec::len)
    }

    /// True if no metric has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, Vec<f64>)> for History {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        let mut history = History::new();
        for (name, values) in iter {
            history.names.push(name.clone());
            history.series.insert(name, values);
        }
        history
    }
}

// ─── TestResults ──────────────────────────────────────────────────────────────
/// Final metric values from a single test-set evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResults {
    values: HashMap<String, f64>,
}

impl TestResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the final value for `metric`.
    pub fn set(&mut self, metric: &str, value: f64) {
        self.values.insert(metric.to_string(), value);
    }

    /// The final value for `metric`, if evaluated.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }
}
