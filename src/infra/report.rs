// ============================================================
// Results Report Writer
// ============================================================
// Writes the human-readable summary of a finished training run
// to <save_path>.txt. The layout is fixed:
//
//   Training Info:       ← hyperparameters from TrainSetup
//   Training Results:    ← last history value per metric
//   Validation Results:  ← only when setup.validate, metrics
//                          looked up under the "val_" prefix
//   Testing Results:     ← only when setup.eval_test, from
//                          TestResults
//   Model Summary:       ← model.summary(), tab-indented
//
// Conditional blocks are omitted entirely when their flag is
// off, never emitted empty. Metric names are printed
// title-cased ("accuracy" → "Accuracy"); lookups use the raw
// name. Values come out in metrics-list order, so the caller
// controls which metrics appear and in what order.
//
// The report is deterministic for identical inputs; only the
// backup filename carries the date.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::domain::config::TrainSetup;
use crate::domain::history::{History, TestResults};
use crate::domain::traits::ModelArchive;
use crate::infra::backup;

/// Suffix of the report file.
pub const REPORT_SUFFIX: &str = ".txt";

/// Prefix under which validation metrics live in the history.
pub const VALIDATION_PREFIX: &str = "val_";

/// Write the results report for a finished run.
///
/// A `None` setup, or a setup without a `save_path`, is a
/// no-op. A pre-existing report is backed up to its dated name
/// first. Metrics named in `metrics` but missing from the
/// history (or from `test_results` when `eval_test` is set)
/// are hard errors.
pub fn save_results<M: ModelArchive>(
    model:        &M,
    setup:        Option<&TrainSetup>,
    history:      &History,
    test_results: Option<&TestResults>,
    metrics:      &[&str],
) -> Result<()> {
    let Some(setup) = setup else {
        return Ok(());
    };
    let Some(stem) = setup.save_path.as_deref() else {
        return Ok(());
    };
    save_results_on(
        model,
        setup,
        stem,
        history,
        test_results,
        metrics,
        Local::now().date_naive(),
    )
}

/// `save_results` with an explicit backup-stamp date.
#[allow(clippy::too_many_arguments)]
pub(crate) fn save_results_on<M: ModelArchive>(
    model:        &M,
    setup:        &TrainSetup,
    stem:         &str,
    history:      &History,
    test_results: Option<&TestResults>,
    metrics:      &[&str],
    date:         NaiveDate,
) -> Result<()> {
    backup::backup_existing_on(stem, REPORT_SUFFIX, date)?;

    let path = backup::target_path(stem, REPORT_SUFFIX);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create report file '{}'", path.display()))?;
    let mut f = BufWriter::new(file);

    // ── Training Info ────────────────────────────────────────────────────────
    writeln!(f, "Training Info:")?;
    writeln!(f, "\tLoss Function: {}", setup.loss)?;
    writeln!(f, "\tOptimisation Method: {}", setup.optimiser)?;
    writeln!(f, "\tLearning Rate: {}", setup.learning_rate)?;
    writeln!(f, "\tBatch Size: {}", setup.batch_size)?;
    writeln!(f, "\tNumber of Epochs: {}", setup.epochs)?;

    // ── Training Results ─────────────────────────────────────────────────────
    writeln!(f)?;
    writeln!(f, "Training Results:")?;
    for metric in metrics {
        let value = history
            .last(metric)
            .ok_or_else(|| anyhow!("Metric '{metric}' has no recorded training values"))?;
        writeln!(f, "\t{}: {}", title_case(metric), value)?;
    }

    // ── Validation Results ───────────────────────────────────────────────────
    if setup.validate {
        writeln!(f)?;
        writeln!(f, "Validation Results:")?;
        for metric in metrics {
            let key = format!("{VALIDATION_PREFIX}{metric}");
            let value = history
                .last(&key)
                .ok_or_else(|| anyhow!("Metric '{key}' has no recorded validation values"))?;
            writeln!(f, "\t{}: {}", title_case(metric), value)?;
        }
    }

    // ── Testing Results ──────────────────────────────────────────────────────
    if setup.eval_test {
        let results = test_results
            .ok_or_else(|| anyhow!("eval_test is set but no test results were supplied"))?;
        writeln!(f)?;
        writeln!(f, "Testing Results:")?;
        for metric in metrics {
            let value = results
                .get(metric)
                .ok_or_else(|| anyhow!("Metric '{metric}' has no test result"))?;
            writeln!(f, "\t{}: {}", title_case(metric), value)?;
        }
    }

    // ── Model Summary ────────────────────────────────────────────────────────
    writeln!(f)?;
    writeln!(f, "Model Summary:")?;
    for line in model.summary().lines() {
        writeln!(f, "\t{line}")?;
    }

    f.flush()
        .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
    tracing::debug!("Saved results report to '{}'", path.display());
    Ok(())
}

/// Title-case a metric name: first letter of each alphabetic
/// run uppercased, the rest lowered ("val_loss" → "Val_Loss").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::StubModel;
    use std::fs;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn history_with_validation() -> History {
        let mut h = History::new();
        for (loss, acc, val_loss, val_acc) in [(0.9, 0.2, 1.0, 0.1), (0.4, 0.7, 0.5, 0.6)] {
            h.push("loss", loss);
            h.push("accuracy", acc);
            h.push("val_loss", val_loss);
            h.push("val_accuracy", val_acc);
        }
        h
    }

    fn setup_at(dir: &tempfile::TempDir) -> TrainSetup {
        TrainSetup {
            loss: "mse".to_string(),
            optimiser: "sgd".to_string(),
            learning_rate: 0.01,
            batch_size: 16,
            epochs: 2,
            save_path: Some(dir.path().join("report").to_str().unwrap().to_string()),
            validate: false,
            eval_test: false,
        }
    }

    #[test]
    fn report_contains_all_requested_sections() {
        let dir = tempfile::tempdir().unwrap();
        let mut setup = setup_at(&dir);
        setup.validate = true;
        setup.eval_test = true;

        let mut test_results = TestResults::new();
        test_results.set("loss", 0.5);
        test_results.set("accuracy", 0.65);

        let model = StubModel::relu(2, vec![1.0, 2.0]);
        save_results(
            &model,
            Some(&setup),
            &history_with_validation(),
            Some(&test_results),
            &["loss", "accuracy"],
        )
        .unwrap();

        let text =
            fs::read_to_string(dir.path().join("report.txt")).unwrap();

        assert!(text.starts_with("Training Info:\n\tLoss Function: mse\n"));
        assert!(text.contains("\tOptimisation Method: sgd\n"));
        assert!(text.contains("\tLearning Rate: 0.01\n"));
        assert!(text.contains("\tBatch Size: 16\n"));
        assert!(text.contains("\tNumber of Epochs: 2\n"));

        // Last epoch's values, title-cased names.
        assert!(text.contains("Training Results:\n\tLoss: 0.4\n\tAccuracy: 0.7\n"));
        assert!(text.contains("Validation Results:\n\tLoss: 0.5\n\tAccuracy: 0.6\n"));
        assert!(text.contains("Testing Results:\n\tLoss: 0.5\n\tAccuracy: 0.65\n"));

        // Summary lines are tab-indented.
        assert!(text.contains("Model Summary:\n\t"));
    }

    #[test]
    fn optional_sections_are_omitted_when_flags_are_off() {
        let dir = tempfile::tempdir().unwrap();
        let setup = setup_at(&dir);
        let model = StubModel::relu(2, vec![1.0, 2.0]);

        save_results(
            &model,
            Some(&setup),
            &history_with_validation(),
            None,
            &["loss", "accuracy"],
        )
        .unwrap();

        let text =
            fs::read_to_string(dir.path().join("report.txt")).unwrap();
        assert!(!text.contains("Validation Results:"));
        assert!(!text.contains("Testing Results:"));
        assert!(text.contains("Training Results:"));
        assert!(text.contains("Model Summary:"));
    }

    #[test]
    fn section_order_is_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let mut setup = setup_at(&dir);
        setup.validate = true;

        let model = StubModel::relu(2, vec![1.0, 2.0]);
        save_results(
            &model,
            Some(&setup),
            &history_with_validation(),
            None,
            &["loss"],
        )
        .unwrap();

        let text =
            fs::read_to_string(dir.path().join("report.txt")).unwrap();
        let info = text.find("Training Info:").unwrap();
        let train = text.find("Training Results:").unwrap();
        let val = text.find("Validation Results:").unwrap();
        let summary = text.find("Model Summary:").unwrap();
        assert!(info < train && train < val && val < summary);
    }

    #[test]
    fn absent_setup_or_save_path_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let model = StubModel::relu(1, vec![1.0]);
        let history = History::new();

        save_results(&model, None, &history, None, &[]).unwrap();

        let mut setup = setup_at(&dir);
        setup.save_path = None;
        save_results(&model, Some(&setup), &history, None, &[]).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn rewriting_a_report_backs_up_the_old_one() {
        let dir = tempfile::tempdir().unwrap();
        let setup = setup_at(&dir);
        let stem = setup.save_path.clone().unwrap();
        let model = StubModel::relu(2, vec![1.0, 2.0]);
        let day = date("2026-08-25");

        let mut first = History::new();
        first.push("loss", 0.9);
        save_results_on(&model, &setup, &stem, &first, None, &["loss"], day).unwrap();
        let first_text = fs::read_to_string(format!("{stem}.txt")).unwrap();

        let mut second = History::new();
        second.push("loss", 0.1);
        save_results_on(&model, &setup, &stem, &second, None, &["loss"], day).unwrap();

        let backed_up = fs::read_to_string(format!("{stem}20260825.txt")).unwrap();
        assert_eq!(backed_up, first_text);
        assert!(fs::read_to_string(format!("{stem}.txt"))
            .unwrap()
            .contains("Loss: 0.1"));
    }

    #[test]
    fn missing_metric_in_history_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let setup = setup_at(&dir);
        let model = StubModel::relu(1, vec![1.0]);

        let err = save_results(&model, Some(&setup), &History::new(), None, &["loss"])
            .unwrap_err();
        assert!(err.to_string().contains("loss"));
    }

    #[test]
    fn eval_test_without_results_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut setup = setup_at(&dir);
        setup.eval_test = true;
        let model = StubModel::relu(1, vec![1.0]);

        let mut history = History::new();
        history.push("loss", 0.5);

        assert!(save_results(&model, Some(&setup), &history, None, &["loss"]).is_err());
    }

    #[test]
    fn title_case_matches_report_style() {
        assert_eq!(title_case("loss"), "Loss");
        assert_eq!(title_case("accuracy"), "Accuracy");
        assert_eq!(title_case("val_loss"), "Val_Loss");
        assert_eq!(title_case("mean absolute error"), "Mean Absolute Error");
        assert_eq!(title_case("MAPE"), "Mape");
    }
}
