use thiserror::Error;
use tracing::debug;

use crate::stats::GameRow;

use super::features::{build_features, query_point, NUM_FEATURES};
use super::logistic;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not enough games to cross-validate: {rows} rows for {folds} folds")]
    InsufficientData { rows: usize, folds: usize },
    #[error("model training diverged")]
    TrainingFailed,
}

/// Which side of the target point total the model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Over,
    Under,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub verdict: Verdict,
    /// Mean held-out accuracy across folds; absent on the degenerate path.
    pub cv_accuracy: Option<f64>,
    /// Probability mass the refit model puts on the Over class at the query
    /// point; absent on the degenerate path.
    pub confidence: Option<f64>,
}

/// Predict whether the player clears `threshold` points in the upcoming game.
///
/// Labels every aggregated game as over/under the threshold, short-circuits
/// when only one class is present (a model trained on a single class is
/// undefined), cross-validates a logistic regression over the feature space,
/// refits on the full dataset, and evaluates it at the synthetic query point.
pub fn predict(
    rows: &[GameRow],
    threshold: u32,
    home: bool,
    folds: usize,
) -> Result<PredictionReport, ModelError> {
    let (x, y) = build_features(rows, threshold, home);

    // Degenerate labels: every game landed on the same side. The answer is
    // deterministic and there is nothing to train, so accuracy and confidence
    // are absent rather than fabricated.
    let overs = y.iter().filter(|&&l| l == 1).count();
    if overs == 0 {
        debug!("every game is at or below {} points; skipping training", threshold);
        return Ok(PredictionReport {
            verdict: Verdict::Under,
            cv_accuracy: None,
            confidence: None,
        });
    }
    if overs == y.len() {
        debug!("every game is above {} points; skipping training", threshold);
        return Ok(PredictionReport {
            verdict: Verdict::Over,
            cv_accuracy: None,
            confidence: None,
        });
    }

    if rows.len() < folds {
        return Err(ModelError::InsufficientData {
            rows: rows.len(),
            folds,
        });
    }

    let cv_accuracy = cross_validate(&x, &y, folds);
    debug!(
        "cross-validated accuracy over {} folds: {:.3}",
        folds, cv_accuracy
    );

    // Refit on the full dataset for the final prediction.
    let model = logistic::fit(&x, &y).ok_or(ModelError::TrainingFailed)?;
    let point = query_point(threshold, home);
    let confidence = model.predict_proba(&point);
    let verdict = if model.predict(&point) == 1 {
        Verdict::Over
    } else {
        Verdict::Under
    };

    Ok(PredictionReport {
        verdict,
        cv_accuracy: Some(cv_accuracy),
        confidence: Some(confidence),
    })
}

/// Mean held-out accuracy over `folds` deterministic contiguous partitions.
/// Each partition is evaluated once against a model trained on the rest. A
/// training split that collapses to a single class predicts that class
/// outright instead of fitting.
fn cross_validate(x: &[[f64; NUM_FEATURES]], y: &[u8], folds: usize) -> f64 {
    let n = x.len();
    let base = n / folds;
    let remainder = n % folds;

    let mut total_accuracy = 0.0;
    let mut start = 0;
    for fold in 0..folds {
        let size = base + usize::from(fold < remainder);
        let end = start + size;

        let mut train_x = Vec::with_capacity(n - size);
        let mut train_y = Vec::with_capacity(n - size);
        for i in (0..n).filter(|i| *i < start || *i >= end) {
            train_x.push(x[i]);
            train_y.push(y[i]);
        }

        let predict_row: Box<dyn Fn(&[f64; NUM_FEATURES]) -> u8> =
            match single_class(&train_y) {
                Some(class) => Box::new(move |_| class),
                None => match logistic::fit(&train_x, &train_y) {
                    Some(model) => Box::new(move |row| model.predict(row)),
                    // Diverged fold: fall back to the majority training label.
                    None => {
                        let majority = majority_class(&train_y);
                        Box::new(move |_| majority)
                    }
                },
            };

        let correct = (start..end)
            .filter(|&i| predict_row(&x[i]) == y[i])
            .count();
        total_accuracy += correct as f64 / size as f64;
        start = end;
    }

    total_accuracy / folds as f64
}

fn single_class(labels: &[u8]) -> Option<u8> {
    let overs = labels.iter().filter(|&&l| l == 1).count();
    if overs == 0 {
        Some(0)
    } else if overs == labels.len() {
        Some(1)
    } else {
        None
    }
}

fn majority_class(labels: &[u8]) -> u8 {
    let overs = labels.iter().filter(|&&l| l == 1).count();
    u8::from(overs * 2 >= labels.len())
}
