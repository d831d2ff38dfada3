//! Binary logistic regression trained by full-batch gradient descent.
//!
//! The model is `p = sigmoid(w · z + b)` where `z` is the feature row after
//! per-column standardization. Training is fully deterministic: no shuffling,
//! no random initialization, so identical inputs always produce identical
//! weights and probabilities.

use super::features::NUM_FEATURES;

const MAX_ITERS: usize = 2000;
const LEARNING_RATE: f64 = 0.3;
const L2: f64 = 1e-4;

/// A fitted logistic model, including the standardization transform learned
/// from the training data.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    weights: [f64; NUM_FEATURES],
    bias: f64,
    means: [f64; NUM_FEATURES],
    scales: [f64; NUM_FEATURES],
}

impl LogisticModel {
    /// Probability assigned to class 1 at the given point.
    pub fn predict_proba(&self, point: &[f64; NUM_FEATURES]) -> f64 {
        let mut z = self.bias;
        for j in 0..NUM_FEATURES {
            z += self.weights[j] * (point[j] - self.means[j]) / self.scales[j];
        }
        sigmoid(z)
    }

    /// Predicted class at the model's 0.5 decision boundary.
    pub fn predict(&self, point: &[f64; NUM_FEATURES]) -> u8 {
        u8::from(self.predict_proba(point) >= 0.5)
    }
}

/// Fit a logistic model. Returns `None` when the data cannot support a fit:
/// no rows, a single label class, or diverging (non-finite) weights.
pub fn fit(x: &[[f64; NUM_FEATURES]], y: &[u8]) -> Option<LogisticModel> {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return None;
    }
    let positives = y.iter().filter(|&&l| l == 1).count();
    if positives == 0 || positives == y.len() {
        return None;
    }

    let (means, scales) = standardization(x);
    let n = x.len() as f64;
    let mut weights = [0.0f64; NUM_FEATURES];
    let mut bias = 0.0f64;

    for i in 0..MAX_ITERS {
        let lr = LEARNING_RATE / (1.0 + 0.01 * i as f64);
        let mut grad_w = [0.0f64; NUM_FEATURES];
        let mut grad_b = 0.0f64;
        for (row, &label) in x.iter().zip(y) {
            let mut z = bias;
            for j in 0..NUM_FEATURES {
                z += weights[j] * (row[j] - means[j]) / scales[j];
            }
            let err = sigmoid(z) - f64::from(label);
            for j in 0..NUM_FEATURES {
                grad_w[j] += err * (row[j] - means[j]) / scales[j];
            }
            grad_b += err;
        }
        for j in 0..NUM_FEATURES {
            weights[j] -= lr * (grad_w[j] / n + L2 * weights[j]);
            if !weights[j].is_finite() {
                return None;
            }
        }
        bias -= lr * grad_b / n;
        if !bias.is_finite() {
            return None;
        }
    }

    Some(LogisticModel {
        weights,
        bias,
        means,
        scales,
    })
}

/// Per-column mean and standard deviation. A constant column (the broadcast
/// venue flag is always one) gets unit scale so it contributes nothing
/// instead of dividing by zero.
fn standardization(
    x: &[[f64; NUM_FEATURES]],
) -> ([f64; NUM_FEATURES], [f64; NUM_FEATURES]) {
    let n = x.len() as f64;
    let mut means = [0.0f64; NUM_FEATURES];
    for row in x {
        for j in 0..NUM_FEATURES {
            means[j] += row[j];
        }
    }
    for m in &mut means {
        *m /= n;
    }

    let mut scales = [0.0f64; NUM_FEATURES];
    for row in x {
        for j in 0..NUM_FEATURES {
            scales[j] += (row[j] - means[j]).powi(2);
        }
    }
    for s in &mut scales {
        *s = (*s / n).sqrt();
        if *s <= 0.0 {
            *s = 1.0;
        }
    }
    (means, scales)
}

/// Numerically stable logistic sigmoid.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}
