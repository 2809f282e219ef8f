//! Logistic classifier restored from the artifact

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{ChurnError, Result};

/// Binary logistic model: P(positive | x) = sigmoid(w · x + b).
///
/// Coefficients come pre-fitted from the offline trainer; there is no
/// training path in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Fitted coefficients, one per encoded feature
    pub coefficients: Array1<f64>,
    /// Fitted intercept
    pub intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients: Array1::from_vec(coefficients),
            intercept,
        }
    }

    /// Sigmoid function
    fn sigmoid(z: &Array1<f64>) -> Array1<f64> {
        z.mapv(|v| 1.0 / (1.0 + (-v).exp()))
    }

    /// Positive-class probability for each row of `x`.
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(ChurnError::ShapeError {
                expected: format!("{} features", self.coefficients.len()),
                actual: format!("{} features", x.ncols()),
            });
        }

        let linear = x.dot(&self.coefficients) + self.intercept;
        Ok(Self::sigmoid(&linear))
    }
}
