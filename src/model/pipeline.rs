//! The serialized classification pipeline and its inference path

use ndarray::Array2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ChurnError, Result};

use super::classifier::LogisticModel;
use super::encoder::OneHotEncoder;
use super::scaler::StandardScaler;

/// Pre-fitted churn classification pipeline, restored from the artifact.
///
/// Holds the full feature contract: column names in training order, the
/// fitted preprocessing stages, and the classifier weights. Read-only after
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnPipeline {
    /// Artifact version marker written by the trainer
    pub version: String,
    /// When the artifact was produced (RFC 3339, informational)
    pub trained_at: String,
    /// Input columns in training order. These names must match the request
    /// schema verbatim; a row missing any of them fails inference.
    pub feature_columns: Vec<String>,
    scaler: StandardScaler,
    encoder: OneHotEncoder,
    classifier: LogisticModel,
}

impl ChurnPipeline {
    pub fn new(
        version: String,
        trained_at: String,
        feature_columns: Vec<String>,
        scaler: StandardScaler,
        encoder: OneHotEncoder,
        classifier: LogisticModel,
    ) -> Self {
        Self {
            version,
            trained_at,
            feature_columns,
            scaler,
            encoder,
            classifier,
        }
    }

    /// Load a pipeline from a JSON artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let pipeline: Self = serde_json::from_str(&json)?;
        Ok(pipeline)
    }

    /// Save the pipeline as a JSON artifact, the same format the offline
    /// trainer emits.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Total width of the encoded feature matrix.
    pub fn n_features(&self) -> usize {
        self.feature_columns
            .iter()
            .map(|col| self.encoder.width(col).max(1))
            .sum()
    }

    /// Class-probability output for each row of `df`, columns ordered
    /// [negative, positive].
    pub fn predict_proba(&self, df: &DataFrame) -> Result<Array2<f64>> {
        let x = self.encode_features(df)?;
        let positive = self.classifier.predict_proba(&x)?;

        let mut proba = Array2::zeros((positive.len(), 2));
        for (i, p) in positive.iter().enumerate() {
            proba[[i, 0]] = 1.0 - p;
            proba[[i, 1]] = *p;
        }

        Ok(proba)
    }

    /// Expand the named columns into the numeric matrix the classifier
    /// consumes: scaled numerics stay single columns, categoricals expand
    /// into their one-hot width, all in training order.
    fn encode_features(&self, df: &DataFrame) -> Result<Array2<f64>> {
        let scaled = self.scaler.transform(df)?;
        let n_rows = scaled.height();

        // Grown column-major, one Vec per encoded output column
        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(self.n_features());

        for col_name in &self.feature_columns {
            let column = scaled
                .column(col_name)
                .map_err(|_| ChurnError::FeatureNotFound(col_name.clone()))?;
            let series = column.as_materialized_series();

            if self.encoder.categories(col_name).is_some() {
                columns.extend(self.encode_categorical(col_name, series, n_rows)?);
            } else {
                columns.push(Self::numeric_values(col_name, series)?);
            }
        }

        let n_cols = columns.len();
        // Row-major construction from column-major data
        Ok(Array2::from_shape_fn((n_rows, n_cols), |(i, j)| {
            columns[j][i]
        }))
    }

    fn encode_categorical(
        &self,
        col_name: &str,
        series: &Series,
        n_rows: usize,
    ) -> Result<Vec<Vec<f64>>> {
        let ca = series
            .str()
            .map_err(|e| ChurnError::DataError(e.to_string()))?;

        let width = self.encoder.width(col_name);
        let mut onehot = vec![vec![0.0; n_rows]; width];

        for (row, value) in ca.into_iter().enumerate() {
            let value = value.ok_or_else(|| {
                ChurnError::DataError(format!("null value in column {col_name}"))
            })?;
            let encoded = self.encoder.encode_value(col_name, value)?;
            for (j, bit) in encoded.iter().enumerate() {
                onehot[j][row] = *bit;
            }
        }

        Ok(onehot)
    }

    fn numeric_values(col_name: &str, series: &Series) -> Result<Vec<f64>> {
        let cast = series
            .cast(&DataType::Float64)
            .map_err(|e| ChurnError::DataError(e.to_string()))?;
        let ca = cast
            .f64()
            .map_err(|e| ChurnError::DataError(e.to_string()))?;

        ca.into_iter()
            .map(|v| {
                v.ok_or_else(|| ChurnError::DataError(format!("null value in column {col_name}")))
            })
            .collect()
    }
}
