//! Pre-fitted feature scaling

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ChurnError, Result};

/// Parameters for one scaled column, computed by the offline trainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub center: f64,
    pub scale: f64,
}

/// Standard scaler restored from the artifact: (x - center) / scale.
///
/// Only the transform half lives here; fitting happens offline where the
/// artifact is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    params: HashMap<String, ScalerParams>,
}

impl StandardScaler {
    pub fn new(params: HashMap<String, ScalerParams>) -> Self {
        Self { params }
    }

    /// Scale every fitted column present in the frame.
    /// Builds all replacement columns first, then applies them in a single
    /// pass (avoids N DataFrame clones for N columns).
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let replacements: Vec<Series> = self
            .params
            .iter()
            .filter_map(|(col_name, params)| {
                df.column(col_name).ok().map(|column| {
                    let series = column.as_materialized_series();
                    self.scale_series(series, params)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut result = df.clone();
        for scaled in replacements {
            result = result
                .with_column(scaled)
                .map_err(|e| ChurnError::DataError(e.to_string()))?
                .clone();
        }

        Ok(result)
    }

    fn scale_series(&self, series: &Series, params: &ScalerParams) -> Result<Series> {
        let cast = series
            .cast(&DataType::Float64)
            .map_err(|e| ChurnError::DataError(e.to_string()))?;
        let ca = cast
            .f64()
            .map_err(|e| ChurnError::DataError(e.to_string()))?;

        // A degenerate scale of 0 would divide out the column entirely
        let scale = if params.scale == 0.0 { 1.0 } else { params.scale };

        let scaled: Float64Chunked = ca
            .into_iter()
            .map(|opt| opt.map(|v| (v - params.center) / scale))
            .collect();

        Ok(scaled.with_name(series.name().clone()).into_series())
    }
}
