//! HTTP request handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::model::{CustomerRecord, ModelState, PredictionResult, CHURN_THRESHOLD};

use super::error::{Result, ServerError};
use super::state::AppState;

/// Liveness/info message, identical regardless of model state.
pub async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Churn prediction API is up. POST a customer record to /predict, or GET /health for service status.",
    }))
}

/// Score one customer record against the loaded pipeline.
///
/// Field presence and types are enforced by the `Json` extractor before this
/// runs; a schema violation never reaches the model.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(record): Json<CustomerRecord>,
) -> Result<Json<PredictionResult>> {
    let pipeline = match &state.model {
        ModelState::Ready(pipeline) => pipeline,
        ModelState::Unavailable { reason } => {
            return Err(ServerError::ModelUnavailable(reason.clone()));
        }
    };

    let row = record.to_row()?;
    let proba = pipeline.predict_proba(&row)?;
    // Positive (churn) class is index 1 of the [negative, positive] output
    let churn_probability = proba[[0, 1]];
    debug!(probability = churn_probability, "Scored customer record");

    Ok(Json(PredictionResult::from_probability(churn_probability)))
}

/// Service health plus model load status.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model_loaded": state.model.is_ready(),
    }))
}

/// Metadata about the loaded artifact.
pub async fn model_info(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>> {
    match &state.model {
        ModelState::Ready(pipeline) => Ok(Json(serde_json::json!({
            "version": pipeline.version,
            "trained_at": pipeline.trained_at,
            "feature_columns": pipeline.feature_columns,
            "threshold": CHURN_THRESHOLD,
        }))),
        ModelState::Unavailable { reason } => Err(ServerError::ModelUnavailable(reason.clone())),
    }
}
