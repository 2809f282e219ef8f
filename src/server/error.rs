//! Error types for the HTTP surface

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Inference error: {0}")]
    Inference(#[from] crate::error::ChurnError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::ModelUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ServerError::Inference(e) => {
                // Only the log carries the detail
                tracing::error!(detail = %e, "Inference failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
