//! API route definitions

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handlers, state::AppState};

async fn handle_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found. POST /predict to score a record, or GET /health for service status.",
        })),
    )
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::read_root))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health_check))
        .route("/model", get(handlers::model_info))
        .fallback(handle_404)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
