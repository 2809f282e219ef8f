//! Churn prediction service - main entry point

use churn_api::model::{resolve_artifact_path, ModelState};
use churn_api::server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_api=info,tower_http=info".into()),
        )
        .init();

    // The artifact is loaded exactly once; a failure degrades the service
    // instead of aborting startup
    let artifact_path = resolve_artifact_path();
    let model = ModelState::load(&artifact_path);

    run_server(ServerConfig::default(), model).await
}
