//! One-shot artifact loading at process startup

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use super::pipeline::ChurnPipeline;

/// File name of the model artifact
const ARTIFACT_FILE: &str = "churn_model.json";

/// Outcome of the startup artifact load.
///
/// The service keeps running when the artifact is unusable; the degraded
/// branch carries the reason handlers surface to clients.
#[derive(Debug, Clone)]
pub enum ModelState {
    Ready(Arc<ChurnPipeline>),
    Unavailable { reason: String },
}

impl ModelState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }

    /// Load the artifact exactly once, mapping any failure into the
    /// degraded state instead of propagating it. The process starts either
    /// way.
    pub fn load(path: &Path) -> ModelState {
        match ChurnPipeline::load(path) {
            Ok(pipeline) => {
                info!(
                    path = %path.display(),
                    version = %pipeline.version,
                    features = pipeline.feature_columns.len(),
                    "Model artifact loaded"
                );
                ModelState::Ready(Arc::new(pipeline))
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    detail = %e,
                    "Failed to load model artifact, serving degraded"
                );
                ModelState::Unavailable {
                    reason: format!("model artifact could not be loaded: {e}"),
                }
            }
        }
    }
}

/// Resolve the artifact path: `MODEL_PATH` env var first, then candidates
/// relative to the executable's directory, then a manifest-relative fallback
/// so `cargo run` works from any working directory.
pub fn resolve_artifact_path() -> PathBuf {
    if let Ok(path) = std::env::var("MODEL_PATH") {
        return PathBuf::from(path);
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    let candidates = [
        exe_dir.join("models").join(ARTIFACT_FILE),
        exe_dir.join(ARTIFACT_FILE),
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("models")
            .join(ARTIFACT_FILE),
    ];

    for candidate in &candidates {
        if candidate.exists() {
            return candidate.clone();
        }
    }

    // Last resort keeps the diagnostic path meaningful
    PathBuf::from("models").join(ARTIFACT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_degrades() {
        let state = ModelState::load(Path::new("/nonexistent/churn_model.json"));
        assert!(!state.is_ready());
        match state {
            ModelState::Unavailable { reason } => {
                assert!(reason.contains("could not be loaded"));
            }
            ModelState::Ready(_) => unreachable!(),
        }
    }

    #[test]
    fn test_corrupt_artifact_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("churn_model.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let state = ModelState::load(&path);
        assert!(!state.is_ready());
    }
}
