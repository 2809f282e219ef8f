//! Model artifact handling and the inference path
//!
//! The classification pipeline is trained and serialized offline; this
//! module only restores it and evaluates it:
//! - Request/response entities and single-row construction
//! - The restored pipeline: one-hot encoding, scaling, logistic scoring
//! - One-shot startup loading into a typed ready/unavailable state

mod classifier;
mod encoder;
mod loader;
mod pipeline;
mod record;
mod scaler;

pub use classifier::LogisticModel;
pub use encoder::OneHotEncoder;
pub use loader::{resolve_artifact_path, ModelState};
pub use pipeline::ChurnPipeline;
pub use record::{
    CustomerRecord, PredictionResult, CHURN_THRESHOLD, FEATURE_COLUMNS, LABEL_CHURN,
    LABEL_NO_CHURN,
};
pub use scaler::{ScalerParams, StandardScaler};
