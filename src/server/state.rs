//! Application state management

use crate::model::ModelState;

/// Application state shared across handlers.
///
/// The model handle is created once at startup and never mutated afterward,
/// so it is shared read-only without locking.
pub struct AppState {
    pub model: ModelState,
}

impl AppState {
    pub fn new(model: ModelState) -> Self {
        Self { model }
    }
}
