//! Shared application state.

use std::sync::Arc;

use nutriscan_core::Detector;

/// State injected into every handler: the read-only detector handle.
///
/// The detector is loaded once at startup and never mutated, so requests
/// share it without locking.
pub struct AppState {
    pub detector: Arc<dyn Detector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn Detector>) -> Self {
        Self { detector }
    }
}
