//! Shared application state for the web server.

use std::sync::Arc;

use pathovar_classifier::AnalysisPipeline;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    /// Variant pre-filled in the analysis form.
    pub example_variant: String,
}

impl AppState {
    pub fn new(pipeline: Arc<AnalysisPipeline>, example_variant: String) -> Self {
        Self { pipeline, example_variant }
    }
}

pub type SharedState = Arc<AppState>;
