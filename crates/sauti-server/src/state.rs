//! Application state management

use std::sync::Arc;

use sauti_core::{PipelineConfig, SynthesisBackend};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn SynthesisBackend>,
    pub pipeline_config: PipelineConfig,
}

impl AppState {
    pub fn new(backend: Arc<dyn SynthesisBackend>, pipeline_config: PipelineConfig) -> Self {
        Self {
            backend,
            pipeline_config,
        }
    }
}
