use std::sync::Arc;

use laudo_engine::ValuationEngine;
use laudo_narrative::NarrativeClient;
use laudo_store::SampleStore;

use crate::config::ServerConfig;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Comparable-sample store (JSON file in production, in-memory in tests).
    pub store: Arc<dyn SampleStore>,
    /// Local comparative valuation engine.
    pub engine: Arc<ValuationEngine>,
    /// Client for the generative narrative service.
    pub narrative: Arc<NarrativeClient>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SampleStore>,
        narrative: Arc<NarrativeClient>,
        config: ServerConfig,
    ) -> Self {
        let engine = Arc::new(ValuationEngine::new(Arc::clone(&store)));
        Self {
            store,
            engine,
            narrative,
            config: Arc::new(config),
        }
    }
}
