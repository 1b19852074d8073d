//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::reporting::PayRunProcessor;
use crate::store::PayEventStore;

/// Shared application state.
///
/// Contains the loaded engine configuration and the pay run processor
/// bound to the injected event store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    processor: Arc<PayRunProcessor>,
}

impl AppState {
    /// Creates a new application state over the given configuration and
    /// event store.
    pub fn new(config: EngineConfig, store: Arc<dyn PayEventStore>) -> Self {
        Self {
            config: Arc::new(config),
            processor: Arc::new(PayRunProcessor::new(store)),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the pay run processor.
    pub fn processor(&self) -> &PayRunProcessor {
        &self.processor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
