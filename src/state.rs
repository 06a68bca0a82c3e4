//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::health::PrivateShareMiddleware;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub middleware: Arc<PrivateShareMiddleware>,
}

impl AppState {
    /// Creates a new application state from the given configuration and component.
    pub fn new(config: AppConfig, middleware: PrivateShareMiddleware) -> Self {
        Self {
            config: Arc::new(config),
            middleware: Arc::new(middleware),
        }
    }
}
