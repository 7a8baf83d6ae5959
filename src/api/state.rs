//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::token::TokenRefresher;

/// Shared application state
pub struct AppState {
    pub config: Config,
    /// External token-refresh capability; `None` until the embedding
    /// application wires one in.
    pub token_refresher: Option<Arc<dyn TokenRefresher>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            token_refresher: None,
        }
    }

    pub fn with_token_refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.token_refresher = Some(refresher);
        self
    }
}
