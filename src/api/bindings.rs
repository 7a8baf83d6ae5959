//! Association of route-table handler identifiers with concrete axum handlers

use axum::routing::{MethodRouter, post};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{AppState, handlers};
use crate::routes::HandlerId;

/// Handlers supplied for the user route table, keyed by [`HandlerId`].
///
/// The default set binds only [`HandlerId::TokenRefresh`] to the built-in
/// refresh boundary; the remaining user handlers come from the embedding
/// application.
pub struct HandlerBindings {
    routes: BTreeMap<HandlerId, MethodRouter<Arc<AppState>>>,
}

impl Default for HandlerBindings {
    fn default() -> Self {
        HandlerBindings::empty().bind(HandlerId::TokenRefresh, post(handlers::token_refresh))
    }
}

impl HandlerBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// No handler bound at all
    pub fn empty() -> Self {
        HandlerBindings {
            routes: BTreeMap::new(),
        }
    }

    /// Binds `handler` to `id`, replacing any previous binding.
    pub fn bind(mut self, id: HandlerId, handler: MethodRouter<Arc<AppState>>) -> Self {
        if self.routes.insert(id, handler).is_some() {
            tracing::debug!("Replaced handler binding for {}", id);
        }
        self
    }

    pub fn is_bound(&self, id: HandlerId) -> bool {
        self.routes.contains_key(&id)
    }

    pub(crate) fn take(&mut self, id: HandlerId) -> Option<MethodRouter<Arc<AppState>>> {
        self.routes.remove(&id)
    }
}
