// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

//! HTTP API module
//!
//! Mounts the health check and the user route table.
//!
//! # Endpoints
//! - `GET /health/` — health check
//! - `{prefix}/register/`, `{prefix}/login/`, `{prefix}/token/refresh/`,
//!   `{prefix}/profile/`, `{prefix}/update/` — user routes

mod bindings;
pub mod handlers;
mod state;

pub use bindings::HandlerBindings;
pub use state::AppState;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::config::normalize_prefix;
use crate::routes::USER_ROUTES;

/// Path of the health check endpoint
pub const HEALTH_PATH: &str = "/health/";

/// Creates the main Axum router with the default handler bindings
pub fn create_router(state: Arc<AppState>) -> Router {
    create_router_with(state, HandlerBindings::default())
}

/// Creates the main Axum router, mounting every user route under
/// `state.config.users_prefix` in registration order.
pub fn create_router_with(state: Arc<AppState>, mut bindings: HandlerBindings) -> Router {
    let mut router = Router::new().route(HEALTH_PATH, get(handlers::health_check));
    let prefix = normalize_prefix(&state.config.users_prefix);

    for entry in USER_ROUTES.entries() {
        let path = entry.mounted_path(&prefix);
        let method_router = match bindings.take(entry.handler) {
            Some(method_router) => method_router,
            None => {
                tracing::warn!(
                    "No handler bound for '{}' at {}; requests will get 501",
                    entry.name,
                    path
                );
                handlers::unbound(entry)
            }
        };
        tracing::debug!("Mounted {} -> {} ({})", path, entry.handler, entry.name);
        router = router.route(&path, method_router);
    }

    router.with_state(state)
}
