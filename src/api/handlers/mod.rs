// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

mod health;
mod token_refresh;

pub use health::{HealthStatus, health_check};
pub use token_refresh::token_refresh;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, any},
};
use serde_json::json;
use std::sync::Arc;

use crate::api::AppState;
use crate::routes::RouteEntry;

/// 501 answer for a route whose handler has not been supplied
pub fn not_configured(name: &str) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "detail": format!("{name} handler is not configured") })),
    )
        .into_response()
}

/// Placeholder bound to a route entry nobody provided a handler for
pub fn unbound(entry: &'static RouteEntry) -> MethodRouter<Arc<AppState>> {
    any(move || async move { not_configured(entry.name) })
}
