// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

//! # Project API
//!
//! Backend HTTP service exposing a health check and the user route table.
//!
//! ## Main modules
//! - `api`: router construction, handler bindings and HTTP handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `routes`: the static user route table and reverse lookup
//! - `token`: boundary to the external JWT refresh capability
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
pub mod prelude;
pub mod routes;
pub mod token;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, normalize_prefix};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and handler bindings
pub use api::{
    AppState, HEALTH_PATH, HandlerBindings, create_router, create_router_with,
    handlers::HealthStatus,
};

/// Route table types
pub use routes::{HandlerId, HandlerKind, RouteEntry, RouteTable, USER_ROUTES};

/// Token refresh boundary
pub use token::{AccessToken, RefreshError, RefreshRequest, TokenRefresher};
