// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use project_api::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{AppState, HandlerBindings, create_router, create_router_with};

// Route table
pub use crate::routes::{HandlerId, RouteEntry, USER_ROUTES};

// Token refresh boundary
pub use crate::token::{AccessToken, RefreshError, TokenRefresher};
