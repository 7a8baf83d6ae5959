// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

//! Boundary to the external JSON Web Token refresh capability
//!
//! Token verification and issuance live in an external library. This module
//! only fixes the exchange shape: a refresh token in, an access token (or an
//! authentication failure) out.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Body of a refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Body of a successful refresh response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access: String,
    /// Present when the external library rotates refresh tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl AccessToken {
    pub fn new(access: impl Into<String>) -> Self {
        AccessToken {
            access: access.into(),
            refresh: None,
        }
    }

    pub fn with_rotated_refresh(mut self, refresh: impl Into<String>) -> Self {
        self.refresh = Some(refresh.into());
        self
    }
}

/// Failure of a refresh exchange
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Request body missing or without a `refresh` field
    #[error("refresh field is required")]
    MissingToken,

    /// `refresh` present but empty or whitespace only
    #[error("refresh field may not be blank")]
    BlankToken,

    #[error("token is invalid")]
    InvalidToken,

    #[error("token is expired")]
    Expired,

    #[error("token is blacklisted")]
    Blacklisted,

    /// The token backend itself failed
    #[error("token backend error: {0}")]
    Backend(String),
}

impl RefreshError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RefreshError::MissingToken | RefreshError::BlankToken => StatusCode::BAD_REQUEST,
            RefreshError::InvalidToken | RefreshError::Expired | RefreshError::Blacklisted => {
                StatusCode::UNAUTHORIZED
            }
            RefreshError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            RefreshError::MissingToken => json!({ "refresh": ["This field is required."] }),
            RefreshError::BlankToken => json!({ "refresh": ["This field may not be blank."] }),
            RefreshError::InvalidToken | RefreshError::Expired | RefreshError::Blacklisted => {
                json!({
                    "detail": "Token is invalid or expired",
                    "code": "token_not_valid",
                })
            }
            RefreshError::Backend(msg) => {
                tracing::error!("Token refresh backend failed: {}", msg);
                json!({ "detail": "Token refresh failed" })
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Issues a new access token from a refresh token.
///
/// Implemented by the external JWT library wired in by the embedding
/// application.
pub trait TokenRefresher: Send + Sync {
    fn refresh(&self, refresh_token: &str) -> Result<AccessToken, RefreshError>;
}

impl<F> TokenRefresher for F
where
    F: Fn(&str) -> Result<AccessToken, RefreshError> + Send + Sync,
{
    fn refresh(&self, refresh_token: &str) -> Result<AccessToken, RefreshError> {
        self(refresh_token)
    }
}
