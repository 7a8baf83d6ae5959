use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::not_configured;
use crate::api::AppState;
use crate::token::{RefreshError, RefreshRequest};

/// POST {prefix}/token/refresh/
///
/// Hands the refresh token to the external refresher and relays its answer.
pub async fn token_refresh(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> Response {
    let Some(refresher) = state.token_refresher.as_ref() else {
        tracing::warn!("Token refresh requested but no refresher is configured");
        return not_configured("token-refresh");
    };

    let request = match payload {
        Ok(Json(request)) if !request.refresh.trim().is_empty() => request,
        Ok(_) => return RefreshError::BlankToken.into_response(),
        Err(rejection) => {
            tracing::debug!("Rejected token refresh body: {}", rejection);
            return RefreshError::MissingToken.into_response();
        }
    };

    match refresher.refresh(&request.refresh) {
        Ok(token) => (StatusCode::OK, Json(token)).into_response(),
        Err(e) => {
            tracing::debug!("Token refresh failed: {}", e);
            e.into_response()
        }
    }
}
