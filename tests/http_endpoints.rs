// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ProjectApp contributors

use axum::{
    Router,
    http::{Method, Request, StatusCode, header},
    routing::{get, post},
};
use http_body_util::BodyExt;
use project_api::{
    AccessToken, AppState, Config, HandlerBindings, HandlerId, RefreshError, USER_ROUTES,
    create_router, create_router_with,
};
use std::sync::Arc;
use tower::ServiceExt;

fn make_state() -> Arc<AppState> {
    Arc::new(AppState::new(Config::default()))
}

fn state_with_refresher() -> Arc<AppState> {
    let refresher = |token: &str| match token {
        "valid-refresh" => Ok(AccessToken::new("new-access")),
        "expired-refresh" => Err(RefreshError::Expired),
        "broken-backend" => Err(RefreshError::Backend("signing key unavailable".to_string())),
        _ => Err(RefreshError::InvalidToken),
    };
    Arc::new(AppState::new(Config::default()).with_token_refresher(Arc::new(refresher)))
}

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// --- /health/ endpoint ---

#[tokio::test]
async fn health_returns_200_with_fixed_body() {
    let app = create_router(make_state());

    let (status, body) = send(app, Method::GET, "/health/", "").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        health,
        serde_json::json!({
            "status": "healthy",
            "message": "API is running successfully"
        })
    );
}

#[tokio::test]
async fn health_is_identical_across_calls() {
    let app = create_router(make_state());

    let (_, first) = send(app.clone(), Method::GET, "/health/", "").await;
    let (_, second) = send(app, Method::GET, "/health/", "").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn health_rejects_post() {
    let app = create_router(make_state());

    let (status, _) = send(app, Method::POST, "/health/", "{}").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_answers_head() {
    let app = create_router(make_state());

    let (status, _) = send(app, Method::HEAD, "/health/", "").await;

    assert_eq!(status, StatusCode::OK);
}

// --- user routes ---

#[tokio::test]
async fn unbound_user_routes_return_501() {
    for name in ["user-register", "user-login", "user-profile", "user-update"] {
        let app = create_router(make_state());
        let path = USER_ROUTES
            .reverse_with_prefix("/api/v1/users", name)
            .unwrap();

        let (status, body) = send(app, Method::POST, &path, "{}").await;

        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{path}");
        let detail: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            detail["detail"],
            format!("{name} handler is not configured")
        );
    }
}

#[tokio::test]
async fn bound_handlers_receive_requests() {
    let bindings = HandlerBindings::new()
        .bind(
            HandlerId::UserRegister,
            post(|| async { (StatusCode::CREATED, "registered") }),
        )
        .bind(HandlerId::UserLogin, post(|| async { "logged in" }))
        .bind(HandlerId::UserProfile, get(|| async { "profile" }))
        .bind(
            HandlerId::UserUpdate,
            get(|| async { "current" }).put(|| async { "updated" }),
        );
    let app = create_router_with(make_state(), bindings);

    let (status, body) = send(app.clone(), Method::POST, "/api/v1/users/register/", "{}").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "registered");

    let (status, body) = send(app.clone(), Method::POST, "/api/v1/users/login/", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "logged in");

    let (status, body) = send(app.clone(), Method::GET, "/api/v1/users/profile/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "profile");

    let (status, body) = send(app.clone(), Method::PUT, "/api/v1/users/update/", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "updated");

    // Method guards belong to the bound handler
    let (status, _) = send(app, Method::DELETE, "/api/v1/users/profile/", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn user_routes_follow_configured_prefix() {
    let config = Config::from_lookup(|key| (key == "USERS_PREFIX").then(|| "/auth/".to_string()));
    let bindings =
        HandlerBindings::new().bind(HandlerId::UserLogin, post(|| async { "logged in" }));
    let app = create_router_with(Arc::new(AppState::new(config)), bindings);

    let (status, _) = send(app.clone(), Method::POST, "/auth/login/", "{}").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app, Method::POST, "/api/v1/users/login/", "{}").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- token/refresh/ ---

#[tokio::test]
async fn token_refresh_returns_access_token() {
    let app = create_router(state_with_refresher());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/users/token/refresh/",
        r#"{"refresh": "valid-refresh"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(token, serde_json::json!({ "access": "new-access" }));
}

#[tokio::test]
async fn token_refresh_rejects_invalid_and_expired_tokens() {
    for token in ["garbage", "expired-refresh"] {
        let app = create_router(state_with_refresher());

        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/users/token/refresh/",
            &format!(r#"{{"refresh": "{token}"}}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let err: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(err["code"], "token_not_valid");
    }
}

#[tokio::test]
async fn token_refresh_requires_refresh_field() {
    for body in ["{}", r#"{"other": "x"}"#, "not json"] {
        let app = create_router(state_with_refresher());

        let (status, resp) = send(app, Method::POST, "/api/v1/users/token/refresh/", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        let err: serde_json::Value = serde_json::from_str(&resp).unwrap();
        assert_eq!(err["refresh"][0], "This field is required.");
    }
}

#[tokio::test]
async fn token_refresh_rejects_blank_refresh_field() {
    for body in [r#"{"refresh": ""}"#, r#"{"refresh": "   "}"#] {
        let app = create_router(state_with_refresher());

        let (status, resp) = send(app, Method::POST, "/api/v1/users/token/refresh/", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        let err: serde_json::Value = serde_json::from_str(&resp).unwrap();
        assert_eq!(err["refresh"][0], "This field may not be blank.");
    }
}

#[tokio::test]
async fn token_refresh_backend_failure_is_500() {
    let app = create_router(state_with_refresher());

    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/users/token/refresh/",
        r#"{"refresh": "broken-backend"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn token_refresh_only_accepts_post() {
    let app = create_router(state_with_refresher());

    let (status, _) = send(app, Method::GET, "/api/v1/users/token/refresh/", "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn token_refresh_without_refresher_returns_501() {
    let app = create_router(make_state());

    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/users/token/refresh/",
        r#"{"refresh": "valid-refresh"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

// --- 404 for unknown routes ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = create_router(make_state());

    let (status, _) = send(app, Method::GET, "/unknown", "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
