use std::sync::Arc;

use project_api::{AppState, Config, HEALTH_PATH, Result, USER_ROUTES, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    config.validate().inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    let addr = config.socket_addr()?;
    let prefix = config.users_prefix.clone();

    let state = Arc::new(AppState::new(config));

    // Graceful shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Project API starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET {:<28} - Health check", HEALTH_PATH);
    for entry in USER_ROUTES.entries() {
        tracing::info!(
            "  - {:<32} - {} ({})",
            entry.mounted_path(&prefix),
            entry.name,
            entry.handler
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG takes precedence; default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
