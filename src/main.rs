use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use weather_api::app_state::build_app_state;
use weather_api::config::AppConfig;
use weather_api::logging::init_tracing;
use weather_api::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Invalid configuration aborts here, before anything is served
    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(config.log_dir.as_deref())?;

    if config.port_is_default {
        info!("Using default TCP port {}...", config.port);
    }

    let state = build_app_state(&config)?;
    let app = app_router().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Starting Weather API Server on http://127.0.0.1:{}/", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", err);
        // Keep serving; only a real signal stops the server
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}
