mod config;
mod errors;
mod handoff;
mod landing;
mod pricing;
mod routes;
mod sessions;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::sessions::spawn_idle_sweeper;
use crate::state::AppState;

const SWEEP_PERIOD: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} PhotoBook site v{}", config.studio_name, env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone());

    let max_idle = chrono::Duration::minutes(config.session_idle_minutes);
    spawn_idle_sweeper(state.sessions.clone(), max_idle, SWEEP_PERIOD);
    info!(
        "Session sweeper running (idle timeout: {} min)",
        config.session_idle_minutes
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
