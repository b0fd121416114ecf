mod api;
mod app_state;
mod config;
mod debug;
mod domain;
mod errors;
mod logging;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::app_state::build_app_state;
use crate::config::AppConfig;
use crate::domain::metric::clock::SystemClock;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real deployments use the process environment.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = logging::init_logging(config.log_dir.as_deref())?;

    if let Some(raw_now) = config.debug_at.as_deref() {
        return debug::run_debug(&config, raw_now).await;
    }

    let state = build_app_state(&config, Arc::new(SystemClock))?;
    let app = routes::app_router(state);

    let (host, port) = config.bind_target();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    let addr = listener.local_addr().context("listener has no local address")?;

    info!(
        %addr,
        tz_offset = %config.tz_offset,
        daily_min = config.daily_min,
        daily_max = config.daily_max,
        "🚀 sales metrics server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
