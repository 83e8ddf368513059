//! Q1Report - Application Entry Point
//!
//! This is the main entry point for the Q1Report server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use q1report::{config::CONFIG, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Q1Report server...");

    // Load timing data
    tracing::info!(dir = %CONFIG.data.dir.display(), "Loading timing data...");
    let state = AppState::load(CONFIG.clone()).await?;

    let report = state.report().await;
    if report.is_empty() {
        tracing::warn!("No drivers loaded; the report will be empty until reloaded");
    }

    // Build the router
    let app = handlers::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
