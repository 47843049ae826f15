//! # ELWOSA Tasks Gateway
//!
//! Serves the ELWOSA task list over HTTP. Tries the upstream Task API on
//! every request and falls back to reading the `tasks` table directly when
//! the upstream is down.
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use elwosa_tasks_api::{
    app::{build_router, AppState},
    config::Config,
    upstream,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "elwosa_tasks_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "ELWOSA Tasks Gateway v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let client = upstream::build_client(&config.upstream)?;

    tracing::info!(
        upstream = %config.upstream.url,
        db_host = %config.database.host,
        "Configuration loaded"
    );

    let bind_address = config.bind_address();
    let state = AppState::new(config, client);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown signal received, exiting...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
