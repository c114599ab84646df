//! # Cardfile Proxy Server
//!
//! This is the credential-injecting proxy for the Cardfile contact lookup.
//! Client-side code cannot hold the CRM API secret, so every contact search
//! and orders lookup passes through here, where the bearer token and site id
//! are attached before the request is relayed upstream.
//!
//! ## Endpoints
//!
//! - `POST /api/contacts/query`: relay a structured contact search
//! - `GET /api/orders/member/:member_id`: relay a member's orders, filtered
//! - `GET /health`: liveness check
//!
//! ## Usage
//!
//! ```bash
//! WIX_API_KEY=... WIX_SITE_ID=... cargo run -p cardfile-server
//! ```

use cardfile_server::app::{build_router, AppState};
use cardfile_server::config::Config;
use cardfile_server::upstream::CrmClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardfile_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Cardfile proxy server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    let crm = CrmClient::new(&config)?;

    let bind_address = config.bind_address();
    let state = AppState::new(crm, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received, exiting...");
    }
}
