// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ScoutFox Widgets Server
//!
//! Serves the family activity widgets, backed by the remote family API.

use scoutfox_widgets::{config::Config, services::FamilyApiClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        family_api = %config.family_api_url,
        "Starting ScoutFox widgets"
    );

    let family_api = FamilyApiClient::from_config(&config)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        family_api,
    });

    let app = scoutfox_widgets::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scoutfox_widgets=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
