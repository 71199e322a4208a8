// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! TheMob API Server
//!
//! Serves trip tracking, community reports, rewards and the mobility map
//! to the mobile client.

use std::sync::Arc;

use themob::{config::Config, db::MemoryDb, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting TheMob API");

    let db = if config.seed_mock_data {
        let db = MemoryDb::seeded();
        tracing::info!("Store seeded with demo data");
        db
    } else {
        MemoryDb::new()
    };

    tracing::info!(
        renderer = ?config.map_renderer,
        scheme = config.color_scheme.as_str(),
        "Map renderer selected"
    );

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), Arc::new(db)));

    // Build router
    let app = themob::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("themob=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
