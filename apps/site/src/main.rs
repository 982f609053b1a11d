mod config;
mod contact;
mod content;
mod errors;
mod extract;
mod models;
mod render;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::sink::{ContactSink, DiscardSink};
use crate::content::ContentStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting {} v{} ({})",
        config.app_name, config.app_version, config.app_env
    );

    // Static assets are served by reference; a missing file is a 404, not a startup error
    if !config.static_dir.exists() {
        tokio::fs::create_dir_all(&config.static_dir)
            .await
            .with_context(|| format!("Failed to create static dir {}", config.static_dir.display()))?;
        info!("Created static directory at {}", config.static_dir.display());
    } else {
        info!("Serving static files from {}", config.static_dir.display());
    }

    let store = ContentStore::seeded();
    info!(
        "Content store seeded: {} projects, {} jobs, {} degrees",
        store.projects().len(),
        store.experience().len(),
        store.education().len()
    );

    let contact_sink: Arc<dyn ContactSink> = Arc::new(DiscardSink);
    info!("Contact sink: {}", contact_sink.backend());

    if config.debug {
        info!("Debug mode: content editing routes enabled");
    }

    let addr = config.bind_addr();
    let state = AppState::new(store, config, contact_sink);

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
