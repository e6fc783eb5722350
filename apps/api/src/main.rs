mod clues;
mod config;
mod crossword;
mod errors;
mod generation;
mod ingest;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clues::{DefinitionLookup, DictionaryClient, OfflineLookup};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Crossword API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize definition lookup (DictionaryClient by default, offline via CLUE_LOOKUP_ENABLED)
    let definitions = build_definition_lookup(&config)?;

    let state = AppState {
        config: config.clone(),
        definitions,
    };

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_allowed_origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN must be a valid header value")?,
        )
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the definition source for clue text.
fn build_definition_lookup(config: &Config) -> Result<Arc<dyn DefinitionLookup>> {
    if !config.clue_lookup_enabled {
        info!("Clue lookup disabled; all clues use fallback text");
        return Ok(Arc::new(OfflineLookup));
    }

    let client = DictionaryClient::new(
        &config.dictionary_api_url,
        Duration::from_secs(config.clue_lookup_timeout_secs),
    )
    .context("Failed to build dictionary HTTP client")?;
    info!(
        "Dictionary client initialized ({}, timeout {}s)",
        config.dictionary_api_url, config.clue_lookup_timeout_secs
    );
    Ok(Arc::new(client))
}
