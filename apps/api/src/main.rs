use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgap::analysis::Taxonomy;
use skillgap::config::Config;
use skillgap::routes::build_router;
use skillgap::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill-Gap API v{}", env!("CARGO_PKG_VERSION"));

    // The taxonomy is the only startup dependency; refuse to serve without it.
    let taxonomy = Taxonomy::load(&config.taxonomy_path)
        .with_context(|| format!("Failed to load skills taxonomy from '{}'", config.taxonomy_path))?;

    let state = AppState::new(taxonomy, config.clone())?;
    info!(
        "Skill extractor ready ({} entries across {} domains)",
        state.extractor.entry_count(),
        state.taxonomy.len()
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
