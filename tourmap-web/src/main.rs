//! tourmap-web - tour date aggregation front end
//!
//! Joins the remote artist and tour-date collections into a filterable
//! web view and resolves top-track embeds through the Spotify catalog.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tourmap_common::config::ServiceConfig;
use tourmap_web::services::{GroupieClient, SpotifyClient};
use tourmap_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting tourmap-web v{}", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::parse();
    info!("Collection API: {}", config.collection_api);
    if config.spotify_client_id.is_empty() {
        info!("No Spotify credentials configured; embed lookups will fail upstream");
    }

    let groupie = GroupieClient::new(&config.collection_api)
        .map_err(|e| anyhow::anyhow!("Failed to build collection client: {}", e))?;
    let spotify = SpotifyClient::new(
        &config.spotify_client_id,
        &config.spotify_client_secret,
        &config.spotify_auth_url,
        &config.spotify_api_url,
    )
    .map_err(|e| anyhow::anyhow!("Failed to build Spotify client: {}", e))?;

    let state = AppState::new(groupie, spotify);
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("tourmap-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
