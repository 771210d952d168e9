//! tourmap-web library - tour date aggregation front end
//!
//! Aggregates two remote JSON collections (artists, tour-date relations),
//! joins them by id, and serves filtered views plus a top-track embed
//! lookup. No local store: every request is served from freshly fetched
//! remote state.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;
pub mod error;
pub mod services;

use services::{GroupieClient, SpotifyClient};

/// Application state shared across HTTP handlers.
///
/// Holds only the two remote clients, constructed once at startup and
/// injected here; there is no mutable state shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Client for the artist/relation collection API
    pub groupie: GroupieClient,
    /// Client for the track-embed enrichment lookup
    pub spotify: SpotifyClient,
}

impl AppState {
    /// Create new application state
    pub fn new(groupie: GroupieClient, spotify: SpotifyClient) -> Self {
        Self { groupie, spotify }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/style.css", get(api::serve_style_css))
        .route("/api/artists", get(api::list_artists))
        .route("/api/artists/:id", get(api::get_artist))
        .route("/api/artists/:id/embed", get(api::get_embed))
        .route("/api/suggestions", get(api::get_suggestions))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
