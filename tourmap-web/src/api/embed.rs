//! Track embed handler
//!
//! The one enrichment lookup: artist id -> catalog search -> top track ->
//! embeddable widget. Enrichment failures degrade to an error response;
//! they never take the serving process down.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use tourmap_common::models::TrackEmbed;

/// GET /api/artists/:id/embed
///
/// 404 for an unknown artist id or an artist with no catalog match;
/// 502 when the catalog service itself fails.
pub async fn get_embed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TrackEmbed>> {
    let artists = state.groupie.fetch_artists().await?;

    let artist = artists
        .iter()
        .find(|artist| artist.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("artist {}", id)))?;

    let embed = state.spotify.embed_for_artist(&artist.name).await?;

    Ok(Json(embed))
}
