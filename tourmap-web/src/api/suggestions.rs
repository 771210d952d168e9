//! Typeahead suggestions handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog;
use crate::error::ApiResult;
use crate::AppState;
use tourmap_common::models::Artist;

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    /// Name prefix typed so far; empty matches all artists
    #[serde(default)]
    pub q: String,
}

/// GET /api/suggestions?q=
///
/// Artists whose name starts with the prefix, case-insensitively, in
/// source order.
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> ApiResult<Json<Vec<Artist>>> {
    let artists = state.groupie.fetch_artists().await?;

    let matches = catalog::suggest(&artists, &params.q)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(matches))
}
