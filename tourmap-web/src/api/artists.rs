//! Artist listing and detail handlers
//!
//! Both handlers build the joined view from freshly fetched remote state.
//! The two collection fetches are independent, so they run concurrently.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use tourmap_common::models::TourDates;

/// Query parameters for the artist listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter over name, locations and dates
    #[serde(default)]
    pub filter: String,
}

/// GET /api/artists?filter=
///
/// Joined records matching the filter, in relation wire order. An empty
/// or absent filter returns everything.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<TourDates>>> {
    let (artists, relations) = tokio::join!(
        state.groupie.fetch_artists(),
        state.groupie.fetch_relations()
    );
    let (artists, relations) = (artists?, relations?);

    let joined = catalog::join(&artists, &relations);
    let filtered = catalog::filter(joined, &params.filter);

    tracing::debug!(
        filter = %params.filter,
        count = filtered.len(),
        "Serving filtered artist list"
    );

    Ok(Json(filtered))
}

/// GET /api/artists/:id
///
/// Exactly one joined record, or 404 when either the artist or its
/// relation is absent.
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TourDates>> {
    let (artists, relations) = tokio::join!(
        state.groupie.fetch_artists(),
        state.groupie.fetch_relations()
    );
    let (artists, relations) = (artists?, relations?);

    let joined = catalog::join(&artists, &relations);

    match catalog::resolve_by_id(&joined, id) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(ApiError::NotFound(format!("artist {}", id))),
    }
}
