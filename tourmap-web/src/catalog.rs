//! Aggregation core: join, filter, resolve, suggest
//!
//! Pure functions over the in-memory collections fetched for one request.
//! The join is always by key equality through an id-keyed map; the two
//! collections are fetched independently and nothing may assume they are
//! positionally aligned.

use std::collections::HashMap;

use tourmap_common::models::{Artist, Relation, TourDates};

/// Join relations with their matching artists by id equality.
///
/// Output preserves relation wire order. A relation whose id has no
/// matching artist is dropped silently; joined records never carry blank
/// artist fields.
pub fn join(artists: &[Artist], relations: &[Relation]) -> Vec<TourDates> {
    let by_id: HashMap<i64, &Artist> = artists.iter().map(|a| (a.id, a)).collect();

    relations
        .iter()
        .filter_map(|relation| {
            by_id.get(&relation.id).map(|artist| TourDates {
                id: relation.id,
                artist_name: artist.name.clone(),
                artist_image: artist.image.clone(),
                dates_locations: relation.dates_locations.clone(),
            })
        })
        .collect()
}

/// Case-insensitive substring filter over artist name, locations and dates.
///
/// The query is lowercased once. A record is emitted at most once: the
/// scan of its fields stops at the first match. Empty query matches
/// everything. Output order equals input order.
pub fn filter(records: Vec<TourDates>, query: &str) -> Vec<TourDates> {
    if query.is_empty() {
        return records;
    }
    let query = query.to_lowercase();

    records
        .into_iter()
        .filter(|record| record_matches(record, &query))
        .collect()
}

/// First matching field wins; remaining fields are not scanned.
fn record_matches(record: &TourDates, query: &str) -> bool {
    if record.artist_name.to_lowercase().contains(query) {
        return true;
    }
    for (location, dates) in &record.dates_locations {
        if location.to_lowercase().contains(query) {
            return true;
        }
        if dates.iter().any(|date| date.to_lowercase().contains(query)) {
            return true;
        }
    }
    false
}

/// Resolve exactly one joined record by id.
///
/// `None` covers both absence cases: an id present in relations but not in
/// artists never survives the join, and an id present in artists but not
/// in relations has no record to find.
pub fn resolve_by_id(records: &[TourDates], id: i64) -> Option<&TourDates> {
    records.iter().find(|record| record.id == id)
}

/// Case-insensitive prefix match on artist names, in source order.
/// An empty prefix returns all artists.
pub fn suggest<'a>(artists: &'a [Artist], prefix: &str) -> Vec<&'a Artist> {
    let prefix = prefix.to_lowercase();
    artists
        .iter()
        .filter(|artist| artist.name.to_lowercase().starts_with(&prefix))
        .collect()
}
