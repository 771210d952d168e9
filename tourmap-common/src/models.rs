//! Wire models for the remote artist and relation collections
//!
//! Both collections are fetched fresh for every request and live only for
//! that request. Field names follow the remote API's JSON exactly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An artist as served by the remote collection endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    /// Unique, stable id assigned by the remote source
    pub id: i64,
    /// Artist display name
    pub name: String,
    /// Image URL or path
    pub image: String,
}

/// A tour-date relation as served by the remote relation endpoint.
///
/// `id` equals the id of exactly one [`Artist`]; that equality is the join
/// key. A `BTreeMap` keeps location iteration deterministic (JSON objects
/// carry no order guarantee on the wire).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Relation {
    pub id: i64,
    #[serde(rename = "datesLocations")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Envelope around the relation collection: `{ "index": [...] }`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelationIndex {
    pub index: Vec<Relation>,
}

/// A relation joined with its matched artist's display fields.
///
/// Only relations with a matching artist ever become `TourDates`; a
/// relation whose id has no artist is dropped at join time, never shown
/// with blank artist fields.
#[derive(Debug, Clone, Serialize)]
pub struct TourDates {
    pub id: i64,
    #[serde(rename = "artistName")]
    pub artist_name: String,
    #[serde(rename = "artistImage")]
    pub artist_image: String,
    #[serde(rename = "datesLocations")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Embeddable top-track widget for an artist, built from the catalog
/// service's top search result
#[derive(Debug, Clone, Serialize)]
pub struct TrackEmbed {
    pub iframe: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_deserializes_from_wire_shape() {
        let json = r#"{"id": 1, "name": "Muse", "image": "m.jpg"}"#;
        let artist: Artist = serde_json::from_str(json).unwrap();
        assert_eq!(artist.id, 1);
        assert_eq!(artist.name, "Muse");
        assert_eq!(artist.image, "m.jpg");
    }

    #[test]
    fn relation_index_deserializes_envelope() {
        let json = r#"{"index": [{"id": 1, "datesLocations": {"Paris": ["2023-06-20"]}}]}"#;
        let envelope: RelationIndex = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.index.len(), 1);
        assert_eq!(envelope.index[0].id, 1);
        assert_eq!(
            envelope.index[0].dates_locations["Paris"],
            vec!["2023-06-20".to_string()]
        );
    }

    #[test]
    fn tour_dates_serializes_wire_field_names() {
        let record = TourDates {
            id: 1,
            artist_name: "Muse".to_string(),
            artist_image: "m.jpg".to_string(),
            dates_locations: BTreeMap::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("artistName").is_some());
        assert!(value.get("artistImage").is_some());
        assert!(value.get("datesLocations").is_some());
    }
}
