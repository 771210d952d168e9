//! Spotify enrichment client
//!
//! Resolves an artist name to an embeddable widget for their top track:
//! client-credentials token exchange, catalog search, top-tracks lookup.
//! Every failure at this boundary is a typed result returned to the
//! caller; the serving process stays up whatever the catalog does.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use tourmap_common::models::TrackEmbed;

const USER_AGENT: &str = concat!("tourmap/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Market used for the top-tracks lookup
const TOP_TRACKS_MARKET: &str = "FR";

/// Spotify client errors
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Token exchange rejected or unreachable, distinct from "no result"
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Search or top-tracks lookup returned nothing for this artist
    #[error("No catalog match for {0}")]
    NoMatches(String),
}

impl SpotifyError {
    /// True for the "no music result" case; everything else is an
    /// upstream failure the caller should report as such
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpotifyError::NoMatches(_))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    artists: ArtistPage,
}

#[derive(Debug, Deserialize)]
struct ArtistPage {
    items: Vec<CatalogArtist>,
}

#[derive(Debug, Deserialize)]
struct CatalogArtist {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    tracks: Vec<CatalogTrack>,
}

#[derive(Debug, Deserialize)]
struct CatalogTrack {
    id: String,
}

/// Spotify Web API client.
///
/// Both base URLs are injected so tests can point the client at local
/// stubs. Tokens are not cached: the service holds no cross-request
/// state, matching the rest of the system.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http_client: reqwest::Client,
    client_id: String,
    client_secret: String,
    auth_base_url: String,
    api_base_url: String,
}

impl SpotifyClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_base_url: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Result<Self, SpotifyError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            auth_base_url: auth_base_url.into(),
            api_base_url: api_base_url.into(),
        })
    }

    /// Client-credentials exchange against `{auth_base}/api/token`
    async fn fetch_token(&self) -> Result<String, SpotifyError> {
        let url = format!("{}/api/token", self.auth_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SpotifyError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Auth(format!("{}: {}", status, error_text)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Auth(e.to_string()))?;

        Ok(token.access_token)
    }

    /// Search the catalog by artist name; first returned result wins
    async fn search_artist(
        &self,
        token: &str,
        artist_name: &str,
    ) -> Result<CatalogArtist, SpotifyError> {
        let url = format!("{}/v1/search", self.api_base_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(&[("q", artist_name), ("type", "artist"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let search: SearchResponse = Self::decode(response).await?;

        search
            .artists
            .items
            .into_iter()
            .next()
            .ok_or_else(|| SpotifyError::NoMatches(artist_name.to_string()))
    }

    /// Top tracks for a catalog artist id, fixed market
    async fn top_tracks(
        &self,
        token: &str,
        catalog_id: &str,
    ) -> Result<Vec<CatalogTrack>, SpotifyError> {
        let url = format!("{}/v1/artists/{}/top-tracks", self.api_base_url, catalog_id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(&[("market", TOP_TRACKS_MARKET)])
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let top: TopTracksResponse = Self::decode(response).await?;
        Ok(top.tracks)
    }

    /// Resolve an artist name to an embeddable widget for their top track
    pub async fn embed_for_artist(&self, artist_name: &str) -> Result<TrackEmbed, SpotifyError> {
        let token = self.fetch_token().await?;

        let catalog_artist = self.search_artist(&token, artist_name).await?;
        tracing::debug!(
            artist = %artist_name,
            catalog_id = %catalog_artist.id,
            catalog_name = %catalog_artist.name,
            "Matched catalog artist"
        );

        let tracks = self.top_tracks(&token, &catalog_artist.id).await?;
        let top_track = tracks
            .into_iter()
            .next()
            .ok_or_else(|| SpotifyError::NoMatches(artist_name.to_string()))?;

        tracing::info!(
            artist = %artist_name,
            track_id = %top_track.id,
            "Built track embed"
        );

        Ok(TrackEmbed {
            iframe: embed_iframe(&top_track.id),
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SpotifyError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Auth(error_text));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(e.to_string()))
    }
}

/// Embeddable player markup for a track id
fn embed_iframe(track_id: &str) -> String {
    format!(
        r#"<iframe src="https://open.spotify.com/embed/track/{}" width="300" height="380" frameborder="0" allowtransparency="true" allow="encrypted-media"></iframe>"#,
        track_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = SpotifyClient::new("id", "secret", "http://localhost:1", "http://localhost:2");
        assert!(client.is_ok());
    }

    #[test]
    fn iframe_embeds_track_id() {
        let iframe = embed_iframe("4uLU6hMCjMI75M1A2tKUQC");
        assert!(iframe.contains("https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC"));
        assert!(iframe.starts_with("<iframe"));
    }

    #[test]
    fn no_matches_is_not_found() {
        assert!(SpotifyError::NoMatches("Muse".to_string()).is_not_found());
        assert!(!SpotifyError::Auth("denied".to_string()).is_not_found());
    }
}
