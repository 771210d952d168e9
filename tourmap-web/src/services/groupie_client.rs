//! Remote collection client
//!
//! Fetches the two independently hosted JSON collections (artists and
//! tour-date relations). Every call performs one outbound request and
//! returns the fully materialized sequence in wire order. No retries, no
//! caching: repeated calls re-fetch.

use std::time::Duration;

use tourmap_common::models::{Artist, Relation, RelationIndex};
use tourmap_common::FetchError;

const USER_AGENT: &str = concat!("tourmap/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote artist/relation collection API
#[derive(Debug, Clone)]
pub struct GroupieClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GroupieClient {
    /// Build a client against the given API base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// GET `{base}/artists` - the full artist collection in wire order
    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
        let url = format!("{}/artists", self.base_url);
        tracing::debug!(url = %url, "Fetching artist collection");

        let response = self.get_checked(&url).await?;

        let artists: Vec<Artist> = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!(count = artists.len(), "Fetched artist collection");
        Ok(artists)
    }

    /// GET `{base}/relation` - tour-date relations, unwrapped from the
    /// `{ "index": [...] }` envelope, in wire order
    pub async fn fetch_relations(&self) -> Result<Vec<Relation>, FetchError> {
        let url = format!("{}/relation", self.base_url);
        tracing::debug!(url = %url, "Fetching relation collection");

        let response = self.get_checked(&url).await?;

        let envelope: RelationIndex = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!(count = envelope.index.len(), "Fetched relation collection");
        Ok(envelope.index)
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(FetchError::Api(status.as_u16(), error_text));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = GroupieClient::new("http://localhost:9999/api");
        assert!(client.is_ok());
    }
}
