//! Service configuration
//!
//! Resolution priority for every setting:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. Compiled default (fallback)
//!
//! The service keeps no local state, so there is no config-file tier.

use clap::Parser;

/// Default bind address for the web front end
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;
/// Default base URL of the remote artist/relation collections
pub const DEFAULT_COLLECTION_API: &str = "https://groupietrackers.herokuapp.com/api";
/// Default Spotify accounts service (token exchange)
pub const DEFAULT_SPOTIFY_AUTH: &str = "https://accounts.spotify.com";
/// Default Spotify Web API base
pub const DEFAULT_SPOTIFY_API: &str = "https://api.spotify.com";

/// tourmap - tour date aggregation front end
#[derive(Debug, Clone, Parser)]
#[command(name = "tourmap", version)]
pub struct ServiceConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "TOURMAP_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "TOURMAP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Base URL of the remote artist/relation collection API
    #[arg(long, env = "TOURMAP_COLLECTION_API", default_value = DEFAULT_COLLECTION_API)]
    pub collection_api: String,

    /// Spotify client id for the client-credentials exchange
    #[arg(long, env = "TOURMAP_SPOTIFY_CLIENT_ID", default_value = "")]
    pub spotify_client_id: String,

    /// Spotify client secret
    #[arg(long, env = "TOURMAP_SPOTIFY_CLIENT_SECRET", default_value = "")]
    pub spotify_client_secret: String,

    /// Spotify accounts service base URL (token endpoint)
    #[arg(long, env = "TOURMAP_SPOTIFY_AUTH_URL", default_value = DEFAULT_SPOTIFY_AUTH)]
    pub spotify_auth_url: String,

    /// Spotify Web API base URL
    #[arg(long, env = "TOURMAP_SPOTIFY_API_URL", default_value = DEFAULT_SPOTIFY_API)]
    pub spotify_api_url: String,
}

impl ServiceConfig {
    /// Socket address string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
