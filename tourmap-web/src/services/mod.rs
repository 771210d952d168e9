//! Remote service clients

pub mod groupie_client;
pub mod spotify_client;

pub use groupie_client::GroupieClient;
pub use spotify_client::{SpotifyClient, SpotifyError};
