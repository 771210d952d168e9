//! HTTP API handlers for tourmap-web

pub mod artists;
pub mod embed;
pub mod health;
pub mod suggestions;
pub mod ui;

pub use artists::{get_artist, list_artists};
pub use embed::get_embed;
pub use health::health_routes;
pub use suggestions::get_suggestions;
pub use ui::{serve_app_js, serve_index, serve_style_css};
