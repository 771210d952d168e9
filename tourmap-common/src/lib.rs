//! # Tourmap Common Library
//!
//! Shared code for the tourmap service:
//! - Wire models for the remote artist/relation collections
//! - Error taxonomy for the fetch and enrichment boundaries
//! - Service configuration resolution

pub mod config;
pub mod error;
pub mod models;

pub use error::{FetchError, Result};
