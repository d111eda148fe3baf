//! Error types for the iwaatch scraper
//!
//! Every failure inside the library is an [`IwaatchError`]. The public
//! operations never hand these to the caller; they are logged and replaced
//! by a fallback payload (see [`crate::Extraction`]).

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for internal iwaatch scraper operations
///
/// Network failures, unexpected HTTP statuses and bad input URLs are all
/// treated the same way by the callers: the operation falls back.
#[derive(Error, Debug)]
pub enum IwaatchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// Page not found on server
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Payload could not be encoded as JSON
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Serialize for IwaatchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for iwaatch operations
pub type Result<T> = std::result::Result<T, IwaatchError>;
