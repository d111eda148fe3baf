//! iwaatch.com Scraper Core Library
//!
//! Provides async API for searching movies, reading their details and
//! resolving playable MP4 streams from iwaatch.com.
//!
//! # Overview
//!
//! This crate provides a complete scraping solution for iwaatch.com with:
//! - HTTP client with browser-like headers
//! - HTML parsers for search results, detail pages and playback pages
//! - High-level API whose operations never fail from the caller's view
//!
//! # Example
//!
//! ```no_run
//! use iwaatch_core::{IwaatchScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = IwaatchScraper::new()?;
//!
//!     // Search for movies
//!     let results = scraper.search("inception").await;
//!
//!     for movie in results.payload() {
//!         println!("{}: {}", movie.title, movie.href);
//!     }
//!
//!     // Resolve streams of the first hit
//!     if let Some(movie) = results.payload().first() {
//!         let bundle = scraper.resolve_stream(&movie.href).await;
//!         println!("{}", bundle.to_json());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure model
//!
//! Network errors, HTTP errors and unexpected markup are never surfaced.
//! Each operation returns an [`Extraction`] carrying either the extracted
//! payload or a fixed fallback (`[]`, a placeholder detail record, or
//! `{"streams":[],"subtitles":""}`). An empty or placeholder payload is the
//! failure signal. The [`json`] module wraps the same operations and
//! returns JSON text directly.

mod client;
mod error;
mod extraction;
pub mod json;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, IwaatchClient};

// Re-export error types
pub use error::{IwaatchError, Result};

// Re-export extraction outcome
pub use extraction::{Extraction, Fallback};

// Re-export parser functions
pub use parser::{parse_details, parse_search_results, parse_stream_bundle};

// Re-export main scraper API
pub use scraper::IwaatchScraper;

// Re-export data types
pub use types::{DetailRecord, Episode, SearchResult, Stream, StreamBundle};

// Re-export URL helper functions for convenience
pub use url::{build_search_url, resolve_url};
