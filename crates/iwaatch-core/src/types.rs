//! Core data types for the iwaatch scraper
//!
//! Output records handed to the media-browsing client. Field names are the
//! client's wire names, so they are serialized as-is.

use serde::{Deserialize, Serialize};

/// Description used when the whole detail page could not be loaded
pub const DESCRIPTION_UNAVAILABLE: &str = "Could not load description";

/// Description used when the page loaded but has no description block
pub const DESCRIPTION_MISSING: &str = "No description";

/// Placeholder for a duration or rating that could not be extracted
pub const UNKNOWN: &str = "Unknown";

/// Title of the single synthetic episode of a movie
pub const FULL_MOVIE_TITLE: &str = "Full Movie";

/// One movie card from the search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Movie title
    pub title: String,

    /// Poster URL taken from the card's `background-image` style
    pub image: String,

    /// Link to the movie's detail page
    pub href: String,
}

/// Metadata extracted from a movie detail page
///
/// The client reuses its series fields for movies: `aliases` carries the
/// duration and `airdate` carries the rating, both with a readable prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Synopsis text
    pub description: String,

    /// Duration, e.g. "Duration: 1h 52min"
    pub aliases: String,

    /// Rating, e.g. "Rating: 7.4"
    pub airdate: String,
}

impl DetailRecord {
    /// Builds a record from the extracted parts
    ///
    /// Empty duration or rating text becomes "Unknown".
    pub fn new(description: impl Into<String>, duration: &str, rating: &str) -> Self {
        Self {
            description: description.into(),
            aliases: format!("Duration: {}", or_unknown(duration)),
            airdate: format!("Rating: {}", or_unknown(rating)),
        }
    }

    /// The record returned when the detail page could not be loaded at all
    pub fn unavailable() -> Self {
        Self::new(DESCRIPTION_UNAVAILABLE, "", "")
    }
}

fn or_unknown(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() { UNKNOWN } else { value }
}

/// A playable episode
///
/// iwaatch only hosts movies, so every title has exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub number: u32,
    pub href: String,
}

impl Episode {
    /// The single "Full Movie" episode pointing at `href`
    pub fn full_movie(href: impl Into<String>) -> Self {
        Self {
            title: FULL_MOVIE_TITLE.to_string(),
            number: 1,
            href: href.into(),
        }
    }
}

/// One playable quality variant of a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Quality label, e.g. "1080p"
    pub title: String,

    /// Direct MP4 URL
    pub url: String,
}

/// All stream variants of a playback page plus the Arabic subtitle track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamBundle {
    /// Variants in the order the page lists them
    pub streams: Vec<Stream>,

    /// Arabic subtitle URL, empty when the page has none
    pub subtitles: String,
}
