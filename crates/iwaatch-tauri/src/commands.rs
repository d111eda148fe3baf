//! Tauri commands for the iwaatch scraper
//!
//! Each command returns the operation's payload directly. Failures have
//! already been replaced by the fallback payload, so no command errors.

use iwaatch_core::{DetailRecord, Episode, SearchResult, StreamBundle};
use tauri::State;

use crate::ScraperState;

/// Search for movies on iwaatch.com
///
/// # Arguments
/// * `state` - Managed ScraperState from Tauri
/// * `keyword` - Free-text search keyword
///
/// # Returns
/// Matching movies, empty on failure
#[tauri::command]
pub async fn search(
    state: State<'_, ScraperState>,
    keyword: String,
) -> Result<Vec<SearchResult>, String> {
    Ok(state.scraper.search(&keyword).await.into_payload())
}

/// Fetch description, duration and rating of a movie
///
/// # Returns
/// One detail record, the "Could not load description" placeholder on failure
#[tauri::command]
pub async fn fetch_details(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<Vec<DetailRecord>, String> {
    Ok(state.scraper.fetch_details(&url).await.into_payload())
}

/// List the single "Full Movie" episode of a title
#[tauri::command]
pub fn list_episodes(state: State<'_, ScraperState>, url: String) -> Vec<Episode> {
    state.scraper.list_episodes(&url).into_payload()
}

/// Resolve MP4 stream variants and Arabic subtitles of a movie
///
/// # Returns
/// Stream bundle, empty on failure
#[tauri::command]
pub async fn resolve_stream(
    state: State<'_, ScraperState>,
    url: String,
) -> Result<StreamBundle, String> {
    Ok(state.scraper.resolve_stream(&url).await.into_payload())
}
