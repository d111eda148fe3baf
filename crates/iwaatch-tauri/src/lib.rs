//! iwaatch.com Tauri Integration
//!
//! Provides Tauri plugin for frontend integration with the iwaatch scraper.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(iwaatch_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! const movies = await invoke('plugin:iwaatch|search', { keyword: 'inception' });
//! const [details] = await invoke('plugin:iwaatch|fetch_details', { url: movies[0].href });
//! const episodes = await invoke('plugin:iwaatch|list_episodes', { url: movies[0].href });
//! const { streams, subtitles } = await invoke('plugin:iwaatch|resolve_stream', {
//!   url: episodes[0].href
//! });
//! ```

use std::sync::Arc;

use iwaatch_core::IwaatchScraper;
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Shared IwaatchScraper for all commands
///
/// The scraper holds no mutable state, so commands share it through an
/// `Arc` without a lock and may run concurrently.
pub struct ScraperState {
    pub(crate) scraper: Arc<IwaatchScraper>,
}

impl ScraperState {
    /// Create a new ScraperState with default configuration
    ///
    /// # Errors
    /// Returns error string if scraper initialization fails
    pub fn new() -> Result<Self, String> {
        let scraper = IwaatchScraper::new().map_err(|e| e.to_string())?;
        Ok(Self {
            scraper: Arc::new(scraper),
        })
    }
}

/// Initialize the iwaatch plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(iwaatch_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("iwaatch")
        .invoke_handler(tauri::generate_handler![
            commands::search,
            commands::fetch_details,
            commands::list_episodes,
            commands::resolve_stream
        ])
        .setup(|app, _api| {
            let state = ScraperState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use iwaatch_core::{DetailRecord, Episode, SearchResult as Movie, StreamBundle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_state_creation() {
        let state = ScraperState::new();
        assert!(state.is_ok());
    }

    #[test]
    fn test_scraper_state_lists_full_movie() {
        let state = ScraperState::new().unwrap();
        let episodes = state.scraper.list_episodes("https://iwaatch.com/movie/heat");
        assert_eq!(episodes.payload()[0].title, "Full Movie");
    }
}
