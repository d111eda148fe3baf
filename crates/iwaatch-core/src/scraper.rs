//! Main scraper API for iwaatch.com
//!
//! Provides the high-level API combining HTTP client and parsers. Every
//! operation returns an [`Extraction`]: failures are logged and replaced by
//! the operation's fallback payload, never returned as errors.

use crate::client::{ClientConfig, IwaatchClient};
use crate::error::Result;
use crate::extraction::Extraction;
use crate::parser::{parse_details, parse_search_results, parse_stream_bundle};
use crate::types::{DetailRecord, Episode, SearchResult, StreamBundle};
use crate::url::build_search_url;

/// Main scraper API for iwaatch.com
///
/// Holds no mutable state, so a single instance can be shared across tasks
/// (e.g. behind an `Arc`) without locking.
pub struct IwaatchScraper {
    client: IwaatchClient,
}

impl IwaatchScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = IwaatchClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = IwaatchClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Search for movies by keyword
    ///
    /// Falls back to an empty list on any failure.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> iwaatch_core::Result<()> {
    /// use iwaatch_core::IwaatchScraper;
    /// let scraper = IwaatchScraper::new()?;
    /// for movie in scraper.search("inception").await.payload() {
    ///     println!("{}: {}", movie.title, movie.href);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, keyword: &str) -> Extraction<Vec<SearchResult>> {
        Extraction::from_result("search", self.try_search(keyword).await)
    }

    /// Fetch description, duration and rating of a movie
    ///
    /// Always a single record. If the page cannot be fetched the record is
    /// "Could not load description" / "Duration: Unknown" / "Rating: Unknown".
    pub async fn fetch_details(&self, url: &str) -> Extraction<Vec<DetailRecord>> {
        Extraction::from_result("fetch_details", self.try_fetch_details(url).await)
    }

    /// List the episodes of a title
    ///
    /// iwaatch only hosts movies, so this is always one "Full Movie" episode
    /// pointing back at `url`. No request is made.
    pub fn list_episodes(&self, url: &str) -> Extraction<Vec<Episode>> {
        Extraction::from_result("list_episodes", Ok(vec![Episode::full_movie(url)]))
    }

    /// Resolve the playable MP4 variants and Arabic subtitles of a movie
    ///
    /// Falls back to no streams and no subtitles on any failure.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> iwaatch_core::Result<()> {
    /// use iwaatch_core::IwaatchScraper;
    /// let scraper = IwaatchScraper::new()?;
    /// let bundle = scraper.resolve_stream("https://iwaatch.com/movie/inception").await;
    /// for stream in &bundle.payload().streams {
    ///     println!("{} -> {}", stream.title, stream.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_stream(&self, url: &str) -> Extraction<StreamBundle> {
        Extraction::from_result("resolve_stream", self.try_resolve_stream(url).await)
    }

    async fn try_search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let search_url = build_search_url(self.client.base_url(), keyword);
        let html = self.client.fetch(&search_url).await?;
        Ok(parse_search_results(&html))
    }

    async fn try_fetch_details(&self, url: &str) -> Result<Vec<DetailRecord>> {
        let html = self.client.fetch(url).await?;
        Ok(vec![parse_details(&html)])
    }

    async fn try_resolve_stream(&self, url: &str) -> Result<StreamBundle> {
        let html = self.client.fetch(url).await?;
        Ok(parse_stream_bundle(&html))
    }
}
