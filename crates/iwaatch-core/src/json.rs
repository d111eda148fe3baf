//! JSON-text entry points
//!
//! One function per operation, each building a default [`IwaatchScraper`]
//! and returning the payload as JSON text. These never fail: if even the
//! HTTP client cannot be built, the fallback payload is returned.

use crate::error::{IwaatchError, Result};
use crate::extraction::{Extraction, Fallback};
use crate::scraper::IwaatchScraper;
use crate::types::{DetailRecord, Episode, SearchResult, StreamBundle};

/// Search results as a JSON array of `{title, image, href}`
pub async fn search(keyword: &str) -> String {
    match IwaatchScraper::new() {
        Ok(scraper) => scraper.search(keyword).await.to_json(),
        Err(e) => fallback_json::<Vec<SearchResult>>("search", e),
    }
}

/// Detail record as a one-element JSON array of `{description, aliases, airdate}`
pub async fn fetch_details(url: &str) -> String {
    match IwaatchScraper::new() {
        Ok(scraper) => scraper.fetch_details(url).await.to_json(),
        Err(e) => fallback_json::<Vec<DetailRecord>>("fetch_details", e),
    }
}

/// The single movie episode as a JSON array of `{title, number, href}`
pub async fn list_episodes(url: &str) -> String {
    Extraction::from_result("list_episodes", Ok(vec![Episode::full_movie(url)])).to_json()
}

/// Stream variants as JSON `{streams: [{title, url}], subtitles}`
pub async fn resolve_stream(url: &str) -> String {
    match IwaatchScraper::new() {
        Ok(scraper) => scraper.resolve_stream(url).await.to_json(),
        Err(e) => fallback_json::<StreamBundle>("resolve_stream", e),
    }
}

fn fallback_json<T>(operation: &str, error: IwaatchError) -> String
where
    T: serde::Serialize + Fallback,
{
    Extraction::<T>::from_result(operation, Err(error)).to_json()
}

/// Encodes any payload as JSON text
pub fn encode<T: serde::Serialize>(payload: &T) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_episodes_json() {
        let json = list_episodes("https://iwaatch.com/movie/ronin").await;
        assert_eq!(
            json,
            r#"[{"title":"Full Movie","number":1,"href":"https://iwaatch.com/movie/ronin"}]"#
        );
    }

    #[tokio::test]
    async fn test_fetch_details_json_on_bad_url() {
        let json = fetch_details("").await;
        assert_eq!(
            json,
            r#"[{"description":"Could not load description","aliases":"Duration: Unknown","airdate":"Rating: Unknown"}]"#
        );
    }

    #[tokio::test]
    async fn test_resolve_stream_json_on_bad_url() {
        let json = resolve_stream("").await;
        assert_eq!(json, r#"{"streams":[],"subtitles":""}"#);
    }

    #[test]
    fn test_encode_stream_bundle() {
        let json = encode(&StreamBundle::default()).unwrap();
        assert_eq!(json, r#"{"streams":[],"subtitles":""}"#);
    }
}
