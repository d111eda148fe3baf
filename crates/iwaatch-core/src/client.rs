//! HTTP client for iwaatch.com
//!
//! Thin wrapper around `reqwest` with browser-like headers. One GET per
//! call; timeouts come from the client configuration and nothing is retried.

use std::time::Duration;

use crate::error::{IwaatchError, Result};
use crate::url::{BASE_URL, resolve_url};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root used for search URLs and relative links (default: https://iwaatch.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper for iwaatch.com pages
pub struct IwaatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl IwaatchClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("ar,en;q=0.8"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(IwaatchError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root this client resolves against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch HTML content from a page URL
    ///
    /// # Arguments
    /// * `url` - Absolute URL, or a path starting with `/` on the site root
    ///
    /// # Errors
    /// - `InvalidUrl` - URL is empty
    /// - `NotFound` - Server returned 404
    /// - `HttpStatus` - Server returned any other non-success status
    /// - `HttpError` - Network errors or unreadable body
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = resolve_url(&self.base_url, url)
            .ok_or_else(|| IwaatchError::InvalidUrl(url.to_string()))?;

        tracing::debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(IwaatchError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(IwaatchError::NotFound(url));
        }

        if !status.is_success() {
            return Err(IwaatchError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(IwaatchError::HttpError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://iwaatch.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_client_creation() {
        let client = IwaatchClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            ..ClientConfig::default()
        };
        let client = IwaatchClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_fetch_empty_url() {
        let client = IwaatchClient::new().unwrap();
        let result = client.fetch("  ").await;
        match result {
            Err(IwaatchError::InvalidUrl(_)) => {}
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_url() {
        let client = IwaatchClient::new().unwrap();
        let result = client.fetch("not a url").await;
        match result {
            Err(IwaatchError::HttpError(_)) => {}
            _ => panic!("Expected HttpError"),
        }
    }
}
