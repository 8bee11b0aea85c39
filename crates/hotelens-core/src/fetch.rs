//! Page and robots.txt retrieval
//!
//! The analyzer only needs two things from the network: the page body (or a
//! reason it could not be had) and robots.txt content when it exists.
//! [`PageFetcher`] is that seam; [`HttpFetcher`] implements it with reqwest
//! when the `http` feature is enabled.

use thiserror::Error;

/// Why the main page could not be retrieved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{status} for url: {url}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Transport(String),
}

/// Source of page and robots.txt content
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetch the page body. Non-success statuses are errors.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch robots.txt. Any failure, including a non-200 status, is `None`.
    async fn fetch_robots_txt(&self, robots_url: &str) -> Option<String>;
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use reqwest::{Client, RequestBuilder, StatusCode, header};

    use super::{FetchError, PageFetcher};

    pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; AIVisibilityBot/1.0)";
    pub const PAGE_TIMEOUT: Duration = Duration::from_secs(10);
    pub const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

    /// reqwest-backed fetcher with fixed timeouts and no retries.
    ///
    /// Only page requests identify as the analyzer bot; robots.txt is fetched
    /// with no `User-Agent` header at all.
    pub struct HttpFetcher {
        client: Client,
        page_timeout: Duration,
        robots_timeout: Duration,
    }

    impl HttpFetcher {
        pub fn new() -> Result<Self, FetchError> {
            let client = Client::builder()
                .build()
                .map_err(|e| FetchError::Transport(format!("failed to create HTTP client: {e}")))?;

            Ok(Self {
                client,
                page_timeout: PAGE_TIMEOUT,
                robots_timeout: ROBOTS_TIMEOUT,
            })
        }

        fn page_request(&self, url: &str) -> RequestBuilder {
            self.client
                .get(url)
                .header(header::USER_AGENT, USER_AGENT)
                .timeout(self.page_timeout)
        }

        fn robots_request(&self, robots_url: &str) -> RequestBuilder {
            self.client.get(robots_url).timeout(self.robots_timeout)
        }
    }

    impl PageFetcher for HttpFetcher {
        async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
            let response = self
                .page_request(url)
                .send()
                .await
                .map_err(|e| classify(url, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            response.text().await.map_err(|e| classify(url, e))
        }

        async fn fetch_robots_txt(&self, robots_url: &str) -> Option<String> {
            let response = self
                .robots_request(robots_url)
                .send()
                .await
                .ok()?;

            if response.status() != StatusCode::OK {
                return None;
            }

            response.text().await.ok()
        }
    }

    fn classify(url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_builder() {
            FetchError::InvalidUrl {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FetchError::Status {
            status: 404,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(err.to_string(), "404 for url: https://example.com/");

        let err = FetchError::Timeout {
            url: "https://example.com/".to_string(),
        };
        assert_eq!(err.to_string(), "request to https://example.com/ timed out");
    }
}
