// src/crawler/fetch.rs
// =============================================================================
// This module fetches a URL and turns the response into a parsed document.
//
// The DocumentFetcher trait is the boundary the crawl engine consumes:
// "given a URL, fetch and parse the document, or fail". HttpFetcher is the
// real implementation (reqwest + scraper); tests substitute their own.
//
// Key behavior:
// - One timeout, configured once at construction, applied to every fetch
// - A timed-out request is reported as FetchError::Timeout
// - Non-success HTTP status codes are fetch failures, not documents
// - No retries, no special-casing of 404s - errors propagate as-is
//
// Rust concepts:
// - async fn in traits: Stable since Rust 1.75, used for the fetch seam
// - thiserror: Derives Display/Error for our error enum
// =============================================================================

use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use url::Url;

// Everything that can go wrong between "here is a URL" and "here is a
// parsed document"
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// No response arrived within the configured timeout
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    /// Network or protocol failure (DNS, connection refused, TLS, ...)
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: StatusCode },
}

// The fetch-and-parse capability the crawl engine depends on
//
// Implementations must honor their timeout so no fetch blocks forever.
// The returned Html supports tag-based element enumeration and attribute
// reads, which is all the extractor needs.
#[allow(async_fn_in_trait)]
pub trait DocumentFetcher {
    async fn fetch(&self, url: &Url) -> Result<Html, FetchError>;
}

// Fetches pages over HTTP(S) with a per-request timeout
//
// The reqwest Client is created once and reused for every request in the
// crawl (connection pooling), mirroring how the timeout is configured once
// at engine construction.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Html, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        // Reading the body can also time out, so classify those errors too
        let body = response
            .text()
            .await
            .map_err(|e| classify_error(url, e))?;

        Ok(Html::parse_document(&body))
    }
}

// Maps a reqwest error onto our taxonomy: timeouts get their own tier,
// everything else is a transport failure
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
