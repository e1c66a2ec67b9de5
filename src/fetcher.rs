//! Fetching and parsing article pages.
//!
//! The pipeline only needs "give me the parsed page at this URL". That seam
//! is the [`DocumentFetcher`] trait, so jobs can run against canned pages in
//! tests and against [`HttpDocumentFetcher`] in production.

use crate::extract::parse_document;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::Html;
use thiserror::Error;
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors raised while fetching an article page.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Fetch a URL and parse the response body into a document tree.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch_document(&self, url: &str) -> Result<Html, DocumentError>;
}

/// [`DocumentFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpDocumentFetcher {
    client: Client,
}

impl HttpDocumentFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Use an existing client, e.g. one shared with the feed client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpDocumentFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_document(&self, url: &str) -> Result<Html, DocumentError> {
        let url = url::Url::parse(url)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentError::Status(status));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched article page");
        Ok(parse_document(&body))
    }
}
