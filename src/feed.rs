//! Top Stories API client.
//!
//! The feed is a single JSON document listing the current top stories. Any
//! failure to retrieve or decode it is fatal to the pipeline run, so every
//! error surfaces as a [`FeedError`].
//!
//! # URL
//!
//! The target URL is the endpoint plus the `api-key` query parameter:
//! `https://api.nytimes.com/svc/topstories/v2/home.json?api-key=...`

use crate::models::TopStories;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

/// The Top Stories home section endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nytimes.com/svc/topstories/v2/home.json";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "NYTIMES_KEY";

const API_KEY_PARAM: &str = "api-key";

/// Errors that abort a whole pipeline run.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("missing Top Stories API key (set NYTIMES_KEY)")]
    MissingApiKey,

    #[error("invalid feed url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed returned status {0}")]
    Status(StatusCode),

    #[error("malformed feed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Build the feed URL from an endpoint and API key.
pub fn build_feed_url(endpoint: &str, api_key: Option<&str>) -> Result<Url, FeedError> {
    let api_key = api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(FeedError::MissingApiKey)?;
    let url = Url::parse_with_params(endpoint, &[(API_KEY_PARAM, api_key)])?;
    Ok(url)
}

/// Retrieve the current batch of article stubs.
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch_top_stories(&self, url: &Url) -> Result<TopStories, FeedError>;
}

/// [`FeedClient`] that performs a plain GET and decodes the JSON body.
#[derive(Debug, Clone, Default)]
pub struct TopStoriesClient {
    client: Client,
}

impl TopStoriesClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedClient for TopStoriesClient {
    // The url carries the credential, so it is never recorded.
    #[instrument(level = "info", skip_all, fields(host = url.host_str().unwrap_or_default(), path = url.path()))]
    async fn fetch_top_stories(&self, url: &Url) -> Result<TopStories, FeedError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let body = response.text().await?;
        let stories: TopStories = serde_json::from_str(&body)?;
        info!(count = stories.results.len(), "Fetched Top Stories feed");
        Ok(stories)
    }
}
