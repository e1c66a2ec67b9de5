//! # Top Stories Digest
//!
//! Fetches the New York Times Top Stories feed, keeps the hard-news sections,
//! and for every remaining story downloads the article page, extracts the
//! body text and derives a few topical tags.
//!
//! ## Architecture
//!
//! 1. **Feed**: [`feed::FeedClient`] returns the current article stubs
//! 2. **Filtering**: [`sections::filter_by_sections`] drops unwanted sections
//! 3. **Extraction**: one task per stub fetches the page ([`fetcher`]),
//!    extracts the body ([`extract`]) and derives tags ([`tags`])
//! 4. **Exposure**: stubs without text are dropped; the rest are read
//!    through [`models::ArticleView`]
//!
//! ## Usage
//!
//! ```no_run
//! use top_stories_digest::pipeline::{PipelineConfig, TopStoriesApi};
//!
//! # async fn run() -> Result<(), top_stories_digest::feed::FeedError> {
//! let config = PipelineConfig {
//!     api_key: std::env::var("NYTIMES_KEY").ok(),
//!     ..PipelineConfig::default()
//! };
//! let mut api = TopStoriesApi::from_config(config);
//! api.generate_articles().await?;
//! for article in api.articles() {
//!     println!("{} [{}]: {:?}", article.title(), article.section(), article.tags());
//! }
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod feed;
pub mod fetcher;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod sections;
pub mod tags;
pub mod utils;
