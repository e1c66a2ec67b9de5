//! The Top Stories pipeline: feed → section filter → parallel article jobs → completeness filter.
//!
//! # Architecture
//!
//! - [`generate_article_text`]: one article job. Fetch the page, extract the
//!   body, derive tags. Every failure degrades to "no text".
//! - [`run_article_jobs`]: spawns one task per article with no cap and waits
//!   for all of them. Each task owns its article outright and hands it back
//!   tagged with its index, so no two jobs ever touch the same record.
//! - [`TopStoriesApi`]: the driver. Owns the collaborators, caches the feed
//!   URL, and exposes the surviving records through [`ArticleView`].
//!
//! Only a feed failure aborts a run. Individual articles fail silently as far
//! as callers are concerned; the logs say which ones and why.

use crate::extract::extract_text;
use crate::feed::{DEFAULT_ENDPOINT, FeedClient, FeedError, TopStoriesClient, build_feed_url};
use crate::fetcher::{DocumentFetcher, HttpDocumentFetcher};
use crate::models::{Article, ArticleView};
use crate::sections::{default_sections, filter_by_sections};
use crate::tags::{FrequencyTagExtractor, TAG_COUNT, TagExtractor};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Settings for one [`TopStoriesApi`] instance.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Top Stories endpoint, without the credential.
    pub endpoint: String,
    /// API credential appended to the endpoint.
    pub api_key: Option<String>,
    /// Sections whose articles are fetched.
    pub allowed_sections: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            allowed_sections: default_sections(),
        }
    }
}

/// Fill in `text` and `tags` for one article.
///
/// Stops early, leaving the article untouched, when the page cannot be
/// fetched or has no article body. Tags are best-effort: a tagging failure
/// keeps the text.
#[instrument(level = "debug", skip_all, fields(url = %article.url))]
pub async fn generate_article_text(
    article: &mut Article,
    fetcher: &dyn DocumentFetcher,
    tagger: &dyn TagExtractor,
) {
    let text = match fetcher.fetch_document(&article.url).await {
        Ok(document) => extract_text(&document),
        Err(e) => {
            warn!(error = %e, "Article fetch failed; skipping");
            return;
        }
    };

    if text.is_empty() {
        debug!("No article body found; skipping");
        return;
    }
    article.text = text;

    match tagger.extract_tags(&article.text, TAG_COUNT) {
        Ok(tags) => article.tags = tags,
        Err(e) => debug!(error = %e, "Tag derivation failed; keeping text without tags"),
    }
    debug!(bytes = article.text.len(), tags = ?article.tags, "Article text generated");
}

/// Run one [`generate_article_text`] job per article, all at once, and wait for every job.
///
/// The returned articles keep input order. A job whose task panics loses its
/// article, which is logged and otherwise treated like an article with no text.
#[instrument(level = "info", skip_all, fields(jobs = articles.len()))]
pub async fn run_article_jobs(
    articles: Vec<Article>,
    fetcher: Arc<dyn DocumentFetcher>,
    tagger: Arc<dyn TagExtractor>,
) -> Vec<Article> {
    let mut slots: Vec<Option<Article>> = Vec::with_capacity(articles.len());
    let mut jobs = JoinSet::new();

    for (index, mut article) in articles.into_iter().enumerate() {
        slots.push(None);
        let fetcher = Arc::clone(&fetcher);
        let tagger = Arc::clone(&tagger);
        jobs.spawn(async move {
            generate_article_text(&mut article, fetcher.as_ref(), tagger.as_ref()).await;
            (index, article)
        });
    }

    while let Some(joined) = jobs.join_next().await {
        match joined {
            Ok((index, article)) => slots[index] = Some(article),
            Err(e) => error!(error = %e, "Article job did not complete; dropping article"),
        }
    }

    slots.into_iter().flatten().collect()
}

/// Keep only articles whose text extraction produced something.
pub fn retain_complete(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().filter(Article::has_text).collect()
}

/// Driver for repeated Top Stories runs.
///
/// Each call to [`generate_articles`](Self::generate_articles) starts from a
/// fresh feed response and replaces the previous run's articles. Only the feed
/// URL is carried between runs.
pub struct TopStoriesApi {
    config: PipelineConfig,
    url: Option<Url>,
    feed: Arc<dyn FeedClient>,
    fetcher: Arc<dyn DocumentFetcher>,
    tagger: Arc<dyn TagExtractor>,
    articles: Vec<Article>,
}

impl TopStoriesApi {
    pub fn new(
        config: PipelineConfig,
        feed: Arc<dyn FeedClient>,
        fetcher: Arc<dyn DocumentFetcher>,
        tagger: Arc<dyn TagExtractor>,
    ) -> Self {
        Self {
            config,
            url: None,
            feed,
            fetcher,
            tagger,
            articles: Vec::new(),
        }
    }

    /// Wire the HTTP feed client, HTTP page fetcher and frequency tagger.
    pub fn from_config(config: PipelineConfig) -> Self {
        Self::new(
            config,
            Arc::new(TopStoriesClient::new()),
            Arc::new(HttpDocumentFetcher::new()),
            Arc::new(FrequencyTagExtractor::new()),
        )
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn feed_url(&mut self) -> Result<Url, FeedError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        let url = build_feed_url(&self.config.endpoint, self.config.api_key.as_deref())?;
        self.url = Some(url.clone());
        Ok(url)
    }

    /// Run the whole pipeline once.
    ///
    /// Returns the number of articles exposed afterwards. Fails only when the
    /// feed cannot be retrieved or decoded; in that case the previous run's
    /// articles are cleared.
    #[instrument(level = "info", skip_all)]
    pub async fn generate_articles(&mut self) -> Result<usize, FeedError> {
        self.articles.clear();

        let url = self.feed_url()?;
        let stories = self.feed.fetch_top_stories(&url).await?;
        let fetched = stories.results.len();
        self.articles = stories.results;

        self.filter_by_sections();
        let filtered = self.articles.len();

        let articles = std::mem::take(&mut self.articles);
        let processed = run_article_jobs(
            articles,
            Arc::clone(&self.fetcher),
            Arc::clone(&self.tagger),
        )
        .await;
        self.articles = retain_complete(processed);

        info!(
            fetched,
            filtered,
            with_text = self.articles.len(),
            "Top Stories run complete"
        );
        Ok(self.articles.len())
    }

    /// Drop stored articles outside the allowed sections.
    pub fn filter_by_sections(&mut self) {
        let articles = std::mem::take(&mut self.articles);
        self.articles = filter_by_sections(articles, &self.config.allowed_sections);
    }

    /// The finished articles of the last run.
    pub fn articles(&self) -> Vec<&dyn ArticleView> {
        self.articles.iter().map(|a| a as &dyn ArticleView).collect()
    }

    /// Mutable views, for attaching summaries.
    pub fn articles_mut(&mut self) -> Vec<&mut dyn ArticleView> {
        self.articles
            .iter_mut()
            .map(|a| a as &mut dyn ArticleView)
            .collect()
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}
