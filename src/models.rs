//! Data models for Top Stories articles and the digest written by the CLI.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`Article`]: A feed stub whose `text` and `tags` are filled in by the pipeline
//! - [`TopStories`]: The JSON body returned by the Top Stories API
//! - [`ArticleView`]: The read-only interface handed to downstream consumers
//! - [`Digest`]: Collection of finished articles for a single run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view over a finished article record.
///
/// Only records with non-empty text are ever exposed through this trait. The
/// feed-sourced fields (`url`, `title`, `section`, publication date) cannot be
/// changed through it; the summarised text is the single writable slot,
/// reserved for downstream summarizers.
pub trait ArticleView {
    /// The article URL, also its unique identifier.
    fn url(&self) -> &str;
    /// The article headline.
    fn title(&self) -> &str;
    /// The Top Stories section, e.g. `"technology"`.
    fn section(&self) -> &str;
    /// The publication time normalized to UTC.
    ///
    /// Returns `None` when the feed timestamp is not valid RFC-3339.
    fn date_created(&self) -> Option<DateTime<Utc>>;
    /// The body text extracted from the article page.
    fn text(&self) -> &str;
    /// Summarised text set by a downstream consumer, empty by default.
    fn summarised(&self) -> &str;
    /// Replace the summarised text.
    fn set_summarised(&mut self, summary: String);
    /// Topical tags derived from the body text, possibly empty.
    fn tags(&self) -> &[String];
}

/// A single Top Stories article.
///
/// Deserialized from one entry of the feed's `results` array. At that point
/// only `url`, `title`, `section` and `published_date` are populated; the
/// pipeline job that owns the article fills in `text` and `tags`.
///
/// Known sections include arts, automobiles, books, business, fashion, food,
/// health, home, insider, magazine, movies, nyregion, obituaries, opinion,
/// politics, realestate, science, sports, sundayreview, technology, theater,
/// t-magazine, travel, upshot, us and world.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Article {
    /// The article URL.
    pub url: String,
    /// The article headline.
    #[serde(default)]
    pub title: String,
    /// The section the article was published under.
    #[serde(default)]
    pub section: String,
    /// RFC-3339 publication timestamp as sent by the feed.
    #[serde(default)]
    pub published_date: String,
    /// Extracted body text.
    #[serde(default)]
    pub text: String,
    /// Summarised text, set by downstream consumers.
    #[serde(default)]
    pub summarised_text: String,
    /// Derived topical tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Create a stub as the feed would deliver it.
    pub fn stub(
        url: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            section: section.into(),
            published_date: published_date.into(),
            ..Self::default()
        }
    }

    /// Whether body text extraction produced anything.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

impl ArticleView for Article {
    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn section(&self) -> &str {
        &self.section
    }

    fn date_created(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn summarised(&self) -> &str {
        &self.summarised_text
    }

    fn set_summarised(&mut self, summary: String) {
        self.summarised_text = summary;
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// The JSON body of a Top Stories API response.
///
/// Only `results` is read; every other top-level key is ignored. A body
/// without `results` fails to deserialize.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TopStories {
    /// The article stubs in feed order.
    pub results: Vec<Article>,
}

/// All finished articles produced by one run of the binary.
///
/// # Edition Naming
///
/// The `time_of_day` field categorizes runs as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Deserialize, Serialize)]
pub struct Digest {
    /// The local date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The time of day category: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The exact local time of the run.
    pub local_time: String,
    /// The articles that survived extraction.
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_top_stories_deserialization() {
        let json = r#"{
            "status": "OK",
            "section": "home",
            "num_results": 2,
            "results": [
                {
                    "section": "technology",
                    "subsection": "",
                    "title": "Chips Are Getting Smaller",
                    "url": "https://www.nytimes.com/2020/05/01/technology/chips.html",
                    "published_date": "2020-05-01T05:00:12-04:00",
                    "multimedia": []
                },
                {
                    "section": "sports",
                    "title": "A Season Without Games",
                    "url": "https://www.nytimes.com/2020/05/01/sports/season.html",
                    "published_date": "2020-05-01T09:30:00-04:00"
                }
            ]
        }"#;

        let stories: TopStories = serde_json::from_str(json).unwrap();
        assert_eq!(stories.results.len(), 2);
        assert_eq!(stories.results[0].section, "technology");
        assert_eq!(stories.results[1].title, "A Season Without Games");
        assert!(stories.results[0].text.is_empty());
        assert!(stories.results[0].tags.is_empty());
    }

    #[test]
    fn test_top_stories_missing_results_is_malformed() {
        let json = r#"{"fault": {"faultstring": "Invalid ApiKey"}}"#;
        assert!(serde_json::from_str::<TopStories>(json).is_err());
    }

    #[test]
    fn test_article_missing_optional_fields() {
        let json = r#"{"url": "https://www.nytimes.com/a.html"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.url, "https://www.nytimes.com/a.html");
        assert_eq!(article.title, "");
        assert_eq!(article.section, "");
    }

    #[test]
    fn test_date_created_normalizes_to_utc() {
        let article = Article::stub("u", "t", "us", "2020-05-01T05:00:12-04:00");
        let expected = Utc.with_ymd_and_hms(2020, 5, 1, 9, 0, 12).unwrap();
        assert_eq!(article.date_created(), Some(expected));
    }

    #[test]
    fn test_date_created_fails_soft() {
        let article = Article::stub("u", "t", "us", "yesterday afternoon");
        assert_eq!(article.date_created(), None);

        let empty = Article::stub("u", "t", "us", "");
        assert_eq!(empty.date_created(), None);
    }

    #[test]
    fn test_summarised_is_settable() {
        let mut article = Article::stub("u", "t", "world", "");
        assert_eq!(article.summarised(), "");
        {
            let view: &mut dyn ArticleView = &mut article;
            view.set_summarised("Short version".to_string());
        }
        assert_eq!(article.summarised(), "Short version");
        assert_eq!(article.url(), "u");
    }

    #[test]
    fn test_digest_serialization() {
        let mut article = Article::stub("https://example.com/a", "Title", "business", "");
        article.text = "Body\n".to_string();
        article.tags = vec!["markets".to_string()];

        let digest = Digest {
            local_date: "2025-05-06".to_string(),
            time_of_day: "evening".to_string(),
            local_time: "20:30:00".to_string(),
            articles: vec![article],
        };

        let json = serde_json::to_string(&digest).unwrap();
        assert!(json.contains("2025-05-06"));
        assert!(json.contains("\"tags\":[\"markets\"]"));

        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.articles[0].text, "Body\n");
    }
}
