//! Section filtering for Top Stories stubs.
//!
//! The Top Stories feed mixes hard news with arts, sports, food and other
//! sections. Only stubs whose `section` exactly matches an allowed label are
//! worth fetching; everything else is dropped before any network work.

use crate::models::Article;
use tracing::debug;

/// Sections kept when no explicit allow-list is configured.
pub const DEFAULT_SECTIONS: &[&str] = &["business", "politics", "technology", "us", "world"];

/// The default allow-list as owned strings.
pub fn default_sections() -> Vec<String> {
    DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect()
}

/// Keep only articles whose section is in `allowed`.
///
/// Matching is exact string equality against the feed's own vocabulary.
/// Original order is preserved.
pub fn filter_by_sections(articles: Vec<Article>, allowed: &[String]) -> Vec<Article> {
    let before = articles.len();
    let kept: Vec<Article> = articles
        .into_iter()
        .filter(|article| allowed.iter().any(|section| *section == article.section))
        .collect();
    debug!(before, after = kept.len(), "Filtered articles by section");
    kept
}
