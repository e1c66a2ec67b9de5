//! Topical tag derivation from article text.
//!
//! Tags are the most frequent content words of the body text. Tokens are
//! lowercased, possessives are stripped, and common English function words
//! are ignored. Ties are broken by first occurrence, so the result is
//! deterministic for a given text.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

/// Number of tags derived for every article.
pub const TAG_COUNT: usize = 3;

const MIN_WORD_LEN: usize = 3;

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}[\p{L}'’-]*\p{L}").expect("valid word pattern"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "also", "and", "any", "are",
        "around", "because", "been", "before", "being", "below", "between", "both", "but",
        "can", "could", "did", "does", "doing", "down", "during", "each", "even", "ever",
        "few", "for", "from", "further", "had", "has", "have", "having", "her", "here",
        "hers", "herself", "him", "himself", "his", "how", "into", "its", "itself", "just",
        "last", "like", "made", "make", "many", "may", "more", "most", "much", "must",
        "myself", "new", "not", "now", "off", "once", "one", "only", "other", "our", "ours",
        "out", "over", "own", "said", "same", "say", "says", "she", "should", "since", "some",
        "still", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
        "then", "there", "these", "they", "this", "those", "through", "too", "two", "under",
        "until", "very", "was", "way", "were", "what", "when", "where", "which", "while",
        "who", "whom", "why", "will", "with", "would", "year", "years", "yet", "you", "your",
        "yours",
    ]
    .into_iter()
    .collect()
});

/// Reasons tag derivation can fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("requested zero tags")]
    ZeroCount,

    #[error("text has no candidate terms")]
    NoCandidates,
}

/// Derive the top `count` tags from `text`, most relevant first.
pub trait TagExtractor: Send + Sync {
    fn extract_tags(&self, text: &str, count: usize) -> Result<Vec<String>, TagError>;
}

/// [`TagExtractor`] ranking content words by frequency.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTagExtractor;

impl FrequencyTagExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn normalize(word: &str) -> String {
    word.trim_end_matches("'s")
        .trim_end_matches("’s")
        .to_lowercase()
}

fn is_candidate(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN && !STOP_WORDS.contains(word)
}

impl TagExtractor for FrequencyTagExtractor {
    fn extract_tags(&self, text: &str, count: usize) -> Result<Vec<String>, TagError> {
        if count == 0 {
            return Err(TagError::ZeroCount);
        }

        let terms: Vec<String> = WORD
            .find_iter(text)
            .map(|m| normalize(m.as_str()))
            .filter(|word| is_candidate(word))
            .collect();
        if terms.is_empty() {
            return Err(TagError::NoCandidates);
        }

        let counts = terms.iter().counts();
        let tags = terms
            .iter()
            .unique()
            .sorted_by(|a, b| counts[b].cmp(&counts[a]))
            .take(count)
            .cloned()
            .collect();
        Ok(tags)
    }
}
