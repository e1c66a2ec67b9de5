//! JSON digest output.
//!
//! Each run writes one file per edition, grouped by date. A second run in
//! the same edition overwrites the earlier file.

use crate::models::Digest;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`Digest`] to `{json_output_dir}/{local_date}/{time_of_day}.json`.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_digest(
    digest: &Digest,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(digest)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(&digest.local_date);
    info!(dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join(format!("{}.json", digest.time_of_day));
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename.display(),
        articles = digest.articles.len(),
        "Wrote JSON digest"
    );

    Ok(output_json_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn digest() -> Digest {
        let mut article = Article::stub(
            "https://www.nytimes.com/2025/05/06/world/story.html",
            "Story",
            "world",
            "2025-05-06T10:00:00-04:00",
        );
        article.text = "Paragraph one.\nParagraph two.\n".to_string();
        article.tags = vec!["paragraph".to_string()];

        Digest {
            local_date: "2025-05-06".to_string(),
            time_of_day: "morning".to_string(),
            local_time: "07:15:00".to_string(),
            articles: vec![article],
        }
    }

    #[tokio::test]
    async fn test_write_digest_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let path = write_digest(&digest(), dir).await.unwrap();

        assert_eq!(path, tmp.path().join("2025-05-06").join("morning.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        let back: Digest = serde_json::from_str(&written).unwrap();
        assert_eq!(back.articles.len(), 1);
        assert_eq!(back.articles[0].section, "world");
        assert_eq!(back.articles[0].tags, vec!["paragraph"]);
    }

    #[tokio::test]
    async fn test_write_digest_overwrites_same_edition() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        write_digest(&digest(), dir).await.unwrap();
        let mut second = digest();
        second.articles.clear();
        let path = write_digest(&second, dir).await.unwrap();

        let back: Digest = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(back.articles.is_empty());
    }
}
