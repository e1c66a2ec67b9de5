//! # Top Stories Digest
//!
//! Command-line entry point: runs the Top Stories pipeline once and writes
//! the surviving articles to a JSON digest.
//!
//! ## Usage
//!
//! ```sh
//! NYTIMES_KEY=... top_stories_digest -j ./json
//! ```

use chrono::Local;
use clap::Parser;
use std::error::Error;
use top_stories_digest::models::Digest;
use top_stories_digest::outputs::json;
use top_stories_digest::pipeline::TopStoriesApi;
use top_stories_digest::utils::{ensure_writable_dir, preview, time_of_day};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("top_stories_digest starting up");

    let args = Cli::parse();
    debug!(?args.json_output_dir, ?args.sections, "Parsed CLI arguments");

    if let Err(e) = ensure_writable_dir(&args.json_output_dir).await {
        error!(
            path = %args.json_output_dir,
            error = %e,
            "JSON output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    // ---- Fetch, filter and extract ----
    let mut api = TopStoriesApi::from_config(args.pipeline_config());
    let count = match api.generate_articles().await {
        Ok(count) => count,
        Err(e) => {
            error!(error = %e, "Top Stories run failed");
            return Err(e.into());
        }
    };
    info!(count, "Articles with text");

    for article in api.articles() {
        debug!(
            url = article.url(),
            section = article.section(),
            created = ?article.date_created(),
            tags = ?article.tags(),
            text = %preview(article.text(), 120),
            "Article"
        );
    }

    // ---- JSON output ----
    let now = Local::now();
    let digest = Digest {
        local_date: now.date_naive().to_string(),
        time_of_day: time_of_day(),
        local_time: now.time().to_string(),
        articles: api.into_articles(),
    };
    info!(time_of_day = %digest.time_of_day, local_date = %digest.local_date, "Digest assembled");

    if let Err(e) = json::write_digest(&digest, &args.json_output_dir).await {
        error!(error = %e, "Failed to write JSON digest");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
