//! Command-line interface definitions.
//!
//! All options can be provided via command-line flags; the API key and
//! endpoint also fall back to environment variables.

use clap::Parser;
use top_stories_digest::feed::DEFAULT_ENDPOINT;
use top_stories_digest::pipeline::PipelineConfig;
use top_stories_digest::sections::default_sections;

/// Command-line arguments for the Top Stories digest.
///
/// # Examples
///
/// ```sh
/// # Default sections, key from the environment
/// NYTIMES_KEY=... top_stories_digest -j ./json
///
/// # Only technology and science
/// top_stories_digest -j ./json --nyt-api-key KEY -s technology,science
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the JSON digest
    #[arg(short, long)]
    pub json_output_dir: String,

    /// New York Times API key
    #[arg(long, env = "NYTIMES_KEY", hide_env_values = true)]
    pub nyt_api_key: Option<String>,

    /// Top Stories endpoint
    #[arg(long, env = "TOP_STORIES_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Sections to keep, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = default_sections())]
    pub sections: Vec<String>,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            endpoint: self.endpoint.clone(),
            api_key: self.nyt_api_key.clone(),
            allowed_sections: self.sections.clone(),
        }
    }
}
