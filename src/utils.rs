//! Helpers for edition naming, log previews and output directories.

use chrono::{Local, NaiveTime, Timelike};
use std::io;
use tokio::fs;
use tracing::{info, instrument};

/// Classify a wall-clock time into an edition name.
///
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
pub fn edition_for(time: NaiveTime) -> &'static str {
    match time.hour() {
        0..8 => "morning",
        8..16 => "afternoon",
        _ => "evening",
    }
}

/// Edition name for the current local time.
#[instrument]
pub fn time_of_day() -> String {
    let tod = Local::now().time();
    let which = edition_for(tod);
    tracing::debug!(%tod, %which, "Computed time_of_day");
    which.to_string()
}

/// Shorten article text for log lines.
///
/// Keeps at most `max` characters, cutting on a character boundary and
/// collapsing line breaks so a preview stays on one log line.
pub fn preview(s: &str, max: usize) -> String {
    let flat = s.trim().replace('\n', " ");
    match flat.char_indices().nth(max) {
        None => flat,
        Some((cut, _)) => format!("{}…(+{} bytes)", &flat[..cut], flat.len() - cut),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    fs::write(&probe_path, b"").await?;
    let _ = fs::remove_file(&probe_path).await;
    info!("Output directory is writable");
    Ok(())
}
