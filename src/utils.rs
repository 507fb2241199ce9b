//! Utility functions for label formatting and output directory checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Shorten a label to at most `max` characters, marking the cut with `…`.
///
/// Counts characters rather than bytes, so multi-byte Polish letters are
/// never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_label("krótki", 10), "krótki");
/// assert_eq!(truncate_label("bardzo długa etykieta", 6), "bardz…");
/// ```
pub fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Horizontal text bar proportional to `value / max`, at most `width` cells.
///
/// Any non-zero value gets at least one cell.
pub fn text_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let cells = ((value * width) / max).clamp(1, width);
    "█".repeat(cells)
}

/// Convert a label to a lowercase, hyphenated anchor.
///
/// Letters outside ASCII are kept and every space becomes a hyphen, matching
/// the heading anchors Markdown renderers generate: `"WP – top words"` becomes
/// `"wp--top-words"`.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join(".headline_stats_probe");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
