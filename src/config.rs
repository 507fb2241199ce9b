//! Per-source scraper configuration.
//!
//! Each monitored news site is described by an immutable [`ScraperConfig`].
//! Configurations come either from a YAML source list or from the built-in
//! defaults (three Polish politics listings), and are validated before any
//! request is made.
//!
//! # Source File Format
//!
//! ```yaml
//! sources:
//!   - label: Republika
//!     base_url: "https://tvrepublika.pl/kategoria/Polityka?page="
//!     selector: h2
//!     pages: 5
//!     stopwords_path: stop_words_polish.txt
//! ```

use crate::scrapers::extract::TitleExtractor;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_PAGES: usize = 5;
pub const DEFAULT_STOPWORDS_PATH: &str = "stop_words_polish.txt";

fn default_pages() -> usize {
    DEFAULT_PAGES
}

fn default_stopwords_path() -> PathBuf {
    PathBuf::from(DEFAULT_STOPWORDS_PATH)
}

/// Configuration for one monitored source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScraperConfig {
    /// Display label; derived from the base URL host when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Listing URL prefix; the page index is appended verbatim.
    pub base_url: String,
    /// CSS selector matching headline elements.
    pub selector: String,
    /// Number of listing pages to fetch, starting from page 1.
    #[serde(default = "default_pages")]
    pub pages: usize,
    /// Newline-delimited stopword list for this source.
    #[serde(default = "default_stopwords_path")]
    pub stopwords_path: PathBuf,
    /// Pause between consecutive page requests.
    #[serde(default)]
    pub page_delay_ms: u64,
    /// Upper bound of the random extra pause added to `page_delay_ms`.
    #[serde(default)]
    pub page_jitter_ms: u64,
}

impl ScraperConfig {
    pub fn new(label: &str, base_url: &str, selector: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            base_url: base_url.to_string(),
            selector: selector.to_string(),
            pages: DEFAULT_PAGES,
            stopwords_path: default_stopwords_path(),
            page_delay_ms: 0,
            page_jitter_ms: 0,
        }
    }

    /// The label to show in listings and charts.
    ///
    /// Falls back to the site name in the host, so
    /// `https://wiadomosci.wp.pl/tag/polityka/?page=` becomes `wp`.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        Url::parse(&self.base_url)
            .ok()
            .and_then(|url| {
                let host = url.host_str()?.to_string();
                let parts: Vec<&str> = host.split('.').collect();
                if parts.len() >= 2 {
                    Some(parts[parts.len() - 2].to_string())
                } else {
                    Some(host)
                }
            })
            .unwrap_or_else(|| self.base_url.clone())
    }

    /// Check that the base URL is absolute and the selector parses.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base_url {:?}: {e}", self.base_url))?;
        TitleExtractor::new(&self.selector)?;
        Ok(())
    }
}

/// Top-level layout of a YAML source list.
#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<ScraperConfig>,
}

/// The three Polish politics listings compared by default.
pub fn default_sources() -> Vec<ScraperConfig> {
    vec![
        ScraperConfig::new(
            "Republika",
            "https://tvrepublika.pl/kategoria/Polityka?page=",
            "h2",
        ),
        ScraperConfig::new("WP", "https://wiadomosci.wp.pl/tag/polityka/?page=", "h2"),
        ScraperConfig::new("WPolsce24", "https://wpolsce24.tv/polska/strona,", "h3"),
    ]
}

/// Parse and validate a YAML source list.
pub fn parse_sources(yaml: &str) -> Result<Vec<ScraperConfig>, Box<dyn Error>> {
    let file: SourcesFile = serde_yaml::from_str(yaml)?;
    for source in &file.sources {
        source.validate()?;
    }
    Ok(file.sources)
}

/// Load the sources from `path`, or the built-in defaults when `path` is `None`.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub fn load_sources(path: Option<&str>) -> Result<Vec<ScraperConfig>, Box<dyn Error>> {
    let sources = match path {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .map_err(|e| format!("cannot read source list {path}: {e}"))?;
            parse_sources(&yaml)?
        }
        None => default_sources(),
    };
    info!(count = sources.len(), "Loaded source configurations");
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sources_applies_defaults() {
        let yaml = r#"
sources:
  - base_url: "https://example.pl/news?page="
    selector: "article h2"
"#;
        let sources = parse_sources(yaml).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].pages, DEFAULT_PAGES);
        assert_eq!(sources[0].stopwords_path, PathBuf::from(DEFAULT_STOPWORDS_PATH));
        assert_eq!(sources[0].page_delay_ms, 0);
        assert_eq!(sources[0].label, None);
    }

    #[test]
    fn test_parse_sources_full_entry() {
        let yaml = r#"
sources:
  - label: Lokalna
    base_url: "https://lokalna.pl/strona,"
    selector: h3
    pages: 2
    stopwords_path: /tmp/stop.txt
    page_delay_ms: 500
    page_jitter_ms: 100
"#;
        let source = &parse_sources(yaml).unwrap()[0];
        assert_eq!(source.display_label(), "Lokalna");
        assert_eq!(source.pages, 2);
        assert_eq!(source.stopwords_path, PathBuf::from("/tmp/stop.txt"));
        assert_eq!(source.page_delay_ms, 500);
        assert_eq!(source.page_jitter_ms, 100);
    }

    #[test]
    fn test_parse_sources_rejects_relative_url() {
        let yaml = r#"
sources:
  - base_url: "/polityka?page="
    selector: h2
"#;
        assert!(parse_sources(yaml).is_err());
    }

    #[test]
    fn test_parse_sources_rejects_bad_selector() {
        let yaml = r#"
sources:
  - base_url: "https://example.pl/?page="
    selector: "h2["
"#;
        assert!(parse_sources(yaml).is_err());
    }

    #[test]
    fn test_parse_sources_missing_field() {
        let yaml = "sources:\n  - selector: h2\n";
        assert!(parse_sources(yaml).is_err());
    }

    #[test]
    fn test_display_label_from_host() {
        let mut source = ScraperConfig::new("x", "https://wiadomosci.wp.pl/tag/polityka/?page=", "h2");
        source.label = None;
        assert_eq!(source.display_label(), "wp");

        source.base_url = "https://wpolsce24.tv/polska/strona,".to_string();
        assert_eq!(source.display_label(), "wpolsce24");
    }

    #[test]
    fn test_default_sources_are_valid() {
        let sources = default_sources();
        assert_eq!(sources.len(), 3);
        for source in &sources {
            source.validate().unwrap();
            assert_eq!(source.pages, 5);
        }
        assert_eq!(sources[2].selector, "h3");
    }

    #[test]
    fn test_load_sources_missing_file_is_error() {
        assert!(load_sources(Some("/no/such/sources.yaml")).is_err());
    }
}
