//! Stopword list loading.
//!
//! A stopword file is plain UTF-8 text with one term per line. Blank lines are
//! ignored, surrounding whitespace is trimmed and every term is lowercased so
//! it compares equal to the normalized tokens produced by
//! [`crate::analysis::normalize`].
//!
//! A missing or unreadable file is not fatal: the loader logs a warning and
//! returns an empty set, so the analysis simply runs without filtering.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Load a newline-delimited stopword list into a set.
///
/// # Arguments
///
/// * `path` - Location of the stopword file
///
/// # Returns
///
/// The set of trimmed, lowercased, non-empty lines. An empty set when the
/// file cannot be opened or read.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_stopwords(path: impl AsRef<Path>) -> HashSet<String> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(error = %e, "Stopword file not found; continuing without stopwords");
            return HashSet::new();
        }
    };

    let mut stopwords = HashSet::new();
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => {
                let term = line.trim();
                if !term.is_empty() {
                    stopwords.insert(term.to_lowercase());
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed reading stopword file; continuing without stopwords");
                return HashSet::new();
            }
        }
    }

    debug!(count = stopwords.len(), "Loaded stopwords");
    stopwords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "headline_stats_{}_{}.txt",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_stopwords_skips_blank_lines() {
        let path = temp_file("blank_lines", "i\n\n  w  \n\t\nna\n");
        let stopwords = load_stopwords(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("i"));
        assert!(stopwords.contains("w"));
        assert!(stopwords.contains("na"));
    }

    #[test]
    fn test_load_stopwords_lowercases_terms() {
        let path = temp_file("lowercase", "Się\nORAZ\n");
        let stopwords = load_stopwords(&path);
        fs::remove_file(&path).unwrap();

        assert!(stopwords.contains("się"));
        assert!(stopwords.contains("oraz"));
        assert!(!stopwords.contains("ORAZ"));
    }

    #[test]
    fn test_load_stopwords_handles_crlf() {
        let path = temp_file("crlf", "jest\r\nnie\r\n");
        let stopwords = load_stopwords(&path);
        fs::remove_file(&path).unwrap();

        assert!(stopwords.contains("jest"));
        assert!(stopwords.contains("nie"));
    }

    #[test]
    fn test_load_stopwords_missing_file_is_empty() {
        let stopwords = load_stopwords("/definitely/not/here/stop_words_polish.txt");
        assert!(stopwords.is_empty());
    }

    #[test]
    fn test_load_stopwords_empty_path_is_empty() {
        let stopwords = load_stopwords("");
        assert!(stopwords.is_empty());
    }
}
