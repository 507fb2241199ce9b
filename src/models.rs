//! Data models for per-source analysis results and the run report.
//!
//! - [`SourceAnalysis`]: full frequency tables for one scraped source
//! - [`SourceReport`]: the top entries of a [`SourceAnalysis`], ready to serialize
//! - [`AnalysisReport`]: everything one run produced, written as JSON

use crate::analysis::{Comparison, FrequencyAnalyzer, FrequencyTable, Ngram};
use crate::config::ScraperConfig;
use chrono::Local;
use serde::Serialize;
use std::collections::HashSet;

/// Frequency tables computed from one source's titles.
#[derive(Debug, Clone)]
pub struct SourceAnalysis {
    /// Display label of the source.
    pub label: String,
    /// Listing URL prefix the titles came from.
    pub base_url: String,
    /// Number of listing pages requested.
    pub pages: usize,
    /// Titles that passed the length gate.
    pub titles_collected: usize,
    /// Unigram counts.
    pub words: FrequencyTable<String>,
    /// N-gram counts of size `ngram_size`.
    pub ngrams: FrequencyTable<Ngram>,
    pub ngram_size: usize,
}

impl SourceAnalysis {
    /// Count words and `ngram_size`-grams over `titles`.
    pub fn analyze(
        config: &ScraperConfig,
        titles: &[String],
        stopwords: &HashSet<String>,
        ngram_size: usize,
    ) -> Self {
        let analyzer = FrequencyAnalyzer::new(stopwords);
        Self {
            label: config.display_label(),
            base_url: config.base_url.clone(),
            pages: config.pages,
            titles_collected: titles.len(),
            words: analyzer.word_counts(titles),
            ngrams: analyzer.ngram_counts(titles, ngram_size),
            ngram_size,
        }
    }

    /// Summarize as a serializable report keeping the `top_n` entries of each table.
    pub fn report(&self, top_n: usize) -> SourceReport {
        SourceReport {
            label: self.label.clone(),
            base_url: self.base_url.clone(),
            pages: self.pages,
            titles_collected: self.titles_collected,
            distinct_words: self.words.len(),
            total_words: self.words.total(),
            top_words: self.words.top_terms(top_n),
            top_ngrams: self.ngrams.top_terms(top_n),
        }
    }
}

/// Serializable summary of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub label: String,
    pub base_url: String,
    pub pages: usize,
    pub titles_collected: usize,
    pub distinct_words: usize,
    pub total_words: usize,
    /// `(word, count)`, most common first.
    pub top_words: Vec<(String, usize)>,
    /// `(space-joined n-gram, count)`, most common first.
    pub top_ngrams: Vec<(String, usize)>,
}

/// Everything produced by a single run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the run in `HH:MM:SS` format.
    pub local_time: String,
    pub ngram_size: usize,
    pub top_n: usize,
    pub sources: Vec<SourceReport>,
    /// Present only when exactly three sources were analyzed.
    pub comparison: Option<Comparison>,
}

impl AnalysisReport {
    /// Build a report stamped with the current local date and time.
    pub fn new(
        analyses: &[SourceAnalysis],
        comparison: Option<Comparison>,
        ngram_size: usize,
        top_n: usize,
    ) -> Self {
        let now = Local::now();
        Self {
            local_date: now.format("%Y-%m-%d").to_string(),
            local_time: now.format("%H:%M:%S").to_string(),
            ngram_size,
            top_n,
            sources: analyses.iter().map(|a| a.report(top_n)).collect(),
            comparison,
        }
    }

    /// `YYYY-MM-DD_HHMMSS`, used to name report files.
    pub fn stamp(&self) -> String {
        format!("{}_{}", self.local_date, self.local_time.replace(':', ""))
    }
}
