//! Human-readable terminal output.
//!
//! Listing format is illustrative, not a contract. Write errors on the
//! terminal are ignored.

use super::PresentationSink;
use crate::analysis::{Comparison, VennRegions};
use crate::models::SourceAnalysis;
use crate::utils::{text_bar, truncate_label};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::io::Write;

/// Widest term column in listings.
const TERM_COLUMN: usize = 20;

/// Writes listings and text charts to any [`Write`] target.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Status line after a source has been scraped.
    pub fn collected(&mut self, label: &str, count: usize) {
        let _ = writeln!(self.out, "✅ {label}: collected {count} titles.");
    }

    /// Top words and top n-grams for one source.
    pub fn source_summary(&mut self, analysis: &SourceAnalysis, top_n: usize) {
        let _ = writeln!(self.out, "\n📊 {} – most common words:", analysis.label);
        for (word, count) in analysis.words.top_terms(top_n) {
            let _ = writeln!(self.out, "{word:<TERM_COLUMN$} {count}");
        }

        let _ = writeln!(
            self.out,
            "\n{} – most common {}-grams:",
            analysis.label, analysis.ngram_size
        );
        for (ngram, count) in analysis.ngrams.top_terms(top_n) {
            let _ = writeln!(self.out, "{ngram} - {count}");
        }
    }

    /// Sorted list of the words all three sources share.
    pub fn common_words(&mut self, comparison: &Comparison) {
        let _ = writeln!(
            self.out,
            "\n🔗 Common words ({}):",
            comparison.labels.iter().join(", ")
        );
        for word in &comparison.common {
            let _ = writeln!(self.out, "- {word}");
        }
    }
}

impl<W: Write> PresentationSink for ConsoleSink<W> {
    fn word_cloud(&mut self, title: &str, entries: &[(String, usize)]) {
        let _ = writeln!(self.out, "\n☁ {title}");
        let line = entries
            .iter()
            .take(TERM_COLUMN * 2)
            .map(|(term, count)| format!("{term}({count})"))
            .join(" ");
        let _ = writeln!(self.out, "{line}");
    }

    fn bar_chart(&mut self, title: &str, entries: &[(String, usize)]) {
        let _ = writeln!(self.out, "\n{title}");
        let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);
        for (term, count) in entries {
            let _ = writeln!(
                self.out,
                "{:<TERM_COLUMN$} {:>4} {}",
                truncate_label(term, TERM_COLUMN),
                count,
                text_bar(*count, max, 40)
            );
        }
    }

    fn venn3(&mut self, title: &str, sets: [&BTreeSet<String>; 3], labels: [&str; 3]) {
        let [a, b, c] = labels;
        let r = VennRegions::from_sets(sets[0], sets[1], sets[2]);
        let _ = writeln!(self.out, "\n{title}");
        let _ = writeln!(self.out, "only {a}: {}", r.a);
        let _ = writeln!(self.out, "only {b}: {}", r.b);
        let _ = writeln!(self.out, "only {c}: {}", r.c);
        let _ = writeln!(self.out, "{a} & {b}: {}", r.ab);
        let _ = writeln!(self.out, "{a} & {c}: {}", r.ac);
        let _ = writeln!(self.out, "{b} & {c}: {}", r.bc);
        let _ = writeln!(self.out, "all three: {}", r.abc);
    }
}
