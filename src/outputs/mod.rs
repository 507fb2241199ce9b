//! Presentation and report output.
//!
//! Rendering is kept behind [`PresentationSink`], which only ever receives
//! plain data: ordered `(term, count)` pairs or unlabeled term sets. The
//! analysis never depends on how a sink draws them.
//!
//! # Submodules
//!
//! - [`console`]: status lines and listings on a terminal
//! - [`markdown`]: a Markdown document with text charts
//! - [`json`]: the machine-readable [`AnalysisReport`](crate::models::AnalysisReport)
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── 203000.json
//!
//! markdown_output_dir/
//! └── 2025-05-06_203000.md
//! ```

pub mod console;
pub mod json;
pub mod markdown;

use crate::analysis::Comparison;
use crate::models::SourceAnalysis;
use std::collections::BTreeSet;

/// A surface that can draw frequency charts.
pub trait PresentationSink {
    /// Weighted cloud of terms; `entries` are most common first.
    fn word_cloud(&mut self, title: &str, entries: &[(String, usize)]);

    /// Bar chart of the given entries, in the order given.
    fn bar_chart(&mut self, title: &str, entries: &[(String, usize)]);

    /// Three-set Venn diagram over vocabularies.
    fn venn3(&mut self, title: &str, sets: [&BTreeSet<String>; 3], labels: [&str; 3]);
}

/// Draw every chart for a run: per source a word cloud, a top-word bar chart
/// and a top-n-gram bar chart, then the vocabulary Venn diagram.
pub fn render_all<S: PresentationSink>(
    sink: &mut S,
    analyses: &[SourceAnalysis],
    comparison: Option<&Comparison>,
    top_n: usize,
) {
    for analysis in analyses {
        let label = &analysis.label;
        sink.word_cloud(
            &format!("{label} – word cloud"),
            &analysis.words.top_terms(analysis.words.len()),
        );
        sink.bar_chart(&format!("{label} – top words"), &analysis.words.top_terms(top_n));
        sink.bar_chart(
            &format!("{label} – top {}-grams", analysis.ngram_size),
            &analysis.ngrams.top_terms(top_n),
        );
    }

    if let (Some(comparison), [a, b, c]) = (comparison, analyses) {
        let vocabularies = [a, b, c].map(|analysis| analysis.words.vocabulary());
        let labels = comparison.labels.each_ref().map(String::as_str);
        sink.venn3(
            "Common and unique words",
            vocabularies.each_ref(),
            labels,
        );
    }
}
