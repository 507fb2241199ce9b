//! Markdown rendering of the charts.
//!
//! Word clouds become a paragraph of terms whose emphasis grows with
//! frequency, bar charts become fenced blocks of text bars, and the Venn
//! diagram becomes a table of region sizes followed by the shared words.

use super::PresentationSink;
use crate::analysis::VennRegions;
use crate::models::AnalysisReport;
use crate::utils::{slugify, text_bar, truncate_label};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 28;

/// Builds a Markdown document chart by chart.
#[derive(Debug, Default)]
pub struct MarkdownSink {
    doc: String,
}

impl MarkdownSink {
    /// Start a document with a title heading and the run timestamp.
    pub fn new(report: &AnalysisReport) -> Self {
        let mut doc = String::new();
        writeln!(
            doc,
            "# Headline statistics – {} {}\n",
            report.local_date, report.local_time
        )
        .unwrap();
        for source in &report.sources {
            writeln!(
                doc,
                "- [{}](#{}): {} titles from {} pages of `{}`",
                source.label,
                slugify(&format!("{} – top words", source.label)),
                source.titles_collected,
                source.pages,
                source.base_url
            )
            .unwrap();
        }
        Self { doc }
    }

    /// The finished document.
    pub fn finish(self) -> String {
        self.doc
    }
}

impl PresentationSink for MarkdownSink {
    fn word_cloud(&mut self, title: &str, entries: &[(String, usize)]) {
        writeln!(self.doc, "\n## {title}\n").unwrap();
        let Some(max) = entries.first().map(|(_, count)| *count) else {
            writeln!(self.doc, "_No words._").unwrap();
            return;
        };
        let cloud = entries
            .iter()
            .map(|(term, count)| {
                // top third bold, middle third italic, the rest plain
                if count * 3 > max * 2 {
                    format!("**{term}**")
                } else if count * 3 > max {
                    format!("_{term}_")
                } else {
                    term.clone()
                }
            })
            .join(" · ");
        writeln!(self.doc, "{cloud}").unwrap();
    }

    fn bar_chart(&mut self, title: &str, entries: &[(String, usize)]) {
        writeln!(self.doc, "\n## {title}\n").unwrap();
        if entries.is_empty() {
            writeln!(self.doc, "_No entries._").unwrap();
            return;
        }
        let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);
        writeln!(self.doc, "```text").unwrap();
        for (term, count) in entries {
            writeln!(
                self.doc,
                "{:<LABEL_WIDTH$} {:>5} {}",
                truncate_label(term, LABEL_WIDTH),
                count,
                text_bar(*count, max, BAR_WIDTH)
            )
            .unwrap();
        }
        writeln!(self.doc, "```").unwrap();
    }

    fn venn3(&mut self, title: &str, sets: [&BTreeSet<String>; 3], labels: [&str; 3]) {
        let [a, b, c] = labels;
        let r = VennRegions::from_sets(sets[0], sets[1], sets[2]);
        writeln!(self.doc, "\n## {title}\n").unwrap();
        writeln!(self.doc, "| Region | Words |").unwrap();
        writeln!(self.doc, "|---|---:|").unwrap();
        for (region, size) in [
            (format!("only {a}"), r.a),
            (format!("only {b}"), r.b),
            (format!("only {c}"), r.c),
            (format!("{a} & {b}"), r.ab),
            (format!("{a} & {c}"), r.ac),
            (format!("{b} & {c}"), r.bc),
            (format!("{a} & {b} & {c}"), r.abc),
        ] {
            writeln!(self.doc, "| {region} | {size} |").unwrap();
        }

        let common = sets[0]
            .iter()
            .filter(|word| sets[1].contains(*word) && sets[2].contains(*word))
            .join(", ");
        if !common.is_empty() {
            writeln!(self.doc, "\nShared by all: {common}").unwrap();
        }
    }
}

/// Write a rendered document to `{markdown_output_dir}/{stamp}.md`.
#[instrument(level = "info", skip_all, fields(dir = %markdown_output_dir.display()))]
pub async fn write_markdown(
    markdown: &str,
    report: &AnalysisReport,
    markdown_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = markdown_output_dir.join(format!("{}.md", report.stamp()));
    info!(path = %path.display(), "Writing Markdown");
    fs::write(&path, markdown).await?;
    info!(path = %path.display(), "Wrote Markdown report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn test_word_cloud_emphasis() {
        let mut sink = MarkdownSink::default();
        sink.word_cloud("Chmura", &entries(&[("sejm", 9), ("rząd", 5), ("wybory", 1)]));
        let doc = sink.finish();
        assert!(doc.contains("## Chmura"));
        assert!(doc.contains("**sejm** · _rząd_ · wybory"));
    }

    #[test]
    fn test_word_cloud_empty() {
        let mut sink = MarkdownSink::default();
        sink.word_cloud("Pusto", &[]);
        assert!(sink.finish().contains("_No words._"));
    }

    #[test]
    fn test_bar_chart_block() {
        let mut sink = MarkdownSink::default();
        sink.bar_chart("Top", &entries(&[("premier", 4), ("prezydent", 2)]));
        let doc = sink.finish();
        assert!(doc.contains("```text"));
        let premier_line = doc.lines().find(|l| l.starts_with("premier")).unwrap();
        assert!(premier_line.ends_with(&"█".repeat(BAR_WIDTH)));
        let prezydent_line = doc.lines().find(|l| l.starts_with("prezydent")).unwrap();
        assert!(prezydent_line.ends_with(&"█".repeat(BAR_WIDTH / 2)));
    }

    #[test]
    fn test_venn_table() {
        let a: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let b: BTreeSet<String> = ["b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let c: BTreeSet<String> = ["c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let mut sink = MarkdownSink::default();
        sink.venn3("Venn", [&a, &b, &c], ["R", "W", "P"]);
        let doc = sink.finish();
        assert!(doc.contains("| only R | 1 |"));
        assert!(doc.contains("| only W | 0 |"));
        assert!(doc.contains("| W & P | 1 |"));
        assert!(doc.contains("| R & W & P | 1 |"));
        assert!(doc.contains("Shared by all: c"));
    }
}
