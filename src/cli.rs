//! Command-line interface definitions for Headline Stats.
//!
//! Every option has a default, so running the binary with no arguments
//! scrapes and compares the three built-in sources. Output directories can
//! also be provided through environment variables.

use clap::Parser;

/// Command-line arguments for the Headline Stats application.
///
/// # Examples
///
/// ```sh
/// # Compare the built-in sources, console output only
/// headline_stats
///
/// # Custom source list, trigrams, reports on disk
/// headline_stats -s sources.yaml -n 3 -j ./json -m ./markdown
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file listing the sources to scrape (defaults to the built-in sources)
    #[arg(short, long)]
    pub sources: Option<String>,

    /// Stopword file used for every source, overriding per-source paths
    #[arg(long)]
    pub stopwords: Option<String>,

    /// Number of listing pages to fetch for every source, overriding per-source counts
    #[arg(short, long)]
    pub pages: Option<usize>,

    /// Size of the phrases counted alongside single words
    #[arg(short, long, default_value_t = 2)]
    pub ngram: usize,

    /// How many entries to list and chart per table
    #[arg(short, long, default_value_t = 20)]
    pub top: usize,

    /// Also draw word clouds, bar charts and the Venn summary on the console
    #[arg(long)]
    pub charts: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Output directory for the JSON report
    #[arg(short, long, env = "HEADLINE_STATS_JSON_DIR")]
    pub json_output_dir: Option<String>,

    /// Output directory for the Markdown report
    #[arg(short, long, env = "HEADLINE_STATS_MARKDOWN_DIR")]
    pub markdown_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_stats"]);

        assert_eq!(cli.sources, None);
        assert_eq!(cli.pages, None);
        assert_eq!(cli.ngram, 2);
        assert_eq!(cli.top, 20);
        assert_eq!(cli.timeout_secs, 30);
        assert!(!cli.charts);
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "headline_stats",
            "--sources",
            "sources.yaml",
            "--stopwords",
            "stop.txt",
            "--pages",
            "3",
            "--ngram",
            "3",
            "--top",
            "10",
            "--charts",
            "--json-output-dir",
            "./json",
            "--markdown-output-dir",
            "./markdown",
        ]);

        assert_eq!(cli.sources.as_deref(), Some("sources.yaml"));
        assert_eq!(cli.stopwords.as_deref(), Some("stop.txt"));
        assert_eq!(cli.pages, Some(3));
        assert_eq!(cli.ngram, 3);
        assert_eq!(cli.top, 10);
        assert!(cli.charts);
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
        assert_eq!(cli.markdown_output_dir.as_deref(), Some("./markdown"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "headline_stats",
            "-s",
            "/etc/sources.yaml",
            "-p",
            "1",
            "-n",
            "4",
            "-t",
            "5",
            "-j",
            "/tmp/json",
            "-m",
            "/tmp/markdown",
        ]);

        assert_eq!(cli.sources.as_deref(), Some("/etc/sources.yaml"));
        assert_eq!(cli.pages, Some(1));
        assert_eq!(cli.ngram, 4);
        assert_eq!(cli.top, 5);
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
        assert_eq!(cli.markdown_output_dir.as_deref(), Some("/tmp/markdown"));
    }
}
