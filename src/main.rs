//! # Headline Stats
//!
//! Scrapes article-listing pages from news sites, extracts headline text and
//! compares the word and phrase frequencies of the sources.
//!
//! ## Usage
//!
//! ```sh
//! headline_stats -s sources.yaml -j ./json -m ./markdown
//! ```
//!
//! ## Architecture
//!
//! The application runs a sequential pipeline:
//! 1. **Scraping**: Fetch listing pages `1..=N` of each source, one at a time
//! 2. **Extraction**: Keep headlines longer than 35 characters
//! 3. **Analysis**: Count words and n-grams with stopwords removed
//! 4. **Comparison**: Intersect the vocabularies of three sources
//! 5. **Output**: Console listings, plus optional JSON and Markdown reports

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod models;
mod outputs;
mod scrapers;
mod stopwords;
mod utils;

use analysis::{Comparison, compare_tables};
use cli::Cli;
use config::ScraperConfig;
use models::{AnalysisReport, SourceAnalysis};
use outputs::console::ConsoleSink;
use outputs::markdown::MarkdownSink;
use outputs::{json, markdown, render_all};
use scrapers::Scraper;
use scrapers::fetch::{FetchPage, PageFetcher};
use stopwords::load_stopwords;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_stats starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Fail before any request if a report cannot be written
    for dir in [&args.json_output_dir, &args.markdown_output_dir]
        .into_iter()
        .flatten()
    {
        if let Err(e) = ensure_writable_dir(Path::new(dir)).await {
            error!(path = %dir, error = %e, "Output directory is not writable");
            return Err(e);
        }
    }

    let sources = match config::load_sources(args.sources.as_deref()) {
        Ok(sources) => apply_overrides(sources, &args),
        Err(e) => {
            error!(error = %e, "Failed to load source configuration");
            return Err(e);
        }
    };

    let fetcher = PageFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let analyses = scrape_and_analyze(&sources, &fetcher, args.ngram).await?;

    let comparison = compare_three(&analyses);

    // ---- Console ----
    let mut console = ConsoleSink::new(std::io::stdout());
    for analysis in &analyses {
        console.collected(&analysis.label, analysis.titles_collected);
    }
    for analysis in &analyses {
        console.source_summary(analysis, args.top);
    }
    if let Some(comparison) = &comparison {
        console.common_words(comparison);
    }
    if args.charts {
        render_all(&mut console, &analyses, comparison.as_ref(), args.top);
    }
    drop(console);

    // ---- Reports ----
    let report = AnalysisReport::new(&analyses, comparison.clone(), args.ngram, args.top);

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_report(&report, Path::new(dir)).await {
            error!(error = %e, "Failed to write JSON report");
        }
    }

    if let Some(dir) = &args.markdown_output_dir {
        let mut sink = MarkdownSink::new(&report);
        render_all(&mut sink, &analyses, comparison.as_ref(), args.top);
        if let Err(e) = markdown::write_markdown(&sink.finish(), &report, Path::new(dir)).await {
            error!(error = %e, "Failed to write Markdown report");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        sources = analyses.len(),
        "Execution complete"
    );

    Ok(())
}

/// Replace per-source page counts and stopword paths with the CLI values, if given.
fn apply_overrides(sources: Vec<ScraperConfig>, args: &Cli) -> Vec<ScraperConfig> {
    sources
        .into_iter()
        .map(|mut source| {
            if let Some(pages) = args.pages {
                source.pages = pages;
            }
            if let Some(path) = &args.stopwords {
                source.stopwords_path = path.into();
            }
            source
        })
        .collect()
}

/// Scrape every source in order and analyze its titles.
///
/// # Errors
///
/// Returns an error if a source's selector does not parse. Page download
/// failures are never errors.
#[instrument(level = "info", skip_all, fields(sources = sources.len(), ngram = ngram))]
async fn scrape_and_analyze<F: FetchPage>(
    sources: &[ScraperConfig],
    fetcher: &F,
    ngram: usize,
) -> Result<Vec<SourceAnalysis>, Box<dyn Error>> {
    let mut analyses = Vec::with_capacity(sources.len());
    for source in sources {
        let titles = Scraper::new(source, fetcher)?.scrape().await;
        let stopwords = load_stopwords(&source.stopwords_path);
        let analysis = SourceAnalysis::analyze(source, &titles, &stopwords, ngram);
        info!(
            source = %analysis.label,
            titles = analysis.titles_collected,
            distinct_words = analysis.words.len(),
            "Analyzed source"
        );
        analyses.push(analysis);
    }
    Ok(analyses)
}

/// Compare vocabularies when exactly three sources were analyzed.
fn compare_three(analyses: &[SourceAnalysis]) -> Option<Comparison> {
    match analyses {
        [a, b, c] => Some(compare_tables(
            [&a.words, &b.words, &c.words],
            [a.label.as_str(), b.label.as_str(), c.label.as_str()],
        )),
        _ => {
            warn!(
                count = analyses.len(),
                "Vocabulary comparison needs exactly three sources; skipping"
            );
            None
        }
    }
}
