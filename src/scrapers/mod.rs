//! Paginated headline scraping.
//!
//! A scrape walks the listing pages of one source in order:
//!
//! 1. **URL**: `base_url` followed by the page index (`1..=pages`)
//! 2. **Fetch**: download the page with a [`FetchPage`] implementation
//! 3. **Extract**: pull long enough headlines with a [`TitleExtractor`]
//!
//! Pages are requested strictly one after another. A page that fails to
//! download contributes no titles and the scrape continues with the next one.
//!
//! # Submodules
//!
//! - [`fetch`]: HTTP download with fixed headers
//! - [`extract`]: selector-based headline extraction

pub mod extract;
pub mod fetch;

use crate::config::ScraperConfig;
use extract::TitleExtractor;
use fetch::FetchPage;
use futures::stream::{self, StreamExt};
use rand::{Rng, rng};
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Scrapes the listing pages of a single configured source.
#[derive(Debug)]
pub struct Scraper<'a, F> {
    config: &'a ScraperConfig,
    fetcher: &'a F,
    extractor: TitleExtractor,
}

impl<'a, F: FetchPage> Scraper<'a, F> {
    /// Prepare a scraper for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured selector does not parse.
    pub fn new(config: &'a ScraperConfig, fetcher: &'a F) -> Result<Self, Box<dyn Error>> {
        let extractor = TitleExtractor::new(&config.selector)?;
        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// URL of listing page `page`.
    pub fn page_url(&self, page: usize) -> String {
        format!("{}{}", self.config.base_url, page)
    }

    /// Fetch every configured page and return the collected titles in page
    /// order, document order within a page.
    #[instrument(level = "info", skip_all, fields(source = %self.config.display_label(), pages = self.config.pages))]
    pub async fn scrape(&self) -> Vec<String> {
        let per_page: Vec<Vec<String>> = stream::iter(1..=self.config.pages)
            .then(|page| async move {
                if page > 1 {
                    self.pause().await;
                }
                let url = self.page_url(page);
                let html = self.fetcher.fetch_page(&url).await;
                let titles = self.extractor.extract(&html);
                debug!(page, %url, count = titles.len(), "Scraped page");
                titles
            })
            .collect()
            .await;

        let titles: Vec<String> = per_page.into_iter().flatten().collect();
        info!(count = titles.len(), "Collected titles");
        titles
    }

    /// Delay before the next page: `page_delay_ms` plus up to `page_jitter_ms`.
    fn pause_duration(&self) -> Duration {
        let base = self.config.page_delay_ms;
        let jitter = if self.config.page_jitter_ms > 0 {
            rng().random_range(0..=self.config.page_jitter_ms)
        } else {
            0
        };
        Duration::from_millis(base.saturating_add(jitter))
    }

    async fn pause(&self) {
        let delay = self.pause_duration();
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
