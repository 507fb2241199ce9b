//! Listing page download.
//!
//! Fetching is best-effort: a page that cannot be downloaded, for whatever
//! reason, is logged and treated as an empty document so the scrape moves on
//! to the next page. There is no retry loop.

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Desktop browser identification sent with every request.
pub const USER_AGENT_VALUE: &str = "Mozilla/5.0";
/// Polish-first content negotiation header sent with every request.
pub const ACCEPT_LANGUAGE_VALUE: &str = "pl-PL,pl;q=0.9";

/// Trait for downloading a listing page.
///
/// Implementors return the page body, or an empty string when the page is
/// unavailable. This seam lets the scraper run against canned pages in tests.
pub trait FetchPage {
    /// Download `url` and return its body text.
    async fn fetch_page(&self, url: &str) -> String;
}

/// HTTP implementation of [`FetchPage`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with the fixed request headers and a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend or client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        debug!(?timeout, "Built HTTP client");
        Ok(Self { client })
    }
}

impl FetchPage for PageFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_page(&self, url: &str) -> String {
        let t0 = Instant::now();
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Request failed; treating page as empty");
                return String::new();
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Unexpected HTTP status; treating page as empty");
            return String::new();
        }

        match response.text().await {
            Ok(body) => {
                debug!(
                    bytes = body.len(),
                    elapsed_ms = t0.elapsed().as_millis() as u64,
                    "Fetched page"
                );
                body
            }
            Err(e) => {
                warn!(error = %e, "Failed reading response body; treating page as empty");
                String::new()
            }
        }
    }
}
