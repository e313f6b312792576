//! Page fetch strategies.
//!
//! `FlaticonFetcher` tries the HTML scrape, then the JSON endpoint, then the
//! static catalog, stopping at the first non-empty result. Network and parse
//! failures in the remote strategies are logged and swallowed; the catalog
//! makes the whole chain total.

pub mod json;
pub mod scrape;
pub mod worker;

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::catalog;
use crate::model::types::IconRecord;

const HTTP_TIMEOUT_SECS: u64 = 5;

/// Browser-ish user agent; the search page serves a stripped-down document to
/// unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("parse failure: {0}")]
    Parse(String),
}

/// Seam between the controller's host and the strategy chain. One call yields
/// between 0 and [`PAGE_SIZE`](crate::model::types::PAGE_SIZE) records.
pub trait PageFetcher: Send {
    fn fetch_page(&self, query: &str, page: u32) -> Result<Vec<IconRecord>, FetchError>;
}

pub struct FlaticonFetcher {
    client: reqwest::blocking::Client,
    offline: bool,
}

impl FlaticonFetcher {
    /// `offline` skips the remote strategies entirely and serves straight from
    /// the catalog.
    pub fn new(offline: bool) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, offline })
    }

    fn catalog_page(query: &str, page: u32) -> Vec<IconRecord> {
        let entry = catalog::resolve(query);
        debug!(category = entry.category, query, page, "serving page from catalog");
        catalog::page(entry, page).iter().map(|icon| icon.to_record()).collect()
    }
}

impl PageFetcher for FlaticonFetcher {
    fn fetch_page(&self, query: &str, page: u32) -> Result<Vec<IconRecord>, FetchError> {
        if !self.offline {
            match scrape::fetch(&self.client, query, page) {
                Ok(records) if !records.is_empty() => return Ok(records),
                Ok(_) => debug!(query, page, "scrape strategy matched nothing"),
                Err(err) => debug!(query, page, "scrape strategy failed: {err}"),
            }
            match json::fetch(&self.client, query, page) {
                Ok(records) if !records.is_empty() => return Ok(records),
                Ok(_) => debug!(query, page, "json strategy returned no icons"),
                Err(err) => debug!(query, page, "json strategy failed: {err}"),
            }
        }
        Ok(Self::catalog_page(query, page))
    }
}
