use super::error::{FetchError, FetchResult};
use super::page_key::PageKey;
use crate::config::BrowseOptions;
use crate::schemas::{Artwork, Pagination};
use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Instant;

/// One page of results as returned by the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedPage {
    pub items: Vec<Artwork>,
    pub pagination: Option<Pagination>,
}

impl FetchedPage {
    pub fn new(items: Vec<Artwork>) -> Self {
        Self {
            items,
            pagination: None,
        }
    }
}

/// Performs exactly one request per call. Implementations must not retry
/// and must not touch shared state.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, key: &PageKey) -> FetchResult<FetchedPage>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(options: &BrowseOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(options.request_timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, key: &PageKey) -> FetchResult<FetchedPage> {
        let url = key.url();
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::transport(url, format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .map_err(|e| FetchError::transport(url, e))?;
        let page = parse_page(url, &body)?;

        tracing::debug!(
            key = %key,
            items = page.items.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched page"
        );
        Ok(page)
    }
}

/// Parse a response body: an object whose `data` field is an array of
/// artworks, with an optional `pagination` object.
pub fn parse_page(url: &str, body: &[u8]) -> FetchResult<FetchedPage> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::parse(url, format!("invalid JSON: {e}")))?;

    let Value::Object(mut object) = value else {
        return Err(FetchError::parse(url, "body is not a JSON object"));
    };

    let data = object
        .remove("data")
        .ok_or_else(|| FetchError::parse(url, "missing `data` field"))?;
    if !data.is_array() {
        return Err(FetchError::parse(url, "`data` is not an array"));
    }

    let items: Vec<Artwork> = serde_json::from_value(data)
        .map_err(|e| FetchError::parse(url, format!("malformed artwork: {e}")))?;

    // Pagination is informational; a malformed block does not fail the page
    let pagination = object
        .remove("pagination")
        .and_then(|p| serde_json::from_value::<Pagination>(p).ok());

    Ok(FetchedPage { items, pagination })
}
