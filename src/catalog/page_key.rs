use crate::schemas::ARTWORK_FIELDS;
use anyhow::{Context, Result};
use reqwest::Url;
use std::fmt;

/// Zero-based logical page number within one query's result set.
pub type PageIndex = usize;

/// Request identity for one page of one query.
///
/// Two keys built from the same query and page index are equal, which is
/// what lets the loader use them as dedup tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    query: String,
    page: PageIndex,
    url: String,
}

impl PageKey {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> PageIndex {
        self.page
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Page number as sent on the wire (1-based).
    pub fn wire_page(&self) -> usize {
        self.page + 1
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.query, self.page)
    }
}

#[derive(Debug, Clone)]
pub struct PageKeyGenerator {
    browse_endpoint: Url,
    search_endpoint: Url,
}

impl PageKeyGenerator {
    pub fn new(api_base: &str) -> Result<Self> {
        let base = api_base.trim_end_matches('/');
        let browse_endpoint = Url::parse(&format!("{base}/artworks/"))
            .with_context(|| format!("Invalid API base URL: {api_base}"))?;
        let search_endpoint = browse_endpoint
            .join("search")
            .with_context(|| format!("Invalid API base URL: {api_base}"))?;
        Ok(Self {
            browse_endpoint,
            search_endpoint,
        })
    }

    pub fn key(&self, query: &str, page: PageIndex) -> PageKey {
        let mut url = if query.is_empty() {
            self.browse_endpoint.clone()
        } else {
            self.search_endpoint.clone()
        };

        url.query_pairs_mut()
            .append_pair("fields", ARTWORK_FIELDS)
            .append_pair("page", &(page + 1).to_string())
            .append_pair("q", query);

        PageKey {
            query: query.to_string(),
            page,
            url: url.to_string(),
        }
    }
}
