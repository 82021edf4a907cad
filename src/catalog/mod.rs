//! Remote catalog access: request keys and page fetching.

pub mod error;
pub mod fetcher;
pub mod page_key;

#[cfg(test)]
mod fetcher_test;

pub use error::{FetchError, FetchResult};
pub use fetcher::{FetchedPage, HttpFetcher, PageFetcher, parse_page};
pub use page_key::{PageIndex, PageKey, PageKeyGenerator};
