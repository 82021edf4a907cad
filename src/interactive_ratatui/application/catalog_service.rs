use crate::browse::{FetchRequest, FetchResponse};
use crate::catalog::PageFetcher;
use std::sync::Arc;

/// Runs loader requests against a [`PageFetcher`] and packages the result
/// with the request's identity.
#[derive(Clone)]
pub struct CatalogService {
    fetcher: Arc<dyn PageFetcher>,
}

impl CatalogService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn fetch(&self, request: FetchRequest) -> FetchResponse {
        tracing::info!(key = %request.key, generation = request.generation, "fetching page");
        let result = self.fetcher.fetch(&request.key);
        FetchResponse::new(request, result)
    }
}
