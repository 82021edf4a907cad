use crate::catalog::{FetchError, FetchResult, FetchedPage, PageIndex, PageKey, PageKeyGenerator};
use crate::schemas::Artwork;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// First page of the current query in flight, nothing to show
    LoadingInitial,
    /// A later page in flight, earlier pages visible
    LoadingMore,
    /// Last request failed; loaded pages are kept
    Error,
    Settled,
}

/// A page fetch the caller should perform on the loader's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub key: PageKey,
}

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub generation: u64,
    pub key: PageKey,
    pub result: FetchResult<FetchedPage>,
}

impl FetchResponse {
    pub fn new(request: FetchRequest, result: FetchResult<FetchedPage>) -> Self {
        Self {
            generation: request.generation,
            key: request.key,
            result,
        }
    }
}

/// What `on_fetch_settled` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Applied,
    Failed,
    /// Belongs to a query that has since been replaced
    Stale,
    /// Current query, but not the request we are waiting on
    Unsolicited,
}

/// Query-scoped page cache and the state machine that fills it.
///
/// The loader never performs I/O. Operations that need a page return a
/// [`FetchRequest`]; the caller runs it and hands the [`FetchResponse`]
/// back through [`PaginatedLoader::on_fetch_settled`].
///
/// Every query change bumps a generation counter carried by requests and
/// responses, so a late response from a superseded search is recognised
/// even when the user has typed the same text again. At most one request
/// is in flight per generation and a response is only applied when it
/// matches that request, which keeps pages in index order.
#[derive(Debug, Clone)]
pub struct PaginatedLoader {
    keys: PageKeyGenerator,
    query: String,
    generation: u64,
    pages: Vec<Vec<Artwork>>,
    cursor: PageIndex,
    in_flight: Option<PageKey>,
    state: LoadState,
    error: Option<FetchError>,
    exhausted: bool,
}

impl PaginatedLoader {
    pub fn new(keys: PageKeyGenerator) -> Self {
        Self::with_query(keys, String::new())
    }

    pub fn with_query(keys: PageKeyGenerator, query: String) -> Self {
        Self {
            keys,
            query,
            generation: 0,
            pages: Vec::new(),
            cursor: 0,
            in_flight: None,
            state: LoadState::Idle,
            error: None,
            exhausted: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the most recently requested page.
    pub fn cursor(&self) -> PageIndex {
        self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn in_flight(&self) -> Option<&PageKey> {
        self.in_flight.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether `load_more` would currently issue a request.
    pub fn can_load_more(&self) -> bool {
        self.state == LoadState::Settled && !self.exhausted
    }

    /// Fetch the first page of the initial query. Only acts from `Idle`.
    pub fn start(&mut self) -> Option<FetchRequest> {
        if self.state != LoadState::Idle {
            return None;
        }
        let query = self.query.clone();
        self.reset_for(query)
    }

    pub fn on_query_change(&mut self, new_query: &str) -> Option<FetchRequest> {
        if self.state != LoadState::Idle && new_query == self.query {
            debug!(query = %new_query, "query unchanged, keeping cached pages");
            return None;
        }
        self.reset_for(new_query.to_string())
    }

    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            debug!(state = ?self.state, exhausted = self.exhausted, "load_more ignored");
            return None;
        }
        self.cursor += 1;
        let request = self.request(self.cursor);
        self.state = LoadState::LoadingMore;
        Some(request)
    }

    /// Re-request the page that failed. Only acts from `Error`.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.state != LoadState::Error {
            return None;
        }
        let request = self.request(self.cursor);
        self.error = None;
        self.state = if self.pages.is_empty() {
            LoadState::LoadingInitial
        } else {
            LoadState::LoadingMore
        };
        info!(query = %self.query, page = self.cursor, "retrying page");
        Some(request)
    }

    pub fn on_fetch_settled(&mut self, response: FetchResponse) -> SettleOutcome {
        if response.generation != self.generation {
            debug!(
                key = %response.key,
                generation = response.generation,
                current = self.generation,
                "discarding stale response"
            );
            return SettleOutcome::Stale;
        }
        if self.in_flight.as_ref() != Some(&response.key) {
            debug!(key = %response.key, "discarding unsolicited response");
            return SettleOutcome::Unsolicited;
        }
        self.in_flight = None;

        match response.result {
            Ok(page) => {
                let last_page = page.pagination.as_ref().is_some_and(|p| p.is_last_page());
                self.exhausted = page.items.is_empty() || last_page;
                debug!(
                    key = %response.key,
                    items = page.items.len(),
                    exhausted = self.exhausted,
                    "page applied"
                );
                self.pages.push(page.items);
                self.state = LoadState::Settled;
                SettleOutcome::Applied
            }
            Err(err) => {
                warn!(key = %response.key, error = %err, "page fetch failed");
                self.error = Some(err);
                self.state = LoadState::Error;
                SettleOutcome::Failed
            }
        }
    }

    /// All loaded pages in index order, skipping items without an image.
    pub fn flattened_results(&self) -> impl Iterator<Item = &Artwork> {
        self.pages.iter().flatten().filter(|item| item.has_image())
    }

    pub fn displayed_count(&self) -> usize {
        self.flattened_results().count()
    }

    /// Items fetched for the current query, including those without an image.
    pub fn raw_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// A fetch settled successfully and nothing at all came back.
    pub fn no_results(&self) -> bool {
        self.state == LoadState::Settled && self.error.is_none() && self.raw_count() == 0
    }

    fn reset_for(&mut self, query: String) -> Option<FetchRequest> {
        self.generation += 1;
        info!(query = %query, generation = self.generation, "starting query");
        self.query = query;
        self.pages.clear();
        self.cursor = 0;
        self.in_flight = None;
        self.error = None;
        self.exhausted = false;
        self.state = LoadState::LoadingInitial;
        Some(self.request(0))
    }

    /// Callers only get here from `Idle`, `Settled`, `Error` or a fresh
    /// generation, none of which has a request outstanding. Those state
    /// guards are what deduplicate requests.
    fn request(&mut self, page: PageIndex) -> FetchRequest {
        debug_assert!(
            self.in_flight.is_none(),
            "request issued while {:?} is in flight",
            self.in_flight
        );
        let key = self.keys.key(&self.query, page);
        self.in_flight = Some(key.clone());
        FetchRequest {
            generation: self.generation,
            key,
        }
    }
}
