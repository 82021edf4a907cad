use super::debounce::Debouncer;
use std::time::{Duration, Instant};

/// Owns the search text: the value shown in the input box and the
/// committed query the loader works against.
#[derive(Debug, Clone)]
pub struct QueryController {
    input: String,
    committed: String,
    debouncer: Debouncer<String>,
}

impl QueryController {
    pub fn new(delay: Duration) -> Self {
        Self::with_initial(String::new(), delay)
    }

    /// Start with `initial` already committed (no debounce).
    pub fn with_initial(initial: String, delay: Duration) -> Self {
        Self {
            input: initial.clone(),
            committed: initial,
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// A keystroke changed the input to `value`.
    ///
    /// Non-empty input is scheduled for a debounced commit. Empty input
    /// commits right away and cancels whatever was pending. Returns the new
    /// committed query when the commit changed it.
    pub fn on_input(&mut self, value: String, now: Instant) -> Option<String> {
        if value.is_empty() {
            return self.clear();
        }
        self.input = value.clone();
        self.debouncer.schedule(value, now);
        None
    }

    pub fn clear(&mut self) -> Option<String> {
        self.input.clear();
        self.debouncer.cancel_pending();
        self.commit(String::new())
    }

    /// Commit the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let value = self.debouncer.poll(now)?;
        self.commit(value)
    }

    fn commit(&mut self, value: String) -> Option<String> {
        if value == self.committed {
            tracing::trace!(query = %value, "commit unchanged, ignoring");
            return None;
        }
        tracing::info!(query = %value, "query committed");
        self.committed = value.clone();
        Some(value)
    }
}
