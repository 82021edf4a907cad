use thiserror::Error;

/// Why a single page fetch failed. Neither variant is retried here; the
/// loader decides what happens next.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network unreachable, timeout, non-success status or unreadable body
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    /// Body did not have the expected shape
    #[error("unexpected response from {url}: {reason}")]
    Parse { url: String, reason: String },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
        FetchError::Transport {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(url: impl Into<String>, reason: impl ToString) -> Self {
        FetchError::Parse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. } | FetchError::Parse { url, .. } => url,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
