use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_IIIF_BASE: &str = "https://www.artic.edu/iiif/2";
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings shared by the interactive browser and print mode
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseOptions {
    pub api_base: String,
    pub iiif_base: String,
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            iiif_base: DEFAULT_IIIF_BASE.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}
