pub mod browse;
pub mod catalog;
pub mod config;
pub mod interactive_ratatui;
pub mod logging;
pub mod print;
pub mod schemas;

pub use browse::{LoadState, PaginatedLoader, QueryController, Selection};
pub use catalog::{FetchError, HttpFetcher, PageFetcher, PageKeyGenerator};
pub use config::BrowseOptions;
pub use schemas::Artwork;
