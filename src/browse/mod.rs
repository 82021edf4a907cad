pub mod debounce;
pub mod loader;
pub mod query_controller;
pub mod selection;


pub use debounce::Debouncer;
pub use loader::{FetchRequest, FetchResponse, LoadState, PaginatedLoader, SettleOutcome};
pub use query_controller::QueryController;
pub use selection::Selection;
