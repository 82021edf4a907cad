use crate::browse::FetchResponse;
use std::time::Instant;

#[derive(Clone, Debug)]
pub enum Message {
    // Query events
    QueryChanged(String),
    ClearQuery,
    Tick(Instant),

    // Loader events
    FetchCompleted(FetchResponse),
    LoadMore,
    Retry,

    // Result list
    SelectResult(usize),

    // Mode changes
    OpenPreview,
    ClosePreview,
    ShowHelp,
    CloseHelp,

    CopyImageUrl,

    Quit,
}
