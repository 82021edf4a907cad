#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Preview,
    Help,
}

/// What the status line reports about the result set.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Loading,
    LoadingMore,
    Failed(String),
    NoResults,
    Showing {
        shown: usize,
        fetched: usize,
        more: bool,
    },
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Loading => "Loading…".to_string(),
            Status::LoadingMore => "Loading more…".to_string(),
            Status::Failed(reason) => format!("Something went wrong: {reason} (Ctrl+R to retry)"),
            Status::NoResults => "No artworks found".to_string(),
            Status::Showing {
                shown,
                fetched,
                more,
            } => {
                let mut text = format!("{shown} artworks with images ({fetched} fetched)");
                if *more {
                    text.push_str(" | Ctrl+L: Load more");
                } else {
                    text.push_str(" | end of results");
                }
                text
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}
