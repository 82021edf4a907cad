use crate::browse::{LoadState, PaginatedLoader, QueryController, Selection, SettleOutcome};
use crate::catalog::PageKeyGenerator;
use crate::config::BrowseOptions;
use crate::interactive_ratatui::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive_ratatui::domain::models::Status;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::Artwork;
use anyhow::Result;
use std::time::Instant;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub query: QueryController,
    pub loader: PaginatedLoader,
    pub selection: Selection,
    pub results: ResultsState,
    pub ui: UiState,
    iiif_base: String,
}

/// Displayable items derived from the loader, plus the highlighted row.
pub struct ResultsState {
    pub items: Vec<Artwork>,
    pub selected_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
    /// Mode to return to when the help dialog closes
    pub help_return_mode: Mode,
}

impl AppState {
    pub fn new(options: &BrowseOptions, initial_query: &str) -> Result<Self> {
        let keys = PageKeyGenerator::new(&options.api_base)?;
        Ok(Self {
            mode: Mode::Search,
            query: QueryController::with_initial(initial_query.to_string(), options.debounce),
            loader: PaginatedLoader::with_query(keys, initial_query.to_string()),
            selection: Selection::new(),
            results: ResultsState {
                items: Vec::new(),
                selected_index: 0,
            },
            ui: UiState {
                message: None,
                help_return_mode: Mode::Search,
            },
            iiif_base: options.iiif_base.clone(),
        })
    }

    /// First fetch for the initial query.
    pub fn start(&mut self) -> Command {
        self.loader.start().into()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => match self.query.on_input(q, Instant::now()) {
                Some(committed) => self.commit_query(&committed),
                None => Command::None,
            },
            Message::ClearQuery => match self.query.clear() {
                Some(committed) => self.commit_query(&committed),
                None => Command::None,
            },
            Message::Tick(now) => match self.query.poll(now) {
                Some(committed) => self.commit_query(&committed),
                None => Command::None,
            },
            Message::FetchCompleted(response) => {
                match self.loader.on_fetch_settled(response) {
                    SettleOutcome::Applied | SettleOutcome::Failed => self.refresh_results(),
                    SettleOutcome::Stale | SettleOutcome::Unsolicited => {}
                }
                Command::None
            }
            Message::LoadMore => self.loader.load_more().into(),
            Message::Retry => match self.loader.retry() {
                Some(request) => Command::Fetch(request),
                None => Command::ShowMessage("Nothing to retry".to_string()),
            },
            Message::SelectResult(index) => {
                if index < self.results.items.len() {
                    self.results.selected_index = index;
                }
                Command::None
            }
            Message::OpenPreview => {
                if let Some(item) = self.results.items.get(self.results.selected_index) {
                    self.selection.select(item);
                    self.mode = Mode::Preview;
                }
                Command::None
            }
            Message::ClosePreview => {
                self.selection.clear();
                self.mode = Mode::Search;
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.ui.help_return_mode = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                self.mode = match self.ui.help_return_mode {
                    Mode::Preview if self.selection.is_active() => Mode::Preview,
                    _ => Mode::Search,
                };
                Command::None
            }
            Message::CopyImageUrl => match self.selected_image_url() {
                Some(url) => Command::CopyToClipboard(url),
                None => Command::ShowMessage("No image to copy".to_string()),
            },
            Message::Quit => Command::Quit,
        }
    }

    pub fn status(&self) -> Status {
        match self.loader.state() {
            LoadState::Idle | LoadState::LoadingInitial => Status::Loading,
            LoadState::LoadingMore => Status::LoadingMore,
            LoadState::Error => Status::Failed(
                self.loader
                    .error()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            ),
            LoadState::Settled if self.loader.no_results() => Status::NoResults,
            LoadState::Settled => Status::Showing {
                shown: self.results.items.len(),
                fetched: self.loader.raw_count(),
                more: self.loader.can_load_more(),
            },
        }
    }

    pub fn selected_image_url(&self) -> Option<String> {
        self.selection.selected()?.image_url(&self.iiif_base)
    }

    /// Schedules the transient message to disappear.
    pub fn flash(&mut self, message: String) -> Command {
        self.ui.message = Some(message);
        Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
    }

    fn commit_query(&mut self, query: &str) -> Command {
        self.selection.clear();
        self.results.selected_index = 0;
        if self.mode == Mode::Preview {
            self.mode = Mode::Search;
        }
        let command: Command = self.loader.on_query_change(query).into();
        self.refresh_results();
        command
    }

    fn refresh_results(&mut self) {
        self.results.items = self.loader.flattened_results().cloned().collect();
        if self.results.selected_index >= self.results.items.len() {
            self.results.selected_index = self.results.items.len().saturating_sub(1);
        }
        self.selection.retain_if_present(&self.results.items);
    }
}
