use crate::interactive_ratatui::constants::{SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::interactive_ratatui::domain::models::Status;
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, artwork_detail::ArtworkDetail, help_dialog::HelpDialog, result_list::ResultList,
    search_bar::SearchBar, status_bar::StatusBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    status_bar: StatusBar,
    artwork_detail: ArtworkDetail,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            result_list: ResultList::new(),
            ..Self::default()
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::Preview => self.render_preview_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        self.search_bar.set_query(state.query.input());
        self.search_bar.set_pending(state.query.is_pending());
        self.search_bar.set_message(state.ui.message.clone());

        let status = state.status();
        self.result_list.set_empty_message(match &status {
            Status::Failed(_) => "Something went wrong".to_string(),
            other => other.text(),
        });
        self.result_list.set_results(state.results.items.clone());
        self.result_list.set_selected_index(state.results.selected_index);
        self.status_bar.set_status(status);

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);
        self.status_bar.render(f, chunks[2]);
    }

    fn render_preview_mode(&mut self, f: &mut Frame, state: &AppState) {
        match state.selection.selected() {
            Some(artwork) => {
                self.artwork_detail
                    .set_artwork(artwork.clone(), state.selected_image_url());
                self.artwork_detail.render(f, f.area());
            }
            None => {
                self.artwork_detail.clear();
                self.render_search_mode(f, state);
            }
        }
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        // Render the screen the help was opened from underneath
        if state.ui.help_return_mode == Mode::Preview && state.selection.is_active() {
            self.render_preview_mode(f, state);
        } else {
            self.render_search_mode(f, state);
        }
        self.help_dialog.render(f, f.area());
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_artwork_detail_mut(&mut self) -> &mut ArtworkDetail {
        &mut self.artwork_detail
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
