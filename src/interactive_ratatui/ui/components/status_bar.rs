use crate::interactive_ratatui::domain::models::Status;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// One-line summary of the loader state under the result list.
pub struct StatusBar {
    status: Status,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            status: Status::Loading,
        }
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl Component for StatusBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let style = match self.status {
            Status::Failed(_) => Style::default().fg(Color::Red),
            Status::Loading | Status::LoadingMore => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::DarkGray),
        };
        let line = Line::from(vec![
            Span::styled(self.status.text(), style),
            Span::styled(" | F1: Help", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
