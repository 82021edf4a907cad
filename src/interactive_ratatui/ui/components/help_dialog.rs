use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    pub fn help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Artwork Browser",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type        - Search the collection (empty shows everything)"),
            Line::from("  Ctrl+A/E    - Move to start/end of input"),
            Line::from("  Ctrl+W/U/K  - Delete word / to start / to end"),
            Line::from("  Esc         - Clear the query, or quit when it is empty"),
            Line::from(""),
            Self::section("Results:"),
            Line::from("  ↑/↓         - Navigate (↓ on the last row loads more)"),
            Line::from("  Ctrl+P/N    - Previous/next result"),
            Line::from("  PgUp/PgDn   - Move a page"),
            Line::from("  Home/End    - First/last result"),
            Line::from("  Enter       - Preview the artwork"),
            Line::from("  Ctrl+L      - Load the next page"),
            Line::from("  Ctrl+R      - Retry after an error"),
            Line::from(""),
            Self::section("Preview:"),
            Line::from("  c           - Copy image URL to clipboard"),
            Line::from("  Esc/Enter   - Back to results"),
            Line::from(""),
            Line::from("  F1          - Show this help"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
