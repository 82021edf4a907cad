use crate::interactive_ratatui::constants::{PAGE_SIZE, PREVIEW_HEADER_HEIGHT};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::Artwork;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Full-screen preview of the selected artwork.
#[derive(Default)]
pub struct ArtworkDetail {
    artwork: Option<Artwork>,
    image_url: Option<String>,
    scroll_offset: usize,
}

impl ArtworkDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_artwork(&mut self, artwork: Artwork, image_url: Option<String>) {
        if self.artwork.as_ref().map(|a| &a.id) != Some(&artwork.id) {
            self.scroll_offset = 0;
        }
        self.artwork = Some(artwork);
        self.image_url = image_url;
    }

    pub fn clear(&mut self) {
        self.artwork = None;
        self.image_url = None;
        self.scroll_offset = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Last body line can scroll up to the top of the pane, no further.
    fn max_scroll(&self) -> usize {
        self.artwork.as_ref().map_or(0, |artwork| {
            Self::body_lines(artwork, self.image_url.as_deref())
                .len()
                .saturating_sub(1)
        })
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll());
    }

    fn label(name: &str) -> Span<'static> {
        Span::styled(
            format!("{name:<12}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn body_lines(artwork: &Artwork, image_url: Option<&str>) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![Self::label("ID:"), Span::raw(artwork.id.clone())]),
            Line::from(vec![
                Self::label("Image:"),
                Span::styled(
                    image_url.unwrap_or("(none)").to_string(),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(""),
            Line::from(Self::label("Categories:")),
        ];

        let categories: Vec<Line<'static>> = artwork
            .categories()
            .map(|category| {
                let mut spans = vec![Span::raw(format!("  • {}", category.title))];
                if let Some(id) = category.id {
                    spans.push(Span::styled(
                        format!(" ({id})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        if categories.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.extend(categories);
        }
        lines
    }
}

impl Component for ArtworkDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(artwork) = &self.artwork else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PREVIEW_HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let title = if artwork.title.is_empty() {
            "Untitled".to_string()
        } else {
            artwork.title.clone()
        };
        let attribution = if artwork.attribution.is_empty() {
            "Unknown artist".to_string()
        } else {
            artwork.attribution.clone()
        };
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(attribution, Style::default().fg(Color::White))),
        ])
        .block(Block::default().title(" Preview ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        f.render_widget(header, chunks[0]);

        let body = Paragraph::new(Self::body_lines(artwork, self.image_url.as_deref()))
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        f.render_widget(body, chunks[1]);

        let status = Paragraph::new("c: Copy image URL | ↑/↓: Scroll | Esc/Enter: Close | F1: Help")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(status, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_down(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.scroll_down(PAGE_SIZE);
                None
            }
            KeyCode::Char('c') => Some(Message::CopyImageUrl),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => Some(Message::ClosePreview),
            _ => None,
        }
    }
}
