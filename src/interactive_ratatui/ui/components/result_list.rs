use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::Artwork;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

#[derive(Default)]
pub struct ResultList {
    items: Vec<Artwork>,
    selected_index: usize,
    scroll_offset: usize,
    empty_message: String,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            empty_message: "No artworks found".to_string(),
            ..Self::default()
        }
    }

    pub fn set_results(&mut self, items: Vec<Artwork>) {
        self.items = items;
        if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len().saturating_sub(1);
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() || self.items.is_empty() {
            self.selected_index = index;
        }
    }

    /// Shown in place of the list while it is empty.
    pub fn set_empty_message(&mut self, message: String) {
        self.empty_message = message;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_result(&self) -> Option<&Artwork> {
        self.items.get(self.selected_index)
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        if index == self.selected_index {
            return None;
        }
        self.selected_index = index;
        Some(Message::SelectResult(index))
    }

    fn adjust_scroll_offset(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
    }

    fn create_line(item: &Artwork, width: usize) -> Line<'static> {
        let title = if item.title.is_empty() {
            "Untitled"
        } else {
            item.title.as_str()
        };
        let mut spans = vec![Span::styled(
            truncate(title, width),
            Style::default().fg(Color::White),
        )];
        let remaining = width.saturating_sub(title.chars().count() + 3);
        if !item.attribution.is_empty() && remaining > 0 {
            spans.push(Span::styled(
                format!(" · {}", truncate(&item.attribution, remaining)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title("Artworks").borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.adjust_scroll_offset(visible);
        let start = self.scroll_offset;
        let end = (start + visible).min(self.items.len());
        let width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = (start..end)
            .map(|i| {
                let style = if i == self.selected_index {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Self::create_line(&self.items[i], width)).style(style)
            })
            .collect();

        let title = format!(
            "Artworks ({}/{}) - Showing {}-{}",
            self.selected_index + 1,
            self.items.len(),
            start + 1,
            end
        );

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.select(self.selected_index.saturating_sub(1)),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index.saturating_sub(1))
            }
            // Scrolling past the last row asks for the next page
            KeyCode::Down if self.selected_index >= self.last_index() => Some(Message::LoadMore),
            KeyCode::Down => self.select(self.selected_index + 1),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.select((self.selected_index + 1).min(self.last_index()))
            }
            KeyCode::PageUp => self.select(self.selected_index.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => {
                self.select((self.selected_index + PAGE_SIZE).min(self.last_index()))
            }
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.last_index()),
            KeyCode::Enter if !self.items.is_empty() => Some(Message::OpenPreview),
            _ => None,
        }
    }
}
