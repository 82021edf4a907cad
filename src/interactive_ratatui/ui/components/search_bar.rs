use crate::interactive_ratatui::ui::components::{Component, is_exit_prompt};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_pending: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with the app state. The cursor only moves when the text differs,
    /// so redraws don't reset it.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_pending(&mut self, is_pending: bool) {
        self.is_pending = is_pending;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(i, _)| i)
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    /// Delete chars in `start..end` and report the new query if anything went.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.len() {
            return None;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_offset(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let split = self.byte_offset(self.cursor_position);
        let (before, rest) = self.query.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().unwrap_or(' ').to_string();

        let input_text = vec![
            Span::raw(before.to_string()),
            Span::styled(under_cursor, cursor_style),
            Span::raw(rest_chars.as_str().to_string()),
        ];

        let mut title = "Search artworks".to_string();
        if self.is_pending {
            title.push_str(" [typing...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let border_style = if is_exit_prompt(&self.message) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.len();
                    None
                }
                // Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.len()),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                if self.query.is_empty() {
                    Some(Message::Quit)
                } else {
                    self.query.clear();
                    self.cursor_position = 0;
                    Some(Message::ClearQuery)
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => self.insert(c),
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.delete_range(self.cursor_position - 1, self.cursor_position)
            }
            KeyCode::Delete => self.delete_range(self.cursor_position, self.cursor_position + 1),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.len());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.len();
                None
            }
            _ => None,
        }
    }
}
