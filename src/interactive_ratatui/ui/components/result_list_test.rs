#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::result_list::*;
    use crate::interactive_ratatui::ui::events::Message;
    use crate::schemas::Artwork;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_artworks(count: usize) -> Vec<Artwork> {
        (0..count)
            .map(|i| Artwork {
                id: i.to_string(),
                image_id: Some(format!("img-{i}")),
                title: format!("Study {i}"),
                attribution: "Claude Monet".to_string(),
                category_titles: None,
                category_ids: None,
            })
            .collect()
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let cell = buffer.cell((x, y)).unwrap();
                output.push_str(cell.symbol());
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_navigation() {
        let mut list = ResultList::new();
        list.set_results(create_artworks(3));

        let msg = list.handle_key(create_key_event(KeyCode::Down));
        assert!(matches!(msg, Some(Message::SelectResult(1))));

        let msg = list.handle_key(create_key_event(KeyCode::Up));
        assert!(matches!(msg, Some(Message::SelectResult(0))));

        // Already at the top
        assert!(list.handle_key(create_key_event(KeyCode::Up)).is_none());

        let msg = list.handle_key(create_key_event(KeyCode::End));
        assert!(matches!(msg, Some(Message::SelectResult(2))));
        assert_eq!(list.selected_result().map(|a| a.id.as_str()), Some("2"));
    }

    #[test]
    fn test_down_on_last_row_requests_more() {
        let mut list = ResultList::new();
        list.set_results(create_artworks(2));
        list.set_selected_index(1);

        let msg = list.handle_key(create_key_event(KeyCode::Down));
        assert!(matches!(msg, Some(Message::LoadMore)));
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut list = ResultList::new();
        list.set_results(create_artworks(25));

        let msg = list.handle_key(create_key_event(KeyCode::PageDown));
        assert!(matches!(msg, Some(Message::SelectResult(10))));
        list.handle_key(create_key_event(KeyCode::PageDown));
        let msg = list.handle_key(create_key_event(KeyCode::PageDown));
        assert!(matches!(msg, Some(Message::SelectResult(24))));

        let msg = list.handle_key(create_key_event(KeyCode::PageUp));
        assert!(matches!(msg, Some(Message::SelectResult(14))));
        let msg = list.handle_key(create_key_event(KeyCode::Home));
        assert!(matches!(msg, Some(Message::SelectResult(0))));
    }

    #[test]
    fn test_enter_opens_preview() {
        let mut list = ResultList::new();
        assert!(list.handle_key(create_key_event(KeyCode::Enter)).is_none());

        list.set_results(create_artworks(1));
        let msg = list.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::OpenPreview)));
    }

    #[test]
    fn test_shrinking_results_clamps_selection() {
        let mut list = ResultList::new();
        list.set_results(create_artworks(10));
        list.set_selected_index(8);

        list.set_results(create_artworks(3));
        assert_eq!(list.selected_index(), 2);
    }

    #[test]
    fn test_render_scrolls_to_selection() {
        let backend = TestBackend::new(60, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = ResultList::new();
        list.set_results(create_artworks(20));
        list.set_selected_index(12);

        terminal.draw(|f| list.render(f, f.area())).unwrap();

        // Five visible rows inside the borders
        assert_eq!(list.scroll_offset(), 8);
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Study 12"));
        assert!(!content.contains("Study 7 "));
    }

    #[test]
    fn test_render_empty_message() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = ResultList::new();
        list.set_empty_message("Loading…".to_string());

        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Loading"));
    }
}
