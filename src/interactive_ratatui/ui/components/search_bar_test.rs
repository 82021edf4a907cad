#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::*;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_ctrl_key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn query_of(msg: Option<Message>) -> Option<String> {
        match msg {
            Some(Message::QueryChanged(q)) => Some(q),
            _ => None,
        }
    }

    #[test]
    fn test_character_input() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('m')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "m"));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('o')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "mo"));

        assert_eq!(search_bar.query(), "mo");
        assert_eq!(search_bar.cursor_position(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("monet");

        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert_eq!(query_of(msg), Some("mone".to_string()));

        search_bar.set_query("");
        assert!(search_bar.handle_key(create_key_event(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("czanne");

        search_bar.handle_key(create_key_event(KeyCode::Home));
        search_bar.handle_key(create_key_event(KeyCode::Right));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('é')));

        assert_eq!(query_of(msg), Some("cézanne".to_string()));
        assert_eq!(search_bar.cursor_position(), 2);

        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert_eq!(query_of(msg), Some("czanne".to_string()));
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("degas");
        search_bar.handle_key(create_key_event(KeyCode::Home));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Delete));
        assert_eq!(query_of(msg), Some("egas".to_string()));

        search_bar.handle_key(create_key_event(KeyCode::End));
        assert!(search_bar.handle_key(create_key_event(KeyCode::Delete)).is_none());
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("water lilies ");

        let msg = search_bar.handle_key(create_ctrl_key('w'));
        assert_eq!(query_of(msg), Some("water ".to_string()));
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("night hawks");
        search_bar.handle_key(create_ctrl_key('a'));
        for _ in 0..5 {
            search_bar.handle_key(create_key_event(KeyCode::Right));
        }

        let msg = search_bar.handle_key(create_ctrl_key('k'));
        assert_eq!(query_of(msg), Some("night".to_string()));

        let msg = search_bar.handle_key(create_ctrl_key('u'));
        assert_eq!(query_of(msg), Some(String::new()));
        assert!(search_bar.handle_key(create_ctrl_key('u')).is_none());
    }

    #[test]
    fn test_ctrl_keys_do_not_insert() {
        let mut search_bar = SearchBar::new();

        assert!(search_bar.handle_key(create_ctrl_key('l')).is_none());
        assert_eq!(search_bar.query(), "");
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("rodin");

        let msg = search_bar.handle_key(create_key_event(KeyCode::Esc));
        assert!(matches!(msg, Some(Message::ClearQuery)));
        assert_eq!(search_bar.query(), "");

        let msg = search_bar.handle_key(create_key_event(KeyCode::Esc));
        assert!(matches!(msg, Some(Message::Quit)));
    }

    #[test]
    fn test_set_query_keeps_cursor_when_unchanged() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("hopper");
        search_bar.handle_key(create_key_event(KeyCode::Left));

        search_bar.set_query("hopper");
        assert_eq!(search_bar.cursor_position(), 5);

        search_bar.set_query("klee");
        assert_eq!(search_bar.cursor_position(), 4);
    }
}
