#[cfg(test)]
mod tests {
    use crate::interaction::list_navigator::ListNavigator;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn navigator_with(items: &[&str]) -> ListNavigator<String> {
        let mut navigator = ListNavigator::new("Themes", "No themes installed");
        navigator.set_items(items.iter().map(|s| s.to_string()).collect());
        navigator
    }

    #[test]
    fn test_move_down_wraps_when_enabled() {
        let mut navigator = navigator_with(&["a", "b", "c"]);
        navigator.set_wrap(true);

        navigator.move_down();
        navigator.move_down();
        assert_eq!(navigator.selected_index(), 2);
        navigator.move_down();
        assert_eq!(navigator.selected_index(), 0);
    }

    #[test]
    fn test_move_down_clamps_when_wrap_disabled() {
        let mut navigator = navigator_with(&["a", "b", "c"]);

        navigator.move_down();
        navigator.move_down();
        navigator.move_down();
        assert_eq!(navigator.selected_index(), 2);
    }

    #[test]
    fn test_move_up_wraps_to_last() {
        let mut navigator = navigator_with(&["a", "b", "c"]);
        navigator.set_wrap(true);

        navigator.move_up();
        assert_eq!(navigator.selected_index(), 2);

        navigator.set_wrap(false);
        navigator.move_up();
        navigator.move_up();
        navigator.move_up();
        assert_eq!(navigator.selected_index(), 0);
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        let mut navigator: ListNavigator<String> = ListNavigator::default();

        navigator.move_down();
        navigator.move_up();
        assert_eq!(navigator.selected_index(), 0);
        assert!(navigator.selected_item().is_none());

        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = selected.clone();
        navigator.set_on_select(move |item: &String, index| {
            sink.borrow_mut().push((item.clone(), index));
        });
        navigator.select_current();
        assert!(selected.borrow().is_empty());
    }

    #[test]
    fn test_select_current_reports_item_and_index() {
        let mut navigator = navigator_with(&["a", "b", "c"]);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = selected.clone();
        navigator.set_on_select(move |item: &String, index| {
            sink.borrow_mut().push((item.clone(), index));
        });

        navigator.move_down();
        navigator.select_current();
        assert_eq!(selected.borrow().as_slice(), &[("b".to_string(), 1)]);
    }

    #[test]
    fn test_select_current_without_handler_is_a_no_op() {
        let mut navigator = navigator_with(&["a"]);
        navigator.select_current();
        assert_eq!(navigator.selected_index(), 0);
    }

    #[test]
    fn test_cancel_invokes_handler() {
        let mut navigator = navigator_with(&["a"]);
        let cancelled = Rc::new(RefCell::new(0));
        let sink = cancelled.clone();
        navigator.set_on_cancel(move || *sink.borrow_mut() += 1);

        navigator.cancel();
        assert_eq!(*cancelled.borrow(), 1);
    }

    #[test]
    fn test_key_bindings() {
        let mut navigator = navigator_with(&["a", "b", "c"]);
        navigator.set_wrap(true);

        assert!(navigator.handle_key(create_key_event(KeyCode::Down), true));
        assert_eq!(navigator.selected_index(), 1);
        assert!(navigator.handle_key(create_key_event(KeyCode::Char('j')), true));
        assert_eq!(navigator.selected_index(), 2);
        assert!(navigator.handle_key(create_key_event(KeyCode::Up), true));
        assert_eq!(navigator.selected_index(), 1);
        assert!(navigator.handle_key(create_key_event(KeyCode::Char('k')), true));
        assert_eq!(navigator.selected_index(), 0);

        // Unbound keys are not consumed.
        assert!(!navigator.handle_key(create_key_event(KeyCode::Char('x')), true));
    }

    #[test]
    fn test_enter_and_space_select() {
        let mut navigator = navigator_with(&["a", "b"]);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = selected.clone();
        navigator.set_on_select(move |item: &String, _| sink.borrow_mut().push(item.clone()));

        navigator.handle_key(create_key_event(KeyCode::Enter), true);
        navigator.handle_key(create_key_event(KeyCode::Char(' ')), true);
        assert_eq!(selected.borrow().len(), 2);
    }

    #[test]
    fn test_escape_and_q_cancel() {
        let mut navigator = navigator_with(&["a"]);
        let cancelled = Rc::new(RefCell::new(0));
        let sink = cancelled.clone();
        navigator.set_on_cancel(move || *sink.borrow_mut() += 1);

        navigator.handle_key(create_key_event(KeyCode::Esc), true);
        navigator.handle_key(create_key_event(KeyCode::Char('q')), true);
        assert_eq!(*cancelled.borrow(), 2);
    }

    #[test]
    fn test_keys_ignored_while_disabled_or_inactive() {
        let mut navigator = navigator_with(&["a", "b"]);

        assert!(!navigator.handle_key(create_key_event(KeyCode::Down), false));
        assert_eq!(navigator.selected_index(), 0);

        navigator.set_active(false);
        assert!(!navigator.handle_key(create_key_event(KeyCode::Down), true));
        assert_eq!(navigator.selected_index(), 0);

        navigator.set_active(true);
        assert!(navigator.handle_key(create_key_event(KeyCode::Down), true));
        assert_eq!(navigator.selected_index(), 1);
    }

    #[test]
    fn test_set_items_resets_selection() {
        let mut navigator = navigator_with(&["a", "b", "c"]);
        navigator.move_down();
        navigator.move_down();

        navigator.set_items(vec!["x".to_string()]);
        assert_eq!(navigator.selected_index(), 0);
        assert_eq!(navigator.selected_item().map(String::as_str), Some("x"));
    }
}
