#[cfg(test)]
mod tests {
    use crate::interaction::focus_tracker::FocusTracker;

    #[test]
    fn test_starts_blurred() {
        let tracker = FocusTracker::new();
        assert_eq!(tracker.focused(), None);
        assert!(tracker.history().is_empty());
        assert!(!tracker.is_focused("name"));
    }

    #[test]
    fn test_focus_tracks_the_previous_target() {
        let mut tracker = FocusTracker::new();
        tracker.focus("name");
        tracker.focus("version");

        assert!(tracker.is_focused("version"));
        assert_eq!(tracker.history(), ["name".to_string()]);
    }

    #[test]
    fn test_focus_previous_pops_history() {
        let mut tracker = FocusTracker::new();
        tracker.focus("a");
        tracker.focus("b");

        tracker.focus_previous();
        assert!(tracker.is_focused("a"));
        assert!(!tracker.history().contains(&"a".to_string()));
    }

    #[test]
    fn test_focus_previous_on_empty_history_is_a_no_op() {
        let mut tracker = FocusTracker::new();
        tracker.focus("a");

        tracker.focus_previous();
        assert!(tracker.is_focused("a"));
    }

    #[test]
    fn test_refocusing_removes_older_occurrences() {
        let mut tracker = FocusTracker::new();
        tracker.focus("a");
        tracker.focus("b");
        tracker.focus("c");
        tracker.focus("a");

        assert!(tracker.is_focused("a"));
        assert_eq!(tracker.history(), ["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_blur_clears_focus_but_keeps_history() {
        let mut tracker = FocusTracker::new();
        tracker.focus("a");
        tracker.focus("b");

        tracker.blur();
        assert_eq!(tracker.focused(), None);
        assert_eq!(tracker.history(), ["a".to_string()]);

        // Focusing after a blur pushes nothing extra.
        tracker.focus("c");
        assert_eq!(tracker.history(), ["a".to_string()]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut tracker = FocusTracker::new();
        for i in 0..12 {
            tracker.focus(format!("field-{i}"));
        }

        assert_eq!(tracker.history().len(), 10);
        assert!(tracker.is_focused("field-11"));
        assert_eq!(tracker.history()[0], "field-10");
        // The oldest entries fell off the end.
        assert!(!tracker.history().contains(&"field-0".to_string()));
    }

    #[test]
    fn test_empty_ids_are_never_stored() {
        let mut tracker = FocusTracker::new();
        tracker.focus("a");
        tracker.focus("");

        assert_eq!(tracker.focused(), None);
        assert_eq!(tracker.history(), ["a".to_string()]);

        tracker.focus("b");
        assert_eq!(tracker.history(), ["a".to_string()]);
    }
}
