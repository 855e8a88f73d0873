use crate::constants::FOCUS_HISTORY_LIMIT;
use smallvec::SmallVec;

/// Currently focused identifier plus a bounded most-recent-first
/// history used to return focus to the previous target.
///
/// History never holds duplicates or empty ids and is capped at
/// [`FOCUS_HISTORY_LIMIT`] entries.
#[derive(Default)]
pub struct FocusTracker {
    focused: Option<String>,
    history: SmallVec<[String; FOCUS_HISTORY_LIMIT]>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Moves focus to `id`, pushing the previously focused id onto the
    /// front of history. Any older occurrence of `id` leaves the
    /// history first, and empty ids are never stored.
    pub fn focus(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.history.retain(|entry| entry.as_str() != id);
        if let Some(previous) = self.focused.take()
            && !previous.is_empty()
        {
            self.history.insert(0, previous);
        }
        self.history.truncate(FOCUS_HISTORY_LIMIT);
        self.focused = (!id.is_empty()).then_some(id);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Returns focus to the most recent history entry, removing it from
    /// history. No-op when the history is empty.
    pub fn focus_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.focused = Some(self.history.remove(0));
    }
}
