use crate::constants::DEFAULT_DEBOUNCE_DELAY_MS;
use crate::timer::Countdown;
use std::time::{Duration, Instant};
use tracing::trace;

/// Live-typed query with a trailing-edge debounced copy.
///
/// Every raw-query change re-arms the countdown, discarding the
/// previous deadline; only the value still current after a quiet period
/// reaches `debounced_query`. The debounced query is the only value
/// that drives filtering, so the host recomputes its filtered view
/// exactly when [`tick`] reports a change.
///
/// [`tick`]: SearchFilter::tick
pub struct SearchFilter {
    raw_query: String,
    debounced_query: String,
    delay: Duration,
    pending: Option<Countdown>,
    case_sensitive: bool,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DEBOUNCE_DELAY_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            raw_query: String::new(),
            debounced_query: String::new(),
            delay,
            pending: None,
            case_sensitive: false,
        }
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a raw-query change and re-arms the debounce countdown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.raw_query = query.into();
        self.pending = Some(Countdown::start(self.delay));
    }

    /// Resets the raw query to empty; after the debounce delay the
    /// debounced query empties too and the full collection comes back.
    pub fn clear_search(&mut self) {
        self.set_query(String::new());
    }

    /// Fires the debounce when its deadline has passed. Returns whether
    /// the debounced query changed, i.e. whether the host must
    /// recompute its filtered view.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if !pending.is_elapsed(now) {
            return false;
        }
        self.pending = None;
        if self.debounced_query == self.raw_query {
            return false;
        }
        self.debounced_query = self.raw_query.clone();
        trace!(query = %self.debounced_query, "debounced query settled");
        true
    }

    /// Indices of the items matching the debounced query.
    ///
    /// A whitespace-only debounced query yields every index. Otherwise
    /// each item is tested against the caller's predicate with the
    /// normalized query (lowercased unless case sensitivity is on).
    pub fn filter_indices<T>(
        &self,
        items: &[T],
        matches: impl Fn(&T, &str) -> bool,
    ) -> Vec<usize> {
        let query = self.debounced_query.trim();
        if query.is_empty() {
            return (0..items.len()).collect();
        }
        let normalized = if self.case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches(item, &normalized))
            .map(|(i, _)| i)
            .collect()
    }
}
