use crate::constants::{
    DEFAULT_NOTIFICATION_DURATION_MS, MAX_VISIBLE_NOTIFICATIONS, TOAST_MARGIN, TOAST_WIDTH,
};
use crate::domain::models::{
    Notification, NotificationAction, NotificationKind, NotificationPosition,
};
use crate::timer::Countdown;
use chrono::Utc;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub max_visible: usize,
    pub default_duration_ms: u64,
    pub position: NotificationPosition,
    pub pause_on_hover: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            max_visible: MAX_VISIBLE_NOTIFICATIONS,
            default_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            position: NotificationPosition::TopRight,
            pause_on_hover: true,
        }
    }
}

struct Entry {
    notification: Notification,
    expiry: Option<Countdown>,
}

/// Bounded, newest-first list of transient messages with per-entry
/// auto-expiry.
///
/// Expiry deadlines live inside the entries, so dismissing, evicting or
/// dropping the center cancels them with the state they would have
/// mutated. The host's poll loop drives expiry through [`tick`].
///
/// [`tick`]: NotificationCenter::tick
pub struct NotificationCenter {
    config: NotificationConfig,
    entries: Vec<Entry>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

impl NotificationCenter {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Adds a notification and returns its id.
    ///
    /// The newest notification sits at the front; anything beyond
    /// `max_visible` is evicted together with its pending deadline. A
    /// `duration_ms` of `Some(0)` disables auto-expiry.
    pub fn add(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<String>,
        duration_ms: Option<u64>,
        actions: Vec<NotificationAction>,
    ) -> String {
        let duration_ms = duration_ms.unwrap_or(self.config.default_duration_ms);
        let id = next_notification_id();
        let notification = Notification {
            id: id.clone(),
            kind,
            title: title.into(),
            message,
            duration_ms,
            actions,
            created_at: Utc::now(),
        };
        let expiry = (duration_ms > 0).then(|| Countdown::start(Duration::from_millis(duration_ms)));

        self.entries.insert(0, Entry { notification, expiry });
        let cap = self.config.max_visible.min(self.entries.len());
        for evicted in self.entries.drain(cap..) {
            debug!(id = %evicted.notification.id, "evicted overflowing notification");
        }

        debug!(id = %id, ?kind, "added notification");
        id
    }

    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        duration_ms: Option<u64>,
    ) -> String {
        self.add(NotificationKind::Success, title, message, duration_ms, Vec::new())
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        duration_ms: Option<u64>,
    ) -> String {
        self.add(NotificationKind::Error, title, message, duration_ms, Vec::new())
    }

    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        duration_ms: Option<u64>,
    ) -> String {
        self.add(NotificationKind::Warning, title, message, duration_ms, Vec::new())
    }

    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        duration_ms: Option<u64>,
    ) -> String {
        self.add(NotificationKind::Info, title, message, duration_ms, Vec::new())
    }

    /// Loading notifications never expire; the caller dismisses them
    /// when the underlying work finishes.
    pub fn loading(&mut self, title: impl Into<String>, message: Option<String>) -> String {
        self.add(NotificationKind::Loading, title, message, Some(0), Vec::new())
    }

    /// Removes the notification with the given id, canceling its pending
    /// deadline. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.notification.id != id);
        if self.entries.len() < before {
            debug!(id, "dismissed notification");
        }
    }

    /// Empties the list; every pending deadline goes with it.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Removes every entry whose deadline has passed and returns the
    /// dismissed ids. Called from the host's poll loop.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let mut dismissed = Vec::new();
        self.entries.retain(|entry| {
            let expired = entry.expiry.is_some_and(|countdown| countdown.is_elapsed(now));
            if expired {
                dismissed.push(entry.notification.id.clone());
            }
            !expired
        });
        if !dismissed.is_empty() {
            debug!(count = dismissed.len(), "auto-dismissed notifications");
        }
        dismissed
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.entries
            .iter()
            .map(|entry| &entry.notification)
            .find(|notification| notification.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draws the toast stack in the configured corner.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        if self.entries.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width.saturating_sub(2 * TOAST_MARGIN));
        if width < 8 {
            return;
        }
        let x = match self.config.position {
            NotificationPosition::TopRight | NotificationPosition::BottomRight => {
                area.right().saturating_sub(width + TOAST_MARGIN)
            }
            NotificationPosition::TopLeft | NotificationPosition::BottomLeft => {
                area.x + TOAST_MARGIN
            }
        };

        let mut offset = TOAST_MARGIN;
        for entry in &self.entries {
            let height = toast_height(&entry.notification);
            if offset + height > area.height {
                break;
            }
            let y = match self.config.position {
                NotificationPosition::TopRight | NotificationPosition::TopLeft => area.y + offset,
                NotificationPosition::BottomRight | NotificationPosition::BottomLeft => {
                    area.bottom().saturating_sub(offset + height)
                }
            };
            let rect = Rect::new(x, y, width, height);
            f.render_widget(Clear, rect);
            render_toast(f, rect, &entry.notification);
            offset += height;
        }
    }
}

fn toast_height(notification: &Notification) -> u16 {
    // Title line plus an optional message line, inside borders.
    if notification.message.is_some() { 4 } else { 3 }
}

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Info => Color::Blue,
        NotificationKind::Loading => Color::Cyan,
    }
}

fn kind_symbol(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
        NotificationKind::Warning => "!",
        NotificationKind::Info => "i",
        NotificationKind::Loading => "…",
    }
}

fn render_toast(f: &mut Frame, rect: Rect, notification: &Notification) {
    let color = kind_color(notification.kind);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", kind_symbol(notification.kind)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            notification.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(message) = &notification.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    let toast = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(toast, rect);
}

fn next_notification_id() -> String {
    // Time-based with a random suffix; only needs to be unique within a
    // single process run.
    format!("{}-{:04x}", Utc::now().timestamp_millis(), rand::random::<u16>())
}
