use crate::interaction::list_row::ListRow;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

type SelectHandler<T> = Box<dyn FnMut(&T, usize)>;
type CancelHandler = Box<dyn FnMut()>;

/// Selection cursor over an ordered item list.
///
/// Movement wraps past either end when `wrap` is enabled and clamps at
/// the boundary otherwise. Key handling is active only while both the
/// navigator's own flag and the caller's `enabled` flag are set.
pub struct ListNavigator<T> {
    items: Vec<T>,
    selected_index: usize,
    active: bool,
    wrap: bool,
    title: String,
    empty_message: String,
    on_select: Option<SelectHandler<T>>,
    on_cancel: Option<CancelHandler>,
}

impl<T> Default for ListNavigator<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            active: true,
            wrap: false,
            title: String::new(),
            empty_message: String::new(),
            on_select: None,
            on_cancel: None,
        }
    }
}

impl<T> ListNavigator<T> {
    pub fn new(title: impl Into<String>, empty_message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            empty_message: empty_message.into(),
            ..Self::default()
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected_index = 0;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_on_select(&mut self, handler: impl FnMut(&T, usize) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    pub fn set_on_cancel(&mut self, handler: impl FnMut() + 'static) {
        self.on_cancel = Some(Box::new(handler));
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            if self.wrap {
                self.selected_index = self.items.len() - 1;
            }
        } else {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index + 1 == self.items.len() {
            if self.wrap {
                self.selected_index = 0;
            }
        } else {
            self.selected_index += 1;
        }
    }

    /// Invokes the select handler with the current item. No-op on an
    /// empty list or when no handler is configured.
    pub fn select_current(&mut self) {
        let index = self.selected_index;
        if let Some(on_select) = self.on_select.as_mut()
            && let Some(item) = self.items.get(index)
        {
            on_select(item, index);
        }
    }

    pub fn cancel(&mut self) {
        if let Some(on_cancel) = self.on_cancel.as_mut() {
            on_cancel();
        }
    }

    /// Handles a key press; returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, enabled: bool) -> bool {
        if !(self.active && enabled) {
            return false;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_current();
                true
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.cancel();
                true
            }
            _ => false,
        }
    }
}

impl<T: ListRow> ListNavigator<T> {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let available_height = area.height.saturating_sub(2) as usize;
        let available_width = area.width.saturating_sub(2) as usize;

        // Keep the selection visible; one line per item.
        let start = self
            .selected_index
            .saturating_sub(available_height.saturating_sub(1));
        let end = (start + available_height).min(self.items.len());

        let rows: Vec<TuiListItem> = (start..end)
            .filter_map(|i| {
                self.items.get(i).map(|item| {
                    let style = if i == self.selected_index {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    TuiListItem::new(item.create_line(available_width)).style(style)
                })
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items.len()
        );
        let list = List::new(rows)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default());
        f.render_widget(list, area);
    }
}
