use ratatui::text::{Line, Span};

/// Trait for items that can be displayed by the list navigator.
pub trait ListRow: Clone {
    /// Returns the main display text.
    fn text(&self) -> &str;

    /// Returns an optional dimmed hint shown after the text.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Creates the single display line for the item.
    fn create_line(&self, max_width: usize) -> Line<'static> {
        let mut spans = vec![Span::raw(truncate_text(self.text(), max_width))];
        if let Some(hint) = self.hint() {
            spans.push(Span::raw(format!("  {hint}")));
        }
        Line::from(spans)
    }
}

impl ListRow for String {
    fn text(&self) -> &str {
        self
    }
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width || max_width < 4 {
        text
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 20), "short");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_text("a rather long theme name", 10), "a rathe...");
    }

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(truncate_text("two\nlines", 20), "two lines");
    }
}
