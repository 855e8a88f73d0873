use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Returns the lookup name of a key without modifiers.
///
/// Printable characters map to themselves (lowercased, so that
/// `shift+k` and `K` resolve identically); named keys use the fixed
/// names consumers bind against. Keys with no stable name (function
/// keys, media keys) return `None` and never match a binding.
pub fn base_key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_lowercase().collect(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "escape".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        _ => return None,
    };
    Some(name)
}

/// Derives the composite combination string for a key press.
///
/// Modifiers appear in the fixed order ctrl, meta, alt, shift, joined
/// with `+`, followed by the base key name. A bare key yields just its
/// base name.
pub fn key_combination(key: &KeyEvent) -> Option<String> {
    let base = base_key_name(key.code)?;
    let mut parts: Vec<&str> = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl");
    }
    // Terminals disagree about which modifier the command/windows key
    // reports; both spell "meta" in combination strings.
    if key.modifiers.intersects(KeyModifiers::META | KeyModifiers::SUPER) {
        parts.push("meta");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("shift");
    }

    if parts.is_empty() {
        return Some(base);
    }
    Some(format!("{}+{}", parts.join("+"), base))
}

/// Keymap from combination strings to host-defined messages.
///
/// Resolution tries the full combination first and falls back to the
/// bare key name, so a `"q"` binding still fires for `shift+q` unless a
/// more specific `"shift+q"` binding exists.
#[derive(Default)]
pub struct KeyBindings<M> {
    bindings: HashMap<String, M>,
}

impl<M> KeyBindings<M> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, combination: impl Into<String>, message: M) {
        self.bindings.insert(combination.into(), message);
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<&M> {
        let combination = key_combination(key)?;
        if let Some(message) = self.bindings.get(&combination) {
            return Some(message);
        }
        base_key_name(key.code).and_then(|base| self.bindings.get(&base))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
