use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        let plain = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true,
        );
        register(Action::Quit, plain('q'), false);
        register(
            Action::Logout,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
            true,
        );
        register(Action::ToggleHelp, plain('?'), true);
        register(
            Action::ToggleHelp,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            false,
        );

        register(
            Action::NextScreen,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::PreviousScreen,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::PreviousScreen,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            false,
        );

        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(Action::NavigateUp, plain('k'), false);
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(Action::NavigateDown, plain('j'), false);

        register(
            Action::NextPage,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );
        register(Action::NextPage, plain('n'), false);
        register(
            Action::PreviousPage,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(Action::PreviousPage, plain('p'), false);
        register(
            Action::FirstPage,
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            true,
        );
        register(
            Action::LastPage,
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            true,
        );
        register(Action::IncreasePageSize, plain('+'), true);
        register(
            Action::IncreasePageSize,
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT),
            false,
        );
        register(Action::IncreasePageSize, plain('='), false);
        register(Action::DecreasePageSize, plain('-'), true);
        register(Action::Refresh, plain('r'), true);

        register(Action::FocusSearch, plain('/'), true);
        register(
            Action::ClearSearch,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            true,
        );

        register(Action::Create, plain('a'), true);
        register(Action::Edit, plain('e'), true);
        register(
            Action::Edit,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            false,
        );
        register(Action::ToggleStatus, plain('s'), true);
        register(Action::Delete, plain('d'), true);
        register(
            Action::Delete,
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            false,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default registry with user bindings layered on top.
    ///
    /// User bindings take precedence over defaults; unparseable keys are skipped.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for (spec, action) in overrides {
            match parse_key(spec) {
                Some(key) => {
                    registry.input_bindings.insert(0, (key, *action));
                    registry.display_bindings.insert(*action, key);
                }
                None => warn!(key = %spec, "Ignoring unparseable keybinding"),
            }
        }
        registry
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Builds footer entries for the given actions, skipping unbound ones.
    #[must_use]
    pub fn keybinds(&self, actions: &[Action]) -> Vec<Keybind> {
        actions
            .iter()
            .filter_map(|action| {
                self.get(*action)
                    .map(|key| Keybind::new(key, *action, action.label()))
            })
            .collect()
    }
}

/// Parses a key description such as `Ctrl+q`, `Alt+Enter` or `F5`.
#[must_use]
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    let (key_part, modifier_parts) = match parts.split_last() {
        // A lone "+" splits into two empty parts.
        Some((last, rest)) if last.is_empty() && rest.iter().all(|p| p.is_empty()) => {
            ("+", &[][..])
        }
        Some((last, rest)) => (*last, rest),
        None => return None,
    };

    for part in modifier_parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = key_part.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
            Some(Action::Delete)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::NextPage)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(
            parse_key("Ctrl+q"),
            Some(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            parse_key("Alt+Enter"),
            Some(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT))
        );
        assert_eq!(
            parse_key("F5"),
            Some(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE))
        );
        assert_eq!(
            parse_key("+"),
            Some(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE))
        );
        assert_eq!(parse_key("Hyper+x"), None);
        assert_eq!(parse_key("abc"), None);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("x".to_string(), Action::Delete);
        overrides.insert("d".to_string(), Action::Refresh);

        let registry = CommandRegistry::with_overrides(&overrides);

        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::Delete)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
            Some(Action::Refresh)
        );
    }
}
