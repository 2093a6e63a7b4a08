//! Terminal event classification.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Helpers shared by every screen's key handling.
pub struct EventHandler;

impl EventHandler {
    /// Returns the key of a press event.
    ///
    /// Release and repeat events are dropped; terminals with the kitty
    /// protocol report them and every key would otherwise fire twice.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }

    /// Ctrl+C quits from anywhere, including modals and text fields.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    #[test]
    fn test_force_quit() {
        assert!(EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = Event::Key(make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(EventHandler::key_press(&release), None);

        let press = make_key_event(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(EventHandler::key_press(&Event::Key(press)), Some(press));
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(EventHandler::key_press(&Event::FocusGained), None);
    }
}
