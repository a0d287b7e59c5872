//! Terminal event polling

use std::time::Duration;

use cloudcmp_app::{InputKey, Message};
use cloudcmp_core::prelude::*;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::widgets::detail_overlay_rect;

/// Poll interval; a timeout becomes a Tick
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Convert a mouse event on a `screen`-sized terminal into a message.
///
/// Left clicks are hit-tested against the detail overlay bounds; the
/// wheel scrolls like the arrow keys.
pub fn mouse_event_to_message(mouse: MouseEvent, screen: Rect) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            Some(Message::Click {
                inside_overlay: detail_overlay_rect(screen).contains(position),
            })
        }
        MouseEventKind::ScrollUp => Some(Message::Key(InputKey::Up)),
        MouseEventKind::ScrollDown => Some(Message::Key(InputKey::Down)),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(screen: Rect) -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        Event::Mouse(mouse) => Ok(mouse_event_to_message(mouse, screen)),
        // Resize is picked up by the next draw
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('u')));
    }

    #[test]
    fn test_shifted_letter_stays_uppercase() {
        let key = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('C')));
    }

    #[test]
    fn test_navigation_keys() {
        for (code, expected) in [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::PageUp, InputKey::PageUp),
            (KeyCode::End, InputKey::End),
        ] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(key_event_to_input(key), Some(expected));
        }
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_click_inside_overlay() {
        let screen = Rect::new(0, 0, 100, 40);
        let click = mouse(MouseEventKind::Down(MouseButton::Left), 50, 20);
        let msg = mouse_event_to_message(click, screen);
        assert!(matches!(msg, Some(Message::Click { inside_overlay: true })));
    }

    #[test]
    fn test_click_outside_overlay() {
        let screen = Rect::new(0, 0, 100, 40);
        let click = mouse(MouseEventKind::Down(MouseButton::Left), 1, 0);
        let msg = mouse_event_to_message(click, screen);
        assert!(matches!(msg, Some(Message::Click { inside_overlay: false })));
    }

    #[test]
    fn test_wheel_scrolls_and_other_buttons_ignored() {
        let screen = Rect::new(0, 0, 100, 40);
        assert!(matches!(
            mouse_event_to_message(mouse(MouseEventKind::ScrollDown, 5, 5), screen),
            Some(Message::Key(InputKey::Down))
        ));
        let right_click = mouse(MouseEventKind::Down(MouseButton::Right), 5, 5);
        assert!(mouse_event_to_message(right_click, screen).is_none());
        assert!(mouse_event_to_message(mouse(MouseEventKind::Moved, 5, 5), screen).is_none());
    }
}
