use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Rows moved per mouse wheel notch
pub const WHEEL_ROWS: i32 = 3;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    /// Mouse wheel, positive is down
    Wheel(i32),
    /// Pointer moved to a screen cell
    PointerMove { column: u16, row: u16 },
    PointerDown { column: u16, row: u16 },
    PointerUp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Shift is implied by uppercase characters; normalise so "G" matches
    let modifiers = match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => key.modifiers | KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    let binding = KeyBinding::new(key.code, modifiers);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Translate a mouse event into an action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Action::PointerMove { column, row },
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { column, row },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        MouseEventKind::ScrollDown => Action::Wheel(WHEEL_ROWS),
        MouseEventKind::ScrollUp => Action::Wheel(-WHEEL_ROWS),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use landing_core::AppConfig;
    use std::sync::Arc;
    use std::time::Instant;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()), Theme::default(), Instant::now())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let mut app = app();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_uppercase_without_shift_flag() {
        let keymap = Keymap::default();
        let app = app();
        let big_g = key(KeyCode::Char('G'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(big_g, &app, &keymap), Action::JumpToBottom);
    }

    #[test]
    fn test_ctrl_scrolls() {
        let keymap = Keymap::default();
        let app = app();
        let ctrl_f = key(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_f, &app, &keymap), Action::ScrollPageDown);
        let unbound = key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(unbound, &app, &keymap), Action::None);
    }

    #[test]
    fn test_mouse_events() {
        let event = |kind| MouseEvent {
            kind,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Moved)),
            Action::PointerMove { column: 4, row: 7 }
        );
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::ScrollDown)),
            Action::Wheel(WHEEL_ROWS)
        );
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Up(MouseButton::Left))),
            Action::PointerUp
        );
    }
}
