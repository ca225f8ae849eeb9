use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key that maps to a core action.
    Action(Action),
    /// Terminal was resized; only needs a redraw.
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
///
/// Returns `Ok(None)` on timeout or for input that means nothing to the app.
pub fn poll_event(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event).map(TuiEvent::Action)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Translate a key press into an action. Unbound keys and key releases map to `None`.
pub fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Action::MoveUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Action::MoveDown),
        (_, KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')) => {
            Some(Action::ToggleFocus)
        }
        (_, KeyCode::Char('a')) => Some(Action::AddItem),
        (_, KeyCode::Char('d')) => Some(Action::DeleteItem),
        (_, KeyCode::Char('x')) => Some(Action::Increment),
        (_, KeyCode::Char('z')) => Some(Action::Decrement),
        (_, KeyCode::Char('y')) => Some(Action::ConfirmTouch),
        (_, KeyCode::Char('n') | KeyCode::Esc) => Some(Action::DeclineTouch),
        _ => None,
    }
}
