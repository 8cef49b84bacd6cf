//! Terminal input translation
//!
//! Maps crossterm events onto controller events:
//! - arrow keys → pan
//! - `+` / `=` → zoom in, `-` / `_` → zoom out
//! - space → reset
//! - Esc or Ctrl-C → quit
//! - terminal resize → resize
//!
//! Anything else is dropped.

use crate::app::{AppEvent, Direction};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn key_to_app_event(key: KeyEvent) -> Option<AppEvent> {
    // Windows reports releases too; only presses count.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        }
        KeyCode::Right => Some(AppEvent::Pan(Direction::Right)),
        KeyCode::Left => Some(AppEvent::Pan(Direction::Left)),
        KeyCode::Up => Some(AppEvent::Pan(Direction::Up)),
        KeyCode::Down => Some(AppEvent::Pan(Direction::Down)),
        KeyCode::Char('+' | '=') => Some(AppEvent::ZoomIn),
        KeyCode::Char('-' | '_') => Some(AppEvent::ZoomOut),
        KeyCode::Char(' ') => Some(AppEvent::Reset),
        _ => None,
    }
}

pub fn event_to_app_event(event: &Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => key_to_app_event(*key),
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}
