//! Maps key presses to screen actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the current screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    Select,
    OpenWebsite,
    Back,
    Reload,
    Quit,
}

/// Translates a key event into an [`Action`]. Releases and repeats of
/// unbound keys yield `None`.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('w') => Action::OpenWebsite,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Action::Back,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    tracing::debug!("Key {:?} -> {:?}", key.code, action);
    Some(action)
}
