//! Key mapping from terminal events to simulation actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::LifeAction;

/// Map keyboard input to simulation actions.
///
/// Controls:
/// - SPACE: start/stop
/// - RIGHT ARROW: single step
/// - `c`: clear board
/// - `s`: save board to the in-memory slot
/// - CTRL+`s`: export board to a file
/// - `r`: stop and restore the saved board
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(' ') => Some(LifeAction::TogglePause),
        KeyCode::Right => Some(LifeAction::StepOnce),

        KeyCode::Char('c') | KeyCode::Char('C') if !ctrl => Some(LifeAction::Clear),
        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => Some(LifeAction::ExportBoard),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(LifeAction::SaveSlot),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::RestoreSlot),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
