//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a gameplay key to its action.
///
/// Only the four arrows are gameplay keys; everything else yields `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::RotateCw),
        _ => None,
    }
}

/// Check if key triggers the start/restart control.
pub fn is_start_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Resolve a key press into an action, start control included.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if is_start_key(key) {
        return Some(GameAction::Start);
    }
    handle_key_event(key)
}
