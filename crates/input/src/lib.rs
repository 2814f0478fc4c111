//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! never sees raw key codes; this crate is the only place they are interpreted.

pub mod map;

pub use term_blocks_types as types;

pub use map::{action_for_key, handle_key_event, is_start_key, should_quit};
