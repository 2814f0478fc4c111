//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board snapshot is drawn into a
//! plain framebuffer, which is then flushed to the terminal backend.
//!
//! - [`fb`]: framebuffer and glyph styles
//! - [`game_view`]: pure snapshot → framebuffer mapping
//! - [`renderer`]: framebuffer → crossterm escape stream, with diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_blocks_core as core;
pub use term_blocks_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
