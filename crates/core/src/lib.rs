//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and session state. It has no dependency
//! on terminals or I/O, so it can be driven by the terminal runner, by tests,
//! or by any other control loop.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetromino shapes as square matrices, uniform random choice
//! - [`board`]: rows x cols grid of cells with transient/locked state, row sweeping
//! - [`collision`]: bounds and locked-cell checks for the active piece
//! - [`rotation`]: transpose/reverse rotation with horizontal nudging
//! - [`spawner`]: seeded or entropy-based piece spawning at the top of the board
//! - [`gravity`]: armed/disarmed timer that turns frame time into descent events
//! - [`game_state`]: the session state machine (start, commands, lock, sweep, game over)
//! - [`snapshot`]: read-only view for renderers
//! - [`config`]: board size, spawn column, gravity interval, seed
//!
//! # Game Rules
//!
//! - Pieces spawn at (5, 0) and fall one row per gravity interval (1000ms).
//! - A piece that cannot descend locks; every complete row is removed and
//!   scores one point.
//! - A piece that cannot descend while still in row 0, or a spawn into locked
//!   cells, ends the game.
//!
//! # Example
//!
//! ```
//! use term_blocks_core::GameSession;
//! use term_blocks_types::GameAction;
//!
//! let mut game = GameSession::seeded(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::SoftDrop);
//!
//! // One second of frames lets gravity pull the piece down once more.
//! game.tick(1000);
//!
//! assert!(game.is_running());
//! assert_eq!(game.active().y, 2);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod gravity;
pub mod pieces;
pub mod rotation;
pub mod snapshot;
pub mod spawner;

pub use term_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{derive_board, Board};
pub use collision::check_collision;
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIDE};
pub use game_state::{GameSession, Tetromino};
pub use gravity::GravityTimer;
pub use pieces::{get_shape, random_piece_kind, Shape};
pub use rotation::{rotate_shape, try_rotate};
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
