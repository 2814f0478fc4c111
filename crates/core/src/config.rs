//! Game configuration.
//!
//! Values come from defaults or environment variables:
//!
//! - `TETRIS_ROWS`: board height (default: 20)
//! - `TETRIS_COLS`: board width (default: 10)
//! - `TETRIS_SPAWN_X`: spawn column (default: 5)
//! - `TETRIS_GRAVITY_MS`: gravity interval in milliseconds (default: 1000)
//! - `TETRIS_SEED`: piece sequence seed (default: OS entropy)

use thiserror::Error;

use crate::pieces::MAX_SHAPE_SIDE;
use crate::types::{BOARD_COLS, BOARD_ROWS, GRAVITY_INTERVAL_MS, SPAWN_X};

/// Largest accepted row or column count. Keeps a bordered, double-width
/// board within terminal (u16) coordinates.
pub const MAX_BOARD_SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },
    #[error("board {rows}x{cols} cannot hold a {side}x{side} piece")]
    BoardTooSmall { rows: usize, cols: usize, side: usize },
    #[error("board {rows}x{cols} exceeds the {max}x{max} limit")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
    #[error("gravity interval must be positive")]
    ZeroGravityInterval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub spawn_x: i32,
    pub gravity_interval_ms: u32,
    /// `None` seeds the spawner from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            spawn_x: SPAWN_X,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn from_env() -> Self {
        use std::env;

        fn parse<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            rows: parse("TETRIS_ROWS").unwrap_or(defaults.rows),
            cols: parse("TETRIS_COLS").unwrap_or(defaults.cols),
            spawn_x: parse("TETRIS_SPAWN_X").unwrap_or(defaults.spawn_x),
            gravity_interval_ms: parse("TETRIS_GRAVITY_MS").unwrap_or(defaults.gravity_interval_ms),
            seed: parse("TETRIS_SEED"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows < MAX_SHAPE_SIDE || self.cols < MAX_SHAPE_SIDE {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
                side: MAX_SHAPE_SIDE,
            });
        }
        if self.rows > MAX_BOARD_SIDE || self.cols > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_BOARD_SIDE,
            });
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        Ok(())
    }
}
