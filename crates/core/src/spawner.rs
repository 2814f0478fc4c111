//! Spawner - uniform random piece generation
//!
//! Each draw is an independent uniform choice over the seven kinds (no bag).
//! A seed gives a reproducible sequence for tests and replays; without one the
//! generator is seeded from OS entropy.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::Tetromino;
use crate::pieces::{get_shape, random_piece_kind};
use crate::types::{PieceKind, SPAWN_Y};

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
    spawn_x: i32,
}

impl Spawner {
    pub fn new(seed: Option<u64>, spawn_x: i32) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, spawn_x }
    }

    /// Draw the next kind.
    pub fn next_kind(&mut self) -> PieceKind {
        random_piece_kind(&mut self.rng)
    }

    /// Draw a kind and place it at the top of a board `cols` wide.
    pub fn spawn(&mut self, cols: usize) -> Tetromino {
        let kind = self.next_kind();
        spawn_piece(kind, self.spawn_x, cols)
    }
}

/// Fresh piece of `kind` at row 0.
///
/// The column is `spawn_x` pulled left just enough for the shape's box to fit
/// `cols` (never below 0). On a 10-wide board with `spawn_x = 5` every shape
/// already fits, so the position stays (5, 0).
pub fn spawn_piece(kind: PieceKind, spawn_x: i32, cols: usize) -> Tetromino {
    let shape = get_shape(kind);
    let max_x = (cols as i32 - shape.side() as i32).max(0);
    Tetromino {
        x: spawn_x.clamp(0, max_x),
        y: SPAWN_Y,
        shape,
        collided: false,
    }
}
