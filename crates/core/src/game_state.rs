//! Game state module - the session state machine
//!
//! Ties together the board, the active piece, the spawner and the gravity
//! timer. Every command and every gravity tick runs to completion before the
//! next one; after each change to the active piece the board is re-derived from
//! its locked layer, and a landed piece is locked, rows are swept and the next
//! piece is spawned.
//!
//! Phases: `Idle` (before the first start) → `Running` → `Over`. `Start`
//! restarts from any phase; every other command is ignored unless running.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::{derive_board, Board};
use crate::collision::check_collision;
use crate::config::{ConfigError, GameConfig};
use crate::gravity::GravityTimer;
use crate::pieces::{get_shape, Shape, MAX_SHAPE_SIDE};
use crate::rotation::try_rotate;
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    /// Column of the shape's top-left corner
    pub x: i32,
    /// Row of the shape's top-left corner
    pub y: i32,
    pub shape: Shape,
    /// Landed this update; lock on the next board derivation.
    pub collided: bool,
}

impl Tetromino {
    /// Create a new tetromino at the default spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            shape: get_shape(kind),
            collided: false,
        }
    }

    /// Sentinel for "no active piece": a 1x1 empty shape at the origin.
    pub const fn none() -> Self {
        Self {
            x: 0,
            y: 0,
            shape: Shape::empty(),
            collided: false,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.shape.kind()
    }

    pub fn is_none(&self) -> bool {
        self.shape.is_empty()
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> ArrayVec<(i32, i32), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }> {
        self.shape
            .offsets()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

impl Default for Tetromino {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    active: Tetromino,
    spawner: Spawner,
    gravity: GravityTimer,
    score: u32,
    phase: GamePhase,
    /// Rows removed by the most recent lock.
    last_cleared: usize,
}

impl GameSession {
    /// Create an idle session after validating `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Idle session on the default board with a fixed piece sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::build(GameConfig::seeded(seed))
    }

    fn build(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            active: Tetromino::none(),
            spawner: Spawner::new(config.seed, config.spawn_x),
            gravity: GravityTimer::new(),
            score: 0,
            phase: GamePhase::Idle,
            last_cleared: 0,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Raw board access for scripted setups (tests, replays).
    ///
    /// The next command re-derives the transient layer, so only `Merged`
    /// cells written here persist.
    #[cfg(any(test, feature = "test-support"))]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn last_cleared(&self) -> usize {
        self.last_cleared
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.score = self.score;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start (or restart) the game: fresh board, zero score, first piece,
    /// gravity re-armed.
    pub fn start(&mut self) {
        self.gravity.disarm();
        self.board = Board::new(self.config.rows, self.config.cols);
        self.score = 0;
        self.last_cleared = 0;
        self.phase = GamePhase::Running;
        self.gravity.arm(self.config.gravity_interval_ms);

        let piece = self.spawner.spawn(self.config.cols);
        info!(
            rows = self.config.rows,
            cols = self.config.cols,
            kind = ?piece.kind(),
            "game started"
        );
        self.install(piece);
    }

    /// Replace the active piece, for scripted setups (tests, replays).
    ///
    /// Rejected (returns false) unless running and `piece` fits where it is.
    /// A piece with `collided` set locks immediately.
    #[cfg(any(test, feature = "test-support"))]
    pub fn place_active(&mut self, piece: Tetromino) -> bool {
        if !self.is_running() || check_collision(&piece, &self.board, 0, 0) {
            return false;
        }
        self.active = piece;
        self.rederive();
        true
    }

    /// Apply a game action. Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start();
                true
            }
            _ if !self.is_running() => false,
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop | GameAction::GravityTick => self.drop(),
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
        }
    }

    /// Advance the gravity timer by `elapsed_ms`, posting a `GravityTick` for
    /// every completed interval.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        let fires = self.gravity.advance(elapsed_ms);
        let mut changed = false;
        for _ in 0..fires {
            if !self.is_running() {
                break;
            }
            changed |= self.apply_action(GameAction::GravityTick);
        }
        changed
    }

    /// Shift the active piece one column if nothing is in the way.
    pub(crate) fn try_move(&mut self, dir: i32) -> bool {
        if check_collision(&self.active, &self.board, dir, 0) {
            return false;
        }
        self.active.x += dir;
        self.active.collided = false;
        self.rederive();
        true
    }

    /// One row down, or land the piece.
    ///
    /// A piece that cannot descend while still in row 0 ends the game.
    pub(crate) fn drop(&mut self) -> bool {
        if !check_collision(&self.active, &self.board, 0, 1) {
            self.active.y += 1;
            self.active.collided = false;
            self.rederive();
            return true;
        }

        if self.active.y < 1 {
            self.end_game();
            return true;
        }

        self.active.collided = true;
        self.rederive();
        true
    }

    pub(crate) fn rotate(&mut self, clockwise: bool) -> bool {
        match try_rotate(&self.active, &self.board, clockwise) {
            Some(rotated) => {
                self.active = rotated;
                self.rederive();
                true
            }
            None => false,
        }
    }

    /// Rebuild the transient layer for the active piece; lock it if it landed.
    fn rederive(&mut self) {
        self.board = derive_board(&self.board, &self.active);
        if self.active.collided {
            self.lock();
        }
    }

    /// The active piece was just stamped as merged: spawn the next one, sweep
    /// complete rows and score them.
    fn lock(&mut self) {
        let next = self.spawner.spawn(self.config.cols);
        let cleared = self.board.sweep_full_rows();
        self.last_cleared = cleared;
        self.score = self.score.saturating_add(cleared as u32);
        debug!(
            kind = ?self.active.kind(),
            x = self.active.x,
            y = self.active.y,
            cleared,
            score = self.score,
            "piece locked"
        );
        self.install(next);
    }

    /// Make `piece` the active piece, or end the game if its spawn spot is taken.
    fn install(&mut self, piece: Tetromino) {
        if check_collision(&piece, &self.board, 0, 0) {
            self.active = Tetromino::none();
            self.end_game();
            return;
        }
        self.active = piece;
        self.board = derive_board(&self.board, &self.active);
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::Over;
        self.gravity.disarm();
        info!(score = self.score, "game over");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}
