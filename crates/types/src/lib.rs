//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input mapper, and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn position**: (5, 0), top-left of the piece's bounding box
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Control loop frame interval (~60 FPS) |
//! | `GRAVITY_INTERVAL_MS` | 1000 | Time between automatic one-row descents |
//!
//! # Examples
//!
//! ```
//! use term_blocks_types::{Cell, CellState, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::T.color().as_tuple(), (132, 61, 198));
//!
//! let cell = Cell::EMPTY;
//! assert!(cell.is_empty());
//! assert_eq!(cell.state(), CellState::Clear);
//!
//! let locked = Cell::merged(PieceKind::T);
//! assert_eq!(locked.occupant(), Some(PieceKind::T));
//! assert!(locked.is_merged());
//!
//! assert_eq!((BOARD_ROWS, BOARD_COLS), (20, 10));
//! ```

/// Default board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Default board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Column where new pieces spawn (left edge of the bounding box)
pub const SPAWN_X: i32 = 5;

/// Row where new pieces spawn (top edge of the bounding box)
pub const SPAWN_Y: i32 = 0;

/// Control loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: one automatic descent per second
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Fill used for cells without an occupant.
pub const EMPTY_COLOR: Rgb = Rgb::new(0, 0, 0);

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Display color for cells occupied by this kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 227, 230),
            PieceKind::J => Rgb::new(36, 95, 223),
            PieceKind::L => Rgb::new(223, 173, 36),
            PieceKind::O => Rgb::new(223, 217, 36),
            PieceKind::S => Rgb::new(48, 211, 56),
            PieceKind::T => Rgb::new(132, 61, 198),
            PieceKind::Z => Rgb::new(227, 78, 78),
        }
    }
}

/// Lock state of a board cell.
///
/// - **Clear**: empty, or drawn by the falling piece (rebuilt every update)
/// - **Merged**: permanently locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Clear,
    Merged,
}

/// A cell on the game board
///
/// Invariant: a `Merged` cell always has an occupant. Cells are only built
/// through `EMPTY`, `transient` and `merged`, so no other combination exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    occupant: Option<PieceKind>,
    state: CellState,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        occupant: None,
        state: CellState::Clear,
    };

    pub const fn transient(kind: PieceKind) -> Self {
        Self {
            occupant: Some(kind),
            state: CellState::Clear,
        }
    }

    pub const fn merged(kind: PieceKind) -> Self {
        Self {
            occupant: Some(kind),
            state: CellState::Merged,
        }
    }

    pub fn occupant(&self) -> Option<PieceKind> {
        self.occupant
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn is_merged(&self) -> bool {
        self.state == CellState::Merged
    }

    /// Render color: the occupant's color, or the neutral fill.
    pub fn color(&self) -> Rgb {
        self.occupant.map_or(EMPTY_COLOR, |kind| kind.color())
    }
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Before the first start
    #[default]
    Idle,
    Running,
    Over,
}

/// Logical commands accepted by the game session
///
/// Player input and the gravity timer both feed the session through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, or land it
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Automatic descent posted by the gravity timer
    GravityTick,
    /// Start a new game (also restarts a running or finished one)
    Start,
}
