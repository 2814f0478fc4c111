use crate::types::{Cell, GamePhase};

/// Read-only view of a session for renderers.
///
/// `cells` is the derived board, so the falling piece appears as `Clear`
/// cells with an occupant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, row 0 at the top
    pub cells: Vec<Cell>,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.cells.get(y * self.cols + x).copied()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Label for the start control.
    pub fn start_label(&self) -> &'static str {
        if self.is_over() {
            "Restart Game"
        } else {
            "Start Game"
        }
    }
}
