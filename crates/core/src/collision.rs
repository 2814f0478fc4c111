//! Collision detection for the active piece.

use crate::board::Board;
use crate::game_state::Tetromino;

/// Would `piece`, shifted by `(dx, dy)`, leave the board or hit a locked cell?
///
/// Empty shape entries are skipped, so the "no piece" sentinel never collides.
/// Transient (`Clear`) cells never block; only `Merged` ones do.
pub fn check_collision(piece: &Tetromino, board: &Board, dx: i32, dy: i32) -> bool {
    piece
        .shape
        .offsets()
        .iter()
        .any(|&(mx, my)| !board.is_open(piece.x + mx + dx, piece.y + my + dy))
}
