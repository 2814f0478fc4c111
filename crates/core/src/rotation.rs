//! Rotation module - matrix rotation with horizontal nudging
//!
//! Rotation is computed, not looked up: transpose the square matrix, then
//! reverse each row (clockwise) or reverse the row order (counter-clockwise).
//! When the rotated piece collides, it is nudged sideways by growing,
//! alternating offsets before the rotation is given up.

use tracing::trace;

use crate::board::Board;
use crate::collision::check_collision;
use crate::game_state::Tetromino;
use crate::pieces::Shape;

/// Rotate a shape 90° in place of its square bounding box.
pub fn rotate_shape(shape: &Shape, clockwise: bool) -> Shape {
    let n = shape.side();
    let mut out = *shape;
    for y in 0..n {
        for x in 0..n {
            // transposed[y][x] = shape[x][y]
            let marker = if clockwise {
                // then each row reversed
                shape.get(y, n - 1 - x)
            } else {
                // then the row order reversed
                shape.get(n - 1 - y, x)
            };
            out.set(x, y, marker);
        }
    }
    out
}

/// Try to rotate `piece` against `board`.
///
/// The rotated copy is tested at its current position first; while it
/// collides, x is shifted by `offset` and `offset` becomes
/// `-(offset + sign(offset))`, giving displacements +1, -1, +2, -2, ...
/// Once `|offset|` exceeds the shape's side the rotation is abandoned and
/// `None` is returned; the caller keeps the original piece untouched.
pub fn try_rotate(piece: &Tetromino, board: &Board, clockwise: bool) -> Option<Tetromino> {
    let mut rotated = Tetromino {
        shape: rotate_shape(&piece.shape, clockwise),
        ..*piece
    };
    let side = rotated.shape.side() as i32;

    let mut offset: i32 = 1;
    while check_collision(&rotated, board, 0, 0) {
        rotated.x += offset;
        offset = -(offset + offset.signum());
        if offset.abs() > side {
            trace!(x = piece.x, y = piece.y, clockwise, "rotation blocked");
            return None;
        }
    }

    Some(rotated)
}
