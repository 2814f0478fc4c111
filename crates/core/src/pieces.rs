//! Pieces module - tetromino catalog and shape matrices
//!
//! Each kind has one canonical square matrix. Rotated states are produced on
//! demand by [`crate::rotation::rotate_shape`]; there are no rotation tables.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::PieceKind;

/// Largest shape side (the I piece).
pub const MAX_SHAPE_SIDE: usize = 4;

/// Offset of a single mino relative to the shape's top-left corner
pub type MinoOffset = (i32, i32);

/// Square matrix of cell markers, `side` x `side`.
///
/// Entries outside the `side` x `side` window are always `None`, so two shapes
/// compare equal exactly when their visible matrices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    side: u8,
    cells: [[Option<PieceKind>; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// The 1x1 all-empty shape carried by the "no piece" sentinel.
    pub const fn empty() -> Self {
        Self {
            side: 1,
            cells: [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
        }
    }

    /// Build a shape from a row-major matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, not square, or wider than [`MAX_SHAPE_SIDE`].
    pub fn from_rows(rows: &[&[Option<PieceKind>]]) -> Self {
        let side = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIDE).contains(&side),
            "shape side must be 1..={}, got {}",
            MAX_SHAPE_SIDE,
            side
        );
        let mut cells = [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), side, "shape row {} is not square", y);
            cells[y][..side].copy_from_slice(row);
        }
        Self {
            side: side as u8,
            cells,
        }
    }

    /// Side length of the square matrix (its width and height).
    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// Marker at (x, y), `None` for empty or outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Option<PieceKind> {
        if x >= self.side() || y >= self.side() {
            return None;
        }
        self.cells[y][x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, marker: Option<PieceKind>) {
        self.cells[y][x] = marker;
    }

    /// Occupied cells as (x, y, kind), row by row.
    pub fn minos(&self) -> ArrayVec<(i32, i32, PieceKind), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }> {
        let mut out = ArrayVec::new();
        for y in 0..self.side() {
            for x in 0..self.side() {
                if let Some(kind) = self.cells[y][x] {
                    out.push((x as i32, y as i32, kind));
                }
            }
        }
        out
    }

    /// Occupied offsets, for callers that do not care about the marker.
    pub fn offsets(&self) -> ArrayVec<MinoOffset, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }> {
        self.minos().into_iter().map(|(x, y, _)| (x, y)).collect()
    }

    /// Kind of the first occupied cell, `None` for the empty shape.
    pub fn kind(&self) -> Option<PieceKind> {
        self.minos().first().map(|&(_, _, kind)| kind)
    }

    pub fn is_empty(&self) -> bool {
        self.minos().is_empty()
    }
}

/// Canonical (spawn) shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    let k = Some(kind);
    let e = None;
    match kind {
        PieceKind::I => Shape::from_rows(&[
            &[e, k, e, e],
            &[e, k, e, e],
            &[e, k, e, e],
            &[e, k, e, e],
        ]),
        PieceKind::J => Shape::from_rows(&[&[e, k, e], &[e, k, e], &[k, k, e]]),
        PieceKind::L => Shape::from_rows(&[&[e, k, e], &[e, k, e], &[e, k, k]]),
        PieceKind::O => Shape::from_rows(&[&[k, k], &[k, k]]),
        PieceKind::S => Shape::from_rows(&[&[e, k, k], &[k, k, e], &[e, e, e]]),
        PieceKind::T => Shape::from_rows(&[&[e, e, e], &[k, k, k], &[e, k, e]]),
        PieceKind::Z => Shape::from_rows(&[&[k, k, e], &[e, k, k], &[e, e, e]]),
    }
}

/// Uniform choice over the seven kinds. Back-to-back repeats are possible.
pub fn random_piece_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}
