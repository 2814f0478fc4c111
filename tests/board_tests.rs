//! Board tests - grid access, derivation and row sweeping

use term_blocks::core::{check_collision, derive_board, Board, Tetromino};
use term_blocks::types::{Cell, CellState, PieceKind, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);

    for y in 0..BOARD_ROWS as i32 {
        for x in 0..BOARD_COLS as i32 {
            assert!(board.is_open(x, y), "Cell ({}, {}) should be open", x, y);
            assert_eq!(board.get(x, y), Some(Cell::EMPTY));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(6, 4);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 6), None);
    assert!(board.is_out_of_bounds(4, 5));
    assert!(!board.is_out_of_bounds(3, 5));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(6, 4);
    assert!(!board.set(-1, 0, Cell::merged(PieceKind::T)));
    assert!(!board.set(0, 6, Cell::merged(PieceKind::T)));
    assert_eq!(board.merged_count(), 0);
}

#[test]
fn test_transient_cells_stay_open() {
    let mut board = Board::default();
    board.set(2, 3, Cell::transient(PieceKind::S));
    board.set(3, 3, Cell::merged(PieceKind::S));

    assert!(board.is_open(2, 3));
    assert!(!board.is_open(3, 3));
}

#[test]
#[should_panic(expected = "board dimensions must be positive")]
fn test_board_rejects_zero_rows() {
    let _ = Board::new(0, 10);
}

#[test]
fn test_derive_board_replaces_transient_layer() {
    let mut locked = Board::default();
    locked.set(0, 19, Cell::merged(PieceKind::J));

    let first = derive_board(&locked, &Tetromino::new(PieceKind::O).at(2, 2));
    let second = derive_board(&first, &Tetromino::new(PieceKind::O).at(6, 8));

    // Old footprint gone, new one present, locked cell untouched.
    assert_eq!(second.get(2, 2), Some(Cell::EMPTY));
    assert_eq!(second.get(6, 8), Some(Cell::transient(PieceKind::O)));
    assert_eq!(second.get(7, 9), Some(Cell::transient(PieceKind::O)));
    assert_eq!(second.get(0, 19), Some(Cell::merged(PieceKind::J)));
    assert_eq!(second.cells().iter().filter(|c| !c.is_empty()).count(), 5);

    // Input board is not modified.
    assert_eq!(locked.get(6, 8), Some(Cell::EMPTY));
}

#[test]
fn test_derive_board_with_collided_piece_merges() {
    let board = Board::default();
    let mut piece = Tetromino::new(PieceKind::T).at(3, 17);
    piece.collided = true;

    let next = derive_board(&board, &piece);
    assert_eq!(next.merged_count(), 4);
    assert!(next
        .cells()
        .iter()
        .filter(|c| !c.is_empty())
        .all(|c| c.state() == CellState::Merged));
}

#[test]
fn test_derive_board_with_no_piece_keeps_locked_layer() {
    let mut board = Board::default();
    board.set(4, 4, Cell::transient(PieceKind::Z));
    board.set(5, 5, Cell::merged(PieceKind::Z));

    let next = derive_board(&board, &Tetromino::none());
    assert_eq!(next.get(4, 4), Some(Cell::EMPTY));
    assert_eq!(next.get(5, 5), Some(Cell::merged(PieceKind::Z)));
}

#[test]
fn test_sweep_single_row() {
    let mut board = Board::default();
    for x in 0..10 {
        board.set(x, 19, Cell::merged(PieceKind::I));
    }
    board.set(3, 18, Cell::merged(PieceKind::T));

    assert_eq!(board.sweep_full_rows(), 1);
    assert_eq!(board.get(3, 19), Some(Cell::merged(PieceKind::T)));
    assert_eq!(board.merged_count(), 1);
    assert!(board.row(0).iter().all(|c| *c == Cell::EMPTY));
}

#[test]
fn test_sweep_non_adjacent_rows_preserves_order() {
    let mut board = Board::default();
    for x in 0..10 {
        board.set(x, 19, Cell::merged(PieceKind::I));
        board.set(x, 17, Cell::merged(PieceKind::I));
    }
    board.set(0, 18, Cell::merged(PieceKind::L));
    board.set(0, 16, Cell::merged(PieceKind::O));

    assert_eq!(board.sweep_full_rows(), 2);
    assert_eq!(board.get(0, 19), Some(Cell::merged(PieceKind::L)));
    assert_eq!(board.get(0, 18), Some(Cell::merged(PieceKind::O)));
    assert_eq!(board.merged_count(), 2);
}

#[test]
fn test_sweep_ignores_rows_with_transient_cells() {
    let mut board = Board::default();
    for x in 0..9 {
        board.set(x, 19, Cell::merged(PieceKind::I));
    }
    board.set(9, 19, Cell::transient(PieceKind::I));

    assert!(!board.is_row_complete(19));
    assert_eq!(board.sweep_full_rows(), 0);
}

#[test]
fn test_collision_walls_floor_and_locked() {
    let mut board = Board::default();
    let o = Tetromino::new(PieceKind::O).at(0, 18);

    assert!(check_collision(&o, &board, -1, 0));
    assert!(check_collision(&o, &board, 0, 1));
    assert!(!check_collision(&o, &board, 1, 0));

    board.set(2, 19, Cell::merged(PieceKind::L));
    assert!(check_collision(&o, &board, 1, 0));

    // The piece's own transient footprint never blocks it.
    let stamped = derive_board(&board, &o);
    assert!(!check_collision(&o, &stamped, 0, 0));
}

#[test]
fn test_collision_above_top_is_out_of_bounds() {
    let board = Board::default();
    let o = Tetromino::new(PieceKind::O).at(4, 0);
    assert!(check_collision(&o, &board, 0, -1));
}
