//! Integration tests for the game session driven through its public commands

use crossterm::event::{KeyCode, KeyEvent};
use term_blocks::core::{GameConfig, GameSession, Tetromino};
use term_blocks::input::action_for_key;
use term_blocks::types::{Cell, CellState, GameAction, GamePhase, PieceKind};

fn running(seed: u64) -> GameSession {
    let mut game = GameSession::seeded(seed);
    game.start();
    game
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameSession::seeded(12345);
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.snapshot().start_label(), "Start Game");

    game.start();
    assert!(game.is_running());
    assert!(!game.active().is_none());
    assert_eq!((game.active().x, game.active().y), (5, 0));
    assert!(game.gravity().is_armed());
}

#[test]
fn test_basic_lock_on_small_board() {
    let config = GameConfig::seeded(7).with_board(4, 4);
    let mut game = GameSession::new(config).unwrap();
    game.start();

    assert!(game.place_active(Tetromino::new(PieceKind::O).at(0, 0)));

    // Two free rows below, then the third drop lands it.
    assert!(game.apply_action(GameAction::SoftDrop));
    assert!(game.apply_action(GameAction::SoftDrop));
    assert_eq!(game.active().y, 2);
    assert!(game.apply_action(GameAction::SoftDrop));

    for (x, y) in [(0, 2), (1, 2), (0, 3), (1, 3)] {
        assert_eq!(game.board().get(x, y), Some(Cell::merged(PieceKind::O)));
    }
    assert_eq!(game.board().merged_count(), 4);
    assert_eq!(game.score(), 0);

    // The next piece spawns in row 0, pulled left to fit a 4-wide board,
    // unless its spawn spot overlaps the locked O.
    if game.is_running() {
        let active = game.active();
        let side = active.shape.side() as i32;
        assert_eq!(active.y, 0);
        assert_eq!(active.x, (4 - side).min(5));
    } else {
        assert!(game.is_over());
        assert!(game.active().is_none());
    }
}

#[test]
fn test_line_clear_scores_and_shifts() {
    let mut game = running(42);
    let rows = game.board().rows() as i32;
    let cols = game.board().cols() as i32;

    // Bottom row full except column 0.
    for x in 1..cols {
        game.board_mut().set(x, rows - 1, Cell::merged(PieceKind::Z));
    }
    // Vertical I filling column 0, rows rows-4..rows-1.
    assert!(game.place_active(Tetromino::new(PieceKind::I).at(-1, rows - 4)));
    assert!(game.apply_action(GameAction::SoftDrop));

    assert_eq!(game.score(), 1);
    assert_eq!(game.last_cleared(), 1);

    // The three I cells above the cleared row moved down one row.
    for y in rows - 3..rows {
        assert_eq!(game.board().get(0, y), Some(Cell::merged(PieceKind::I)));
    }
    for x in 1..cols {
        assert!(!game.board().get(x, rows - 1).unwrap().is_merged());
    }
    assert_eq!(game.board().merged_count(), 3);
    assert!(game.is_running());
}

#[test]
fn test_multiple_rows_clear_in_one_lock() {
    let mut game = running(5);
    let rows = game.board().rows() as i32;
    let cols = game.board().cols() as i32;

    for y in rows - 4..rows {
        for x in 1..cols {
            game.board_mut().set(x, y, Cell::merged(PieceKind::L));
        }
    }
    assert!(game.place_active(Tetromino::new(PieceKind::I).at(-1, rows - 4)));
    assert!(game.apply_action(GameAction::SoftDrop));

    assert_eq!(game.score(), 4);
    assert_eq!(game.board().merged_count(), 0);
}

#[test]
fn test_move_blocked_at_wall() {
    let mut game = running(3);
    assert!(game.place_active(Tetromino::new(PieceKind::O).at(0, 5)));

    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!((game.active().x, game.active().y), (0, 5));

    assert!(game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().x, 1);
}

#[test]
fn test_move_blocked_by_locked_cell() {
    let mut game = running(3);
    game.board_mut().set(4, 6, Cell::merged(PieceKind::T));
    assert!(game.place_active(Tetromino::new(PieceKind::O).at(2, 5)));

    assert!(!game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().x, 2);
}

#[test]
fn test_rotation_nudges_off_right_wall() {
    let mut game = running(9);
    // Vertical I in the last-but-one column; horizontal would reach column 10.
    assert!(game.place_active(Tetromino::new(PieceKind::I).at(7, 5)));

    assert!(game.apply_action(GameAction::RotateCw));
    assert_eq!(game.active().x, 6);
    for x in 6..10 {
        assert_eq!(
            game.board().get(x, 6),
            Some(Cell::transient(PieceKind::I))
        );
    }
}

#[test]
fn test_rotation_reverts_when_no_offset_fits() {
    let mut game = running(9);
    assert!(game.place_active(Tetromino::new(PieceKind::I).at(8, 5)));
    let before = *game.active();
    let board_before = game.board().clone();

    assert!(!game.apply_action(GameAction::RotateCw));
    assert_eq!(game.active(), &before);
    assert_eq!(game.board(), &board_before);
}

#[test]
fn test_stacking_in_place_ends_game() {
    let mut game = running(2024);

    let mut steps = 0;
    while game.is_running() {
        game.apply_action(GameAction::SoftDrop);
        steps += 1;
        assert!(steps < 2000, "game never ended");
    }

    assert!(game.is_over());
    assert!(!game.gravity().is_armed());
    // Column 0 was never filled, so no row could clear.
    assert_eq!(game.score(), 0);

    // The board stops changing once the game is over.
    let frozen = game.board().clone();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::GravityTick,
    ] {
        assert!(!game.apply_action(action));
    }
    assert!(!game.tick(60_000));
    assert_eq!(game.board(), &frozen);
    assert_eq!(game.snapshot().start_label(), "Restart Game");
}

#[test]
fn test_restart_after_game_over() {
    let mut game = running(2024);
    while game.is_running() {
        game.apply_action(GameAction::SoftDrop);
    }
    assert!(game.is_over());

    assert!(game.apply_action(GameAction::Start));
    assert!(game.is_running());
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().merged_count(), 0);
    assert_eq!(
        game.board()
            .cells()
            .iter()
            .filter(|c| !c.is_empty())
            .count(),
        4
    );
    assert!(game
        .board()
        .cells()
        .iter()
        .all(|c| c.state() == CellState::Clear));
}

#[test]
fn test_gravity_drives_piece_to_lock() {
    let mut game = running(77);

    // One interval per row; twenty seconds is enough for any piece to land.
    for _ in 0..20 {
        game.tick(1000);
    }
    assert!(game.board().merged_count() >= 4);
}

#[test]
fn test_keys_drive_session() {
    let mut game = GameSession::seeded(12345);

    let enter = action_for_key(KeyEvent::from(KeyCode::Enter)).unwrap();
    assert_eq!(enter, GameAction::Start);
    game.apply_action(enter);
    assert!(game.is_running());

    let left = action_for_key(KeyEvent::from(KeyCode::Left)).unwrap();
    let x = game.active().x;
    assert!(game.apply_action(left));
    assert_eq!(game.active().x, x - 1);

    let down = action_for_key(KeyEvent::from(KeyCode::Down)).unwrap();
    assert!(game.apply_action(down));
    assert_eq!(game.active().y, 1);
}
