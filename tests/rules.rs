//! Behavioral tests for the board rules: move generation, captures, and
//! reversible actions.

mod common;

use foxsheep::{Board, Pos, Side};

#[test]
fn every_legal_action_round_trips_from_the_start() {
    let board = Board::new();
    for side in [Side::Fox, Side::Sheep] {
        for action in board.actions_for(side) {
            let mut scratch = board.clone();
            scratch.apply(action);
            scratch.undo(action);
            assert_eq!(scratch, board, "{side} action {action}");
        }
    }
}

#[test]
fn every_legal_action_round_trips_from_a_midgame_position() {
    let board = common::midgame_board();
    for side in [Side::Fox, Side::Sheep] {
        for action in board.actions_for(side) {
            let mut scratch = board.clone();
            scratch.apply(action);
            scratch.undo(action);
            assert_eq!(scratch, board, "{side} action {action}");
        }
    }
}

#[test]
fn a_capture_removes_exactly_the_jumped_sheep() {
    let board = Board::from_rows(
        "#########\n\
         ###...###\n\
         ###...###\n\
         #...FS..#\n\
         #.......#\n\
         #..S.S..#\n\
         ###...###\n\
         ###...###\n\
         #########",
    )
    .expect("valid diagram");
    let captures: Vec<_> = board
        .fox_actions()
        .into_iter()
        .filter(|a| a.is_jump())
        .collect();
    assert_eq!(captures.len(), 1);
    let capture = captures[0];
    assert_eq!(capture.to, Pos::new(3, 6));

    let mut after = board.clone();
    after.apply(capture);
    assert_eq!(after.sheep_count(), board.sheep_count() - 1);
    assert!(!after.sheep().contains(&Pos::new(3, 5)));
    assert_eq!(after.fox(), Pos::new(3, 6));

    after.undo(capture);
    assert_eq!(after, board);
}

#[test]
fn sheep_never_jump() {
    let board = common::midgame_board();
    assert!(board.sheep_actions().iter().all(|a| !a.is_jump()));
}

#[test]
fn diagonal_moves_exist_only_on_even_parity_cells() {
    let board = Board::new();
    for side in [Side::Fox, Side::Sheep] {
        for action in board.actions_for(side) {
            let straight = action.from.row == action.to.row || action.from.col == action.to.col;
            if !straight {
                assert_eq!(
                    action.from.row.abs_diff(action.from.col) % 2,
                    0,
                    "diagonal move from odd-parity cell: {action}"
                );
            }
        }
    }
}

#[test]
fn chained_plies_undo_in_reverse_order() {
    let mut board = Board::new();
    let original = board.clone();
    let mut played = Vec::new();
    let mut side = Side::Fox;
    for _ in 0..6 {
        let actions = board.actions_for(side);
        let action = actions[0];
        board.apply(action);
        played.push(action);
        side = side.opponent();
    }
    for action in played.into_iter().rev() {
        board.undo(action);
    }
    assert_eq!(board, original);
}
