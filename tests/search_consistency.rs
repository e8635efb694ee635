//! Cross-strategy consistency: alpha-beta pruning must not change the
//! minimax value, and every strategy must agree at a one-ply horizon.

mod common;

use foxsheep::{
    Board, CancelToken, EvalWeights, SearchConfig, Side, Strategy, evaluate, search,
};

fn run(board: &Board, side: Side, strategy: Strategy, depth: usize) -> search::SearchOutcome {
    let config = SearchConfig::new(strategy).with_depth(depth);
    search::run(board, side, &config, &CancelToken::new()).expect("search")
}

fn best_static_value(board: &Board, side: Side) -> f64 {
    let weights = EvalWeights::default();
    let values = board.actions_for(side).into_iter().map(|action| {
        let mut next = board.clone();
        next.apply(action);
        f64::from(evaluate(&next, &weights))
    });
    if side.is_maximizing() {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

#[test]
fn alpha_beta_matches_minimax_at_every_depth() {
    for board in [Board::new(), common::midgame_board()] {
        for side in [Side::Fox, Side::Sheep] {
            for depth in 1..=4 {
                let full = run(&board, side, Strategy::Minimax, depth);
                let pruned = run(&board, side, Strategy::AlphaBeta, depth);
                assert_eq!(full.value, pruned.value, "{side} at depth {depth}");
            }
        }
    }
}

#[test]
fn all_strategies_agree_at_depth_one() {
    let board = common::midgame_board();
    for side in [Side::Fox, Side::Sheep] {
        let expected = best_static_value(&board, side);
        for strategy in [
            Strategy::Minimax,
            Strategy::AlphaBeta,
            Strategy::Expectimax,
        ] {
            let outcome = run(&board, side, strategy, 1);
            assert_eq!(outcome.value, expected, "{strategy} for {side}");
        }
    }
}

#[test]
fn proposed_moves_are_always_legal() {
    let board = common::midgame_board();
    for side in [Side::Fox, Side::Sheep] {
        for strategy in [
            Strategy::Minimax,
            Strategy::AlphaBeta,
            Strategy::Expectimax,
            Strategy::Deepimax,
        ] {
            let outcome = run(&board, side, strategy, 2);
            let action = outcome.best_action.expect("legal move available");
            assert!(
                board.actions_for(side).contains(&action),
                "{strategy} proposed {action} for {side}"
            );
        }
    }
}

#[test]
fn principal_line_starts_with_the_best_action() {
    let outcome = run(&Board::new(), Side::Fox, Strategy::AlphaBeta, 3);
    assert_eq!(outcome.principal.first().copied(), outcome.best_action);
    assert!(outcome.principal.len() <= 3);
}

#[test]
fn deeper_search_does_more_work() {
    let board = Board::new();
    let shallow = run(&board, Side::Fox, Strategy::Minimax, 1);
    let deep = run(&board, Side::Fox, Strategy::Minimax, 3);
    assert!(deep.stats.evaluations > shallow.stats.evaluations);
    assert!(deep.stats.deepest_ply >= shallow.stats.deepest_ply);
}
