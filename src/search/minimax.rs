//! Plain fixed-depth, full-width minimax
//!
//! The tree is built breadth-first one ply layer at a time, alternating the
//! side to move per layer; a recursive backup then evaluates leaves and
//! propagates the min/max child value upward. The returned node is the deep
//! node of the chosen line, whose first pending action is the move to play.

use crate::board::Board;
use crate::config::SearchConfig;
use crate::eval::EvalWeights;
use crate::search::{CancelToken, SearchStats, evaluate_leaf, materialize};
use crate::tree::{NodeId, SearchTree};
use crate::types::Side;

pub(crate) fn search(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    cancel: &CancelToken,
    stats: &mut SearchStats,
) -> crate::Result<(SearchTree, NodeId)> {
    let (mut tree, root) = SearchTree::with_root();

    let mut mover = side;
    for depth in 0..config.depth {
        if cancel.is_cancelled() {
            return Err(crate::Error::SearchCancelled);
        }

        let layer = tree.nodes_at_depth(depth);
        let mut expanded = false;
        for id in layer {
            let path = tree.node(id).actions.clone();
            let position = materialize(board, &path, stats);
            for action in position.actions_for(mover) {
                let mut extended = path.clone();
                extended.push(action);
                tree.add_child(id, extended);
                stats.nodes_created += 1;
                expanded = true;
            }
        }
        if !expanded {
            break;
        }
        mover = mover.opponent();
    }

    let chosen = backup(board, &mut tree, root, side.is_maximizing(), &config.weights, stats);
    Ok((tree, chosen))
}

/// Recursive backup: leaves take the static evaluation, internal nodes take
/// the max (min) child value on the maximizer's (minimizer's) ply, and the
/// chosen deep node propagates to the root.
fn backup(
    base: &Board,
    tree: &mut SearchTree,
    id: NodeId,
    maximizing: bool,
    weights: &EvalWeights,
    stats: &mut SearchStats,
) -> NodeId {
    if tree.node(id).children.is_empty() {
        let path = tree.node(id).actions.clone();
        let position = materialize(base, &path, stats);
        evaluate_leaf(tree, id, &position, weights, stats);
        return id;
    }

    let children = tree.node(id).children.clone();
    let mut best: Option<NodeId> = None;
    for child in children {
        let deep = backup(base, tree, child, !maximizing, weights, stats);
        let value = tree.value(deep);
        let better = match best {
            None => true,
            Some(current) => {
                if maximizing {
                    value > tree.value(current)
                } else {
                    value < tree.value(current)
                }
            }
        };
        if better {
            best = Some(deep);
        }
    }

    let best = best.expect("non-leaf node backs up at least one child");
    tree.set_value(id, tree.value(best));
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    fn config(depth: usize) -> SearchConfig {
        SearchConfig::new(crate::config::Strategy::Minimax).with_depth(depth)
    }

    #[test]
    fn depth_one_fox_picks_the_best_immediate_evaluation() {
        let board = Board::new();
        let cfg = config(1);
        let (tree, chosen) =
            search(&board, Side::Fox, &cfg, &CancelToken::new(), &mut SearchStats::default())
                .unwrap();

        let best_by_hand = board
            .fox_actions()
            .into_iter()
            .map(|action| {
                let mut next = board.clone();
                next.apply(action);
                evaluate(&next, &cfg.weights)
            })
            .max()
            .unwrap();
        assert_eq!(tree.value(tree.root()), f64::from(best_by_hand));
        assert_eq!(tree.node(chosen).actions.len(), 1);
    }

    #[test]
    fn depth_one_sheep_pick_the_worst_immediate_evaluation_for_the_fox() {
        let board = Board::new();
        let cfg = config(1);
        let (tree, _) =
            search(&board, Side::Sheep, &cfg, &CancelToken::new(), &mut SearchStats::default())
                .unwrap();

        let worst_by_hand = board
            .sheep_actions()
            .into_iter()
            .map(|action| {
                let mut next = board.clone();
                next.apply(action);
                evaluate(&next, &cfg.weights)
            })
            .min()
            .unwrap();
        assert_eq!(tree.value(tree.root()), f64::from(worst_by_hand));
    }

    #[test]
    fn layers_alternate_sides() {
        let board = Board::new();
        let cfg = config(2);
        let (tree, _) =
            search(&board, Side::Fox, &cfg, &CancelToken::new(), &mut SearchStats::default())
                .unwrap();

        // Ply 1 holds fox actions, ply 2 sheep actions.
        for id in tree.nodes_at_depth(1) {
            let action = tree.node(id).actions[0];
            assert_eq!(action.from, board.fox());
        }
        for id in tree.nodes_at_depth(2) {
            let action = tree.node(id).actions[1];
            assert_ne!(action.from, board.fox());
        }
    }

    #[test]
    fn cancelled_token_aborts_before_expansion() {
        let board = Board::new();
        let token = CancelToken::new();
        token.cancel();
        let result = search(
            &board,
            Side::Fox,
            &config(3),
            &token,
            &mut SearchStats::default(),
        );
        assert!(matches!(result, Err(crate::Error::SearchCancelled)));
    }
}
