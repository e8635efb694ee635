//! Minimax with alpha-beta pruning
//!
//! Depth-first variant of the plain minimax with identical leaf semantics.
//! Alpha is the best score the maximizer can already guarantee, beta the
//! best the minimizer can. Pruning fails soft: a node whose running value
//! crosses the opposing bound stops expanding and backs up that value as a
//! bound, so the parent's comparison still incorporates it. A bound can
//! never beat a fully searched sibling at the root, so the chosen line is
//! always an exact one and the root value equals plain minimax.

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
    let chosen = descend(
        board,
        &mut tree,
        root,
        0,
        config.depth,
        side.is_maximizing(),
        f64::NEG_INFINITY,
        f64::INFINITY,
        &config.weights,
        cancel,
        stats,
    )?;
    Ok((tree, chosen))
}

#[allow(clippy::too_many_arguments)]
fn descend(
    base: &Board,
    tree: &mut SearchTree,
    id: NodeId,
    depth: usize,
    max_depth: usize,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    weights: &EvalWeights,
    cancel: &CancelToken,
    stats: &mut SearchStats,
) -> crate::Result<NodeId> {
    if cancel.is_cancelled() {
        return Err(crate::Error::SearchCancelled);
    }

    let path = tree.node(id).actions.clone();
    let position = materialize(base, &path, stats);
    let mover = if maximizing { Side::Fox } else { Side::Sheep };
    let available = position.actions_for(mover);

    if depth == max_depth || available.is_empty() {
        evaluate_leaf(tree, id, &position, weights, stats);
        return Ok(id);
    }

    for action in available {
        let mut extended = path.clone();
        extended.push(action);
        tree.add_child(id, extended);
        stats.nodes_created += 1;
    }
    let children = tree.node(id).children.clone();

    let mut best: Option<NodeId> = None;
    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for child in children {
        let deep = descend(
            base,
            tree,
            child,
            depth + 1,
            max_depth,
            !maximizing,
            alpha,
            beta,
            weights,
            cancel,
            stats,
        )?;
        let child_value = tree.value(deep);
        if maximizing {
            if child_value > value {
                value = child_value;
                best = Some(deep);
            }
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        } else {
            if child_value < value {
                value = child_value;
                best = Some(deep);
            }
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
    }
    tree.set_value(id, value);
    Ok(best.expect("non-leaf node backs up at least one child"))
}
