//! Expectimax search
//!
//! Layers alternate between the searching side and its opponent. The
//! searcher's own layers pick the best child for that side; the opponent's
//! layers are treated as chance layers and back up the arithmetic mean of
//! their children instead of an adversarial extreme.

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
        side,
        side,
        false,
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
    mover: Side,
    searcher: Side,
    expecting: bool,
    weights: &EvalWeights,
    cancel: &CancelToken,
    stats: &mut SearchStats,
) -> crate::Result<NodeId> {
    if cancel.is_cancelled() {
        return Err(crate::Error::SearchCancelled);
    }

    let path = tree.node(id).actions.clone();
    let position = materialize(base, &path, stats);
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

    let mut results = Vec::with_capacity(children.len());
    for child in children {
        let deep = descend(
            base,
            tree,
            child,
            depth + 1,
            max_depth,
            mover.opponent(),
            searcher,
            !expecting,
            weights,
            cancel,
            stats,
        )?;
        results.push(deep);
    }

    if expecting {
        let total: f64 = results.iter().map(|&deep| tree.value(deep)).sum();
        tree.set_value(id, total / results.len() as f64);
        return Ok(id);
    }

    let maximizing = searcher.is_maximizing();
    let mut best = results[0];
    let mut value = tree.value(best);
    for &deep in &results[1..] {
        let candidate = tree.value(deep);
        let improves = if maximizing {
            candidate > value
        } else {
            candidate < value
        };
        if improves {
            best = deep;
            value = candidate;
        }
    }
    tree.set_value(id, value);
    Ok(best)
}
