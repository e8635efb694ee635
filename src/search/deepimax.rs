//! Deepimax search
//!
//! A narrowing search that trades full-width depth for focused re-search.
//! Every `doa` plies (depth of accuracy) a layer collapses: instead of
//! expanding further, each node at that layer is scored with the mean of
//! its children's static evaluations. The layer just above a collapse
//! gathers the collapsed nodes as nominees and bubbles them to the root,
//! which keeps the best `roa` of them (range of accuracy) and re-engages
//! the search from each nominee with a shorter horizon and shrunk
//! parameters. The recursion bottoms out when the remaining horizon is
//! used up, and the best re-engaged result becomes the root value.

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
        config.doa,
        config.roa,
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
    doa: usize,
    roa: usize,
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

    if depth == max_depth || available.is_empty() || (doa == 0 && roa == 0) {
        evaluate_leaf(tree, id, &position, weights, stats);
        return Ok(id);
    }

    // Past the leaf check doa is at least 1.
    if depth != 0 && depth % doa == 0 {
        return collapse(base, tree, id, max_depth, maximizing, available, weights, cancel, stats);
    }

    for action in &available {
        let mut extended = path.clone();
        extended.push(*action);
        tree.add_child(id, extended);
        stats.nodes_created += 1;
    }
    let children = tree.node(id).children.clone();

    let gathering = depth % doa == doa - 1;
    let mut nominees = Vec::new();
    for child in children {
        let deep = descend(
            base,
            tree,
            child,
            depth + 1,
            max_depth,
            !maximizing,
            doa,
            roa,
            weights,
            cancel,
            stats,
        )?;
        if gathering {
            nominees.push(deep);
        } else {
            nominees.extend_from_slice(&tree.node(deep).nominees);
        }
    }
    tree.node_mut(id).nominees = nominees;

    if depth != 0 {
        return Ok(id);
    }
    reengage(base, tree, id, max_depth, maximizing, doa, roa, &position, weights, cancel, stats)
}

/// Scores every child of a collapse-layer node statically and backs up
/// their mean. The sampled children stay detached so a later re-engagement
/// can expand the node afresh without duplicates.
#[allow(clippy::too_many_arguments)]
fn collapse(
    base: &Board,
    tree: &mut SearchTree,
    id: NodeId,
    max_depth: usize,
    maximizing: bool,
    available: Vec<crate::types::Action>,
    weights: &EvalWeights,
    cancel: &CancelToken,
    stats: &mut SearchStats,
) -> crate::Result<NodeId> {
    let path = tree.node(id).actions.clone();
    let child_depth = tree.node(id).depth + 1;
    let count = available.len();
    let mut total = 0.0;
    for action in available {
        let mut extended = path.clone();
        extended.push(action);
        let sampled = tree.add_detached(child_depth, extended);
        stats.nodes_created += 1;
        let deep = descend(
            base, tree, sampled, max_depth, max_depth, maximizing, 0, 0, weights, cancel, stats,
        )?;
        total += tree.value(deep);
    }
    tree.set_value(id, total / count as f64);
    Ok(id)
}

/// Root-only continuation: rank the gathered nominees, keep the best
/// `roa`, and re-search from each with a horizon shortened by `doa` and
/// both parameters shrunk by one (never below one).
#[allow(clippy::too_many_arguments)]
fn reengage(
    base: &Board,
    tree: &mut SearchTree,
    id: NodeId,
    max_depth: usize,
    maximizing: bool,
    doa: usize,
    roa: usize,
    position: &Board,
    weights: &EvalWeights,
    cancel: &CancelToken,
    stats: &mut SearchStats,
) -> crate::Result<NodeId> {
    let mut nominees = tree.node(id).nominees.clone();
    if nominees.is_empty() {
        // The horizon was too short for any collapse layer to form.
        if tree.node(id).value.is_none() {
            evaluate_leaf(tree, id, position, weights, stats);
        }
        return Ok(id);
    }

    nominees.sort_by(|&a, &b| {
        if maximizing {
            tree.value(b).total_cmp(&tree.value(a))
        } else {
            tree.value(a).total_cmp(&tree.value(b))
        }
    });

    let next_max_depth = max_depth.saturating_sub(doa);
    let next_doa = doa.saturating_sub(1).max(1);
    let next_roa = roa.saturating_sub(1).max(1);

    let mut results = Vec::new();
    for &nominee in nominees.iter().take(roa) {
        if next_max_depth == 0 {
            results.push(nominee);
        } else {
            let deep = descend(
                base,
                tree,
                nominee,
                0,
                next_max_depth,
                !maximizing,
                next_doa,
                next_roa,
                weights,
                cancel,
                stats,
            )?;
            results.push(deep);
        }
    }

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
