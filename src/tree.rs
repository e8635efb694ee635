//! Search tree arena
//!
//! Nodes live in a flat arena and reference each other by index, so parent
//! back-references are plain ids rather than owning links. A node carries
//! the pending action sequence from the search root to its implied board
//! state; the board itself is only materialized when a node is visited.

use serde::{Deserialize, Serialize};

use crate::types::Action;

/// Index of a node within its [`SearchTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of an explored search tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchNode {
    /// Distance from the tree root in plies
    pub depth: usize,
    /// Parent node, `None` for the root and for detached sampling nodes
    pub parent: Option<NodeId>,
    /// Owned children, in generation order
    pub children: Vec<NodeId>,
    /// Not-yet-applied actions leading from the search root to this node
    pub actions: Vec<Action>,
    /// Backed-up or static evaluation; `None` until the node is evaluated
    pub value: Option<f64>,
    /// Candidate continuations gathered at depth-extension boundaries
    /// (only populated by the deepening strategy)
    pub nominees: Vec<NodeId>,
}

/// Arena of search nodes rooted at node 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Create a tree holding only a root node with an empty action path.
    pub fn with_root() -> (Self, NodeId) {
        let root = SearchNode {
            depth: 0,
            parent: None,
            children: Vec::new(),
            actions: Vec::new(),
            value: None,
            nominees: Vec::new(),
        };
        (SearchTree { nodes: vec![root] }, NodeId(0))
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Attach a new child under `parent` carrying the extended action path.
    pub fn add_child(&mut self, parent: NodeId, actions: Vec<Action>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(SearchNode {
            depth,
            parent: Some(parent),
            children: Vec::new(),
            actions,
            value: None,
            nominees: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Create a node that belongs to the arena but hangs off no parent.
    /// The deepening strategy uses these as temporary sampling sets at its
    /// collapse boundaries.
    pub fn add_detached(&mut self, depth: usize, actions: Vec<Action>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            depth,
            parent: None,
            children: Vec::new(),
            actions,
            value: None,
            nominees: Vec::new(),
        });
        id
    }

    /// Evaluated value of a node.
    ///
    /// Backup rules only read values of nodes they have already evaluated;
    /// an unevaluated read is a logic error in the search.
    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id.0]
            .value
            .expect("node evaluated before its value is read")
    }

    pub fn set_value(&mut self, id: NodeId, value: f64) {
        self.nodes[id.0].value = Some(value);
    }

    /// All attached node ids at a given depth, in creation order.
    pub fn nodes_at_depth(&self, depth: usize) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(index, node)| {
                node.depth == depth && (node.parent.is_some() || *index == 0)
            })
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    /// Deepest ply reached anywhere in the tree.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }
}
