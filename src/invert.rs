//! Inversion algorithms
//!
//! All strategies swap the left and right link of every node in place. No node is
//! allocated or freed; only links move. They differ in how the nodes are visited:
//!
//! - `Recursive`: pre-order DFS on the call stack, depth = tree height
//! - `Iterative`: level-order BFS with a FIFO queue, memory = tree width
//! - `Stack`: pre-order DFS with an explicit LIFO stack on the heap

use std::collections::VecDeque;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::node::Node;

/// Inversion strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Depth-first on the call stack
    Recursive,
    /// Breadth-first with a queue
    #[default]
    Iterative,
    /// Depth-first with a heap-allocated stack
    Stack,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
            Strategy::Stack => "stack",
        };
        write!(f, "{}", name)
    }
}

/// Mirror the subtree rooted at `node` using the given strategy.
pub fn invert(strategy: Strategy, node: Option<&mut Node>) -> Option<&mut Node> {
    match strategy {
        Strategy::Recursive => invert_recursive(node),
        Strategy::Iterative => invert_iterative(node),
        Strategy::Stack => invert_stack(node),
    }
}

/// Swap children at `node`, then recurse into the new left and the new right child.
///
/// Returns the node it was given. Recursion depth equals the tree height and is not
/// bounded; use [`invert_iterative`] or [`invert_stack`] for deeply skewed trees.
pub fn invert_recursive(node: Option<&mut Node>) -> Option<&mut Node> {
    let node = node?;
    node.swap_children();
    invert_recursive(node.left.as_deref_mut());
    invert_recursive(node.right.as_deref_mut());
    Some(node)
}

/// Level-by-level inversion driven by a FIFO queue seeded with `node`.
#[instrument(level = "debug", skip_all)]
pub fn invert_iterative(node: Option<&mut Node>) -> Option<&mut Node> {
    let root = node?;
    let mut queue: VecDeque<&mut Node> = VecDeque::new();
    queue.push_back(&mut *root);
    let mut visited = 0usize;

    while let Some(current) = queue.pop_front() {
        current.swap_children();
        visited += 1;

        let Node { left, right, .. } = current;
        if let Some(left) = left.as_deref_mut() {
            queue.push_back(left);
        }
        if let Some(right) = right.as_deref_mut() {
            queue.push_back(right);
        }
    }

    trace!(visited, "queue drained");
    Some(root)
}

/// Pre-order inversion with an explicit stack instead of recursion.
#[instrument(level = "debug", skip_all)]
pub fn invert_stack(node: Option<&mut Node>) -> Option<&mut Node> {
    let root = node?;
    let mut stack: Vec<&mut Node> = vec![&mut *root];
    let mut visited = 0usize;

    while let Some(current) = stack.pop() {
        current.swap_children();
        visited += 1;

        // push right first so the new left subtree is visited first
        let Node { left, right, .. } = current;
        if let Some(right) = right.as_deref_mut() {
            stack.push(right);
        }
        if let Some(left) = left.as_deref_mut() {
            stack.push(left);
        }
    }

    trace!(visited, "stack drained");
    Some(root)
}
