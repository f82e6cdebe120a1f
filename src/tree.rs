use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::invert::{self, Strategy};
use crate::node::{Link, Node};
use crate::render;

/// Container owning a binary tree through its root link.
///
/// Inversions mutate the tree in place: links are swapped, nodes are neither
/// created nor destroyed. Dropping the container releases the whole node graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    root: Link,
}

impl BinaryTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }

    /// Replace the root link.
    ///
    /// The previous root is handed back to the caller rather than dropped.
    pub fn set_root(&mut self, root: Link) -> Link {
        std::mem::replace(&mut self.root, root)
    }

    pub fn take_root(&mut self) -> Link {
        self.root.take()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Recursive pre-order inversion of the subtree at `node`; returns `node`.
    pub fn invert_recursive(node: Option<&mut Node>) -> Option<&mut Node> {
        invert::invert_recursive(node)
    }

    /// Queue-driven level-order inversion of the subtree at `node`; returns `node`.
    pub fn invert_iterative(node: Option<&mut Node>) -> Option<&mut Node> {
        invert::invert_iterative(node)
    }

    /// In-order print of the subtree at `node` to stdout, each value followed by a space.
    pub fn print(node: Option<&Node>) {
        let stdout = io::stdout();
        Self::print_to(node, &mut stdout.lock());
    }

    /// `print` against any sink; a failed write is logged, never returned.
    fn print_to<W: Write>(node: Option<&Node>, out: &mut W) {
        if let Err(e) = render::write_in_order(node, out, render::DEFAULT_SEPARATOR)
            .and_then(|_| out.flush())
        {
            debug!(error = %e, "in-order print failed");
        }
    }

    /// Mirror the whole tree using `strategy`.
    #[instrument(level = "debug", skip(self), fields(nodes = self.len()))]
    pub fn invert_with(&mut self, strategy: Strategy) -> Option<&mut Node> {
        debug!(%strategy, "inverting tree");
        invert::invert(strategy, self.root_mut())
    }

    pub fn invert_root_recursive(&mut self) -> Option<&mut Node> {
        self.invert_with(Strategy::Recursive)
    }

    pub fn invert_root_iterative(&mut self) -> Option<&mut Node> {
        self.invert_with(Strategy::Iterative)
    }

    pub fn print_root(&self) {
        Self::print(self.root());
    }

    /// Values in in-order (left, node, right).
    pub fn in_order(&self) -> Vec<i32> {
        render::in_order_values(self.root())
    }
}

impl From<Node> for BinaryTree {
    fn from(root: Node) -> Self {
        Self::with_root(root)
    }
}
