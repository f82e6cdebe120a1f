//! Tree output: in-order value listing and shape rendering.

use std::io::{self, Write};

use termtree::Tree;
use tracing::instrument;

use crate::node::Node;

pub const DEFAULT_SEPARATOR: &str = " ";

/// Label used for an absent child when its sibling is present.
const HOLE: &str = "·";

/// Write the subtree at `node` in-order, each value followed by `separator`.
///
/// An absent node writes nothing.
pub fn write_in_order<W: Write + ?Sized>(
    node: Option<&Node>,
    out: &mut W,
    separator: &str,
) -> io::Result<()> {
    if let Some(node) = node {
        write_in_order(node.left.as_deref(), out, separator)?;
        write!(out, "{}{}", node.value, separator)?;
        write_in_order(node.right.as_deref(), out, separator)?;
    }
    Ok(())
}

/// In-order listing as a string, for logs and tests.
pub fn in_order_string(node: Option<&Node>, separator: &str) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_in_order(node, &mut buf, separator);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Collect values in in-order without recursion.
pub fn in_order_values(node: Option<&Node>) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack: Vec<&Node> = Vec::new();
    let mut current = node;

    while current.is_some() || !stack.is_empty() {
        while let Some(n) = current {
            stack.push(n);
            current = n.left.as_deref();
        }
        if let Some(n) = stack.pop() {
            values.push(n.value);
            current = n.right.as_deref();
        }
    }
    values
}

/// Build a `termtree` view of the subtree at `node`, left child listed first.
#[instrument(level = "trace", skip_all)]
pub fn to_termtree(node: Option<&Node>) -> Tree<String> {
    match node {
        Some(node) => build(node),
        None => Tree::new("(empty)".to_string()),
    }
}

fn build(node: &Node) -> Tree<String> {
    let leaves: Vec<Tree<String>> = match (node.left.as_deref(), node.right.as_deref()) {
        (None, None) => Vec::new(),
        (left, right) => [left, right]
            .into_iter()
            .map(|child| child.map_or_else(|| Tree::new(HOLE.to_string()), build))
            .collect(),
    };
    Tree::new(node.value.to_string()).with_leaves(leaves)
}
