use std::fmt;

/// Owning link to a child node; `None` marks a leaf edge.
pub type Link = Option<Box<Node>>;

/// A single vertex of a binary tree.
///
/// Each node exclusively owns its children, so a node can never be reachable
/// from two parents and the link structure is always an acyclic tree.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with heap stacks, so deep
/// skewed trees never recurse on the call stack. `Debug` is shallow and shows
/// only this node's value and its children's values.
pub struct Node {
    /// Value fixed at construction
    pub value: i32,
    /// Left child, None for an absent edge
    pub left: Link,
    /// Right child, None for an absent edge
    pub right: Link,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Boxed node, ready to be hung on a parent's link.
    pub fn boxed(value: i32) -> Box<Self> {
        Box::new(Self::new(value))
    }

    pub fn with_left(mut self, child: Node) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Node) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Swap the left and right links of this node only.
    pub fn swap_children(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Number of nodes in the subtree rooted here.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Height of the subtree rooted here; a single node has height 1.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)]; // (node, depth)
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|n| n.value))
            .field("right", &self.right.as_ref().map(|n| n.value))
            .finish()
    }
}

/// Structural equality: same shape, same value at every position.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x.as_deref(), y.as_deref()) {
                    (None, None) => {}
                    (Some(x), Some(y)) => stack.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

/// Walk for a post-order copy: children are built before their parent.
enum CloneStep<'a> {
    Enter(&'a Node),
    Assemble(&'a Node),
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Enter(self)];
        let mut built: Vec<Node> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Enter(node) => {
                    steps.push(CloneStep::Assemble(node));
                    steps.extend(node.right.as_deref().map(CloneStep::Enter));
                    steps.extend(node.left.as_deref().map(CloneStep::Enter));
                }
                CloneStep::Assemble(node) => {
                    let mut copy = Node::new(node.value);
                    // left was built first, so right sits on top
                    if node.right.is_some() {
                        copy.right = built.pop().map(Box::new);
                    }
                    if node.left.is_some() {
                        copy.left = built.pop().map(Box::new);
                    }
                    built.push(copy);
                }
            }
        }

        built.pop().unwrap_or_else(|| Node::new(self.value))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/*
Dropping a Box<Node> recurses once per level, which overflows the call stack on
deeply skewed trees. Detach the children onto a heap stack instead so every node
is dropped with empty links.
 */
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_node_when_created_then_has_no_children() {
        let node = Node::new(5);
        assert_eq!(node.value, 5);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn given_node_with_children_when_swapping_then_links_exchange() {
        let mut node = Node::new(1).with_left(Node::new(2)).with_right(Node::new(3));
        node.swap_children();
        assert_eq!(node.left.as_ref().map(|n| n.value), Some(3));
        assert_eq!(node.right.as_ref().map(|n| n.value), Some(2));
    }

    #[test]
    fn given_skewed_chain_when_measuring_then_len_and_height_match() {
        let node = Node::new(1).with_left(Node::new(2).with_right(Node::new(3)));
        assert_eq!(node.len(), 3);
        assert_eq!(node.height(), 3);
    }

    #[test]
    fn given_nested_tree_when_cloned_then_copy_is_equal_and_independent() {
        let original = Node::new(4)
            .with_left(Node::new(2).with_right(Node::new(3)))
            .with_right(Node::new(7).with_left(Node::new(6)));
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.swap_children();
        assert_ne!(copy, original);
        assert_eq!(original.left.as_ref().map(|n| n.value), Some(2));
    }

    #[test]
    fn given_same_values_in_different_positions_when_compared_then_not_equal() {
        let left = Node::new(1).with_left(Node::new(2));
        let right = Node::new(1).with_right(Node::new(2));
        assert_ne!(left, right);
        assert_ne!(Node::new(1), Node::new(2));
    }

    #[test]
    fn given_node_when_debug_formatted_then_shows_child_values_only() {
        let node = Node::new(1).with_left(Node::new(2).with_left(Node::new(3)));
        assert_eq!(
            format!("{:?}", node),
            "Node { value: 1, left: Some(2), right: None }"
        );
    }

    #[test]
    fn given_very_deep_chain_when_dropped_then_does_not_overflow() {
        let mut root = Node::boxed(0);
        for value in 1..200_000 {
            let mut parent = Node::boxed(value);
            parent.left = Some(root);
            root = parent;
        }
        drop(root);
    }
}
