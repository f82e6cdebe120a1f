use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;
use crate::tree::BinaryTree;

/// Tokens accepted as an absent slot (compared case-insensitively).
const ABSENT_TOKENS: [&str; 5] = ["null", "nil", "none", "_", "-"];

/// Builds trees from level-order slot lists.
///
/// Slots are listed breadth-first. `None` is an absent child, and the children
/// of an absent slot are not listed: `[1, None, 2, 3]` is `1` with right child
/// `2`, which has left child `3`.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    slots: Vec<Option<i32>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(mut self, slot: Option<i32>) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn value(self, value: i32) -> Self {
        self.slot(Some(value))
    }

    pub fn absent(self) -> Self {
        self.slot(None)
    }

    /// Parse textual tokens (`"4"`, `"null"`, `"_"`, ...) into slots.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> TreeResult<Self> {
        let slots = tokens
            .iter()
            .map(|t| parse_slot(t.as_ref()))
            .collect::<TreeResult<Vec<_>>>()?;
        Ok(Self { slots })
    }

    pub fn build(&self) -> TreeResult<BinaryTree> {
        Self::from_level_order(&self.slots)
    }

    #[instrument(level = "debug", skip_all, fields(slots = slots.len()))]
    pub fn from_level_order(slots: &[Option<i32>]) -> TreeResult<BinaryTree> {
        let Some((first, rest)) = slots.split_first() else {
            return Ok(BinaryTree::new());
        };
        let Some(root_value) = first else {
            return if rest.iter().any(Option::is_some) {
                Err(TreeError::MissingRoot)
            } else {
                Ok(BinaryTree::new())
            };
        };

        let mut root = Node::new(*root_value);
        let mut remaining = rest.iter();
        {
            let mut queue: VecDeque<&mut Node> = VecDeque::new();
            queue.push_back(&mut root);

            while let Some(parent) = queue.pop_front() {
                let Node { left, right, .. } = parent;
                for link in [left, right] {
                    match remaining.next() {
                        Some(slot) => {
                            *link = slot.map(Node::boxed);
                            if let Some(child) = link.as_deref_mut() {
                                queue.push_back(child);
                            }
                        }
                        None => break,
                    }
                }
                if remaining.len() == 0 {
                    break;
                }
            }
        }

        let dangling = remaining.len();
        if dangling > 0 {
            return Err(TreeError::DanglingSlots { count: dangling });
        }

        debug!(nodes = root.len(), "tree built");
        Ok(BinaryTree::with_root(root))
    }
}

/// Parse one level-order token.
pub fn parse_slot(token: &str) -> TreeResult<Option<i32>> {
    let token = token.trim();
    if ABSENT_TOKENS.iter().any(|a| a.eq_ignore_ascii_case(token)) {
        return Ok(None);
    }
    token
        .parse::<i32>()
        .map(Some)
        .map_err(|_| TreeError::InvalidToken(token.to_string()))
}

/// The reference tree used by the demo and tests:
///
/// ```text
///         4
///       /   \
///      2     7
///     / \   / \
///    1   3 6   9
/// ```
pub fn sample_tree() -> BinaryTree {
    let mut root = Node::new(4);
    root.left = Some(Node::boxed(2));
    root.right = Some(Node::boxed(7));
    if let Some(left) = root.left.as_deref_mut() {
        left.left = Some(Node::boxed(1));
        left.right = Some(Node::boxed(3));
    }
    if let Some(right) = root.right.as_deref_mut() {
        right.left = Some(Node::boxed(6));
        right.right = Some(Node::boxed(9));
    }
    BinaryTree::with_root(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_empty_slots_when_building_then_tree_is_empty() {
        let tree = TreeBuilder::from_level_order(&[]).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn given_only_absent_slots_when_building_then_tree_is_empty() {
        let tree = TreeBuilder::from_level_order(&[None, None]).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn given_absent_root_with_values_when_building_then_missing_root() {
        let result = TreeBuilder::from_level_order(&[None, Some(1)]);
        assert!(matches!(result, Err(TreeError::MissingRoot)));
    }

    #[test]
    fn given_sample_slots_when_building_then_equals_sample_tree() {
        let slots = [4, 2, 7, 1, 3, 6, 9].map(Some);
        let tree = TreeBuilder::from_level_order(&slots).unwrap();
        assert_eq!(tree, sample_tree());
    }

    #[test]
    fn given_compact_form_when_building_then_children_of_absent_are_skipped() {
        // 1 -> right 2 -> left 3
        let tree = TreeBuilder::new()
            .value(1)
            .absent()
            .value(2)
            .value(3)
            .build()
            .unwrap();
        let root = tree.root().unwrap();
        assert!(root.left.is_none());
        let right = root.right.as_deref().unwrap();
        assert_eq!(right.value, 2);
        assert_eq!(right.left.as_ref().map(|n| n.value), Some(3));
        assert!(right.right.is_none());
    }

    #[test]
    fn given_too_many_slots_when_building_then_dangling_error() {
        // 1 has two absent children, leaving two slots without a parent
        let slots = [Some(1), None, None, Some(2), Some(3)];
        let result = TreeBuilder::from_level_order(&slots);
        assert!(matches!(result, Err(TreeError::DanglingSlots { count: 2 })));
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case("-7", Some(-7))]
    #[case(" 3 ", Some(3))]
    #[case("null", None)]
    #[case("NULL", None)]
    #[case("_", None)]
    #[case("-", None)]
    #[case("None", None)]
    fn given_token_when_parsing_slot_then_returns_expected(
        #[case] token: &str,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(parse_slot(token).unwrap(), expected);
    }

    #[test]
    fn given_garbage_token_when_parsing_then_invalid_token() {
        let err = parse_slot("four").unwrap_err();
        assert!(matches!(err, TreeError::InvalidToken(ref t) if t == "four"));
    }
}
