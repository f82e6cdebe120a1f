//! Binary tree inversion.
//!
//! A [`BinaryTree`] owns a graph of [`Node`]s through `Box` links. Inverting it
//! swaps the left and right child of every node, producing the mirror image.
//! Three traversal strategies reach the same end state:
//!
//! - [`invert_recursive`]: pre-order DFS on the call stack
//! - [`invert_iterative`]: level-order BFS with a FIFO queue
//! - [`invert_stack`]: pre-order DFS with an explicit stack
//!
//! ```
//! use treeflip::{sample_tree, BinaryTree};
//!
//! let mut tree = sample_tree();
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 6, 7, 9]);
//! BinaryTree::invert_recursive(tree.root_mut());
//! assert_eq!(tree.in_order(), vec![9, 7, 6, 4, 3, 2, 1]);
//! BinaryTree::invert_iterative(tree.root_mut());
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 6, 7, 9]);
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod invert;
pub mod node;
pub mod render;
pub mod tree;
pub mod util;

pub use builder::{parse_slot, sample_tree, TreeBuilder};
pub use errors::{TreeError, TreeResult};
pub use invert::{invert, invert_iterative, invert_recursive, invert_stack, Strategy};
pub use node::{Link, Node};
pub use tree::BinaryTree;
