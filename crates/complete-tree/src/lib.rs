//! Complete Tree Library
//!
//! A general binary tree (not a search tree) with two capabilities beyond
//! the usual ones:
//!
//! - rebuilding the exact shape of a complete tree from a flat sequence of
//!   values and the traversal order that produced it, and
//! - keeping the tree complete after values are deleted, by relinearizing
//!   the surviving values into the unique complete layout.
//!
//! # Core Concepts
//!
//! - **BinaryTree**: owns the nodes; queries, traversals, insert and delete
//! - **CompleteShapeBuilder**: traversal sequence to complete tree
//! - **Shuffler**: any shape back to the complete tree of the same size
//! - **FlatArray**: values indexed by complete-tree position (root = 1)
//! - **TreeLayout**: node coordinates for drawing backends
//!
//! # Example
//!
//! ```
//! use complete_tree::prelude::*;
//!
//! let mut tree = BinaryTree::from_traversal("ABCDE".chars(), TraversalOrder::Pre);
//! assert_eq!(tree.node_count(), 5);
//! assert_eq!(tree.level_count(), 3);
//!
//! let mut seen = String::new();
//! tree.preorder(|c| seen.push(*c));
//! assert_eq!(seen, "ABCDE");
//!
//! tree.delete(&'B');
//! let flat = tree.to_flat_array(8).expect("tree stays complete");
//! assert_eq!(flat.span(), 4);
//! ```

mod builder;
mod error;
mod flat;
pub mod layout;
mod node;
mod order;
mod shuffle;
mod tree;
mod walk;

pub use builder::{complete_tree_height, CompleteShapeBuilder};
pub use error::{Result, TreeError};
pub use flat::FlatArray;
pub use node::Node;
pub use order::TraversalOrder;
pub use shuffle::Shuffler;
pub use tree::BinaryTree;
pub use walk::{LevelWalk, Walk};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::layout::{Placement, Point, TreeLayout};
    pub use crate::{
        complete_tree_height, BinaryTree, FlatArray, Node, TraversalOrder, TreeError,
    };
}
