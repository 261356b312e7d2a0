//! Reconstruction of complete trees from a traversal sequence
//!
//! There is exactly one complete binary tree shape for every node count, so a
//! flat sequence plus the traversal order that produced it determines the
//! tree. The builder walks that shape in the declared order and hands out the
//! values as it goes.
//!
//! ```text
//!          1                 1
//!        /   \             /   \
//!      2       3         2       3
//!     /                 / \     /
//!    4                 4   5   6
//! ```
//!
//! The levels above the last one form a perfect tree; the last level holds a
//! left-aligned run of `extra` leaves.

use log::debug;
use std::vec;

use crate::node::{Link, Node};
use crate::order::TraversalOrder;

/// Number of levels of the complete binary tree holding `n` nodes
///
/// `0` for an empty tree, otherwise `1 + floor(log2(n))`.
pub fn complete_tree_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Builds the unique complete tree whose traversal in a given order equals a
/// sequence of values
#[derive(Debug)]
pub struct CompleteShapeBuilder<T> {
    values: vec::IntoIter<T>,
    order: TraversalOrder,
    /// Leaves still to be placed on the last level
    extra: usize,
    levels: usize,
}

impl<T> CompleteShapeBuilder<T> {
    pub fn new(values: impl IntoIterator<Item = T>, order: TraversalOrder) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        let n = values.len();
        let levels = complete_tree_height(n);
        // Nodes left over once the perfect tree of `levels - 1` levels is full
        let extra = match levels {
            0 => 0,
            _ => n + 1 - (1 << (levels - 1)),
        };

        Self {
            values: values.into_iter(),
            order,
            extra,
            levels,
        }
    }

    /// Consume the values and return the root of the complete tree
    pub fn build(mut self) -> Option<Node<T>> {
        if self.levels == 0 {
            return None;
        }

        debug!(
            "building complete tree of {} values ({} levels, {} bottom leaves) from {} sequence",
            self.values.len(),
            self.levels,
            self.extra,
            self.order
        );
        let root = self.subtree(self.levels - 1);
        debug_assert_eq!(self.values.len(), 0, "every value must be placed");
        root.map(|node| *node)
    }

    /// Build the subtree whose root sits `max_height` levels above the level
    /// where bottom leaves attach.
    fn subtree(&mut self, max_height: usize) -> Link<T> {
        if self.values.len() == 0 {
            return None;
        }

        let node = match (max_height, self.order) {
            // Only a one-node tree has its root on the attach level
            (0, _) => Node::new(self.values.next()?),
            (1, TraversalOrder::Pre) => {
                let value = self.values.next()?;
                let left = self.bottom_leaf();
                let right = self.bottom_leaf();
                Node { value, left, right }
            }
            (1, TraversalOrder::In) => {
                let left = self.bottom_leaf();
                let value = self.values.next()?;
                let right = self.bottom_leaf();
                Node { value, left, right }
            }
            (1, TraversalOrder::Post) => {
                let left = self.bottom_leaf();
                let right = self.bottom_leaf();
                let value = self.values.next()?;
                Node { value, left, right }
            }
            (_, TraversalOrder::Pre) => {
                let value = self.values.next()?;
                let left = self.subtree(max_height - 1);
                let right = self.subtree(max_height - 1);
                Node { value, left, right }
            }
            (_, TraversalOrder::In) => {
                let left = self.subtree(max_height - 1);
                let value = self.values.next()?;
                let right = self.subtree(max_height - 1);
                Node { value, left, right }
            }
            (_, TraversalOrder::Post) => {
                let left = self.subtree(max_height - 1);
                let right = self.subtree(max_height - 1);
                let value = self.values.next()?;
                Node { value, left, right }
            }
        };
        Some(Box::new(node))
    }

    /// Take the next value as a last-level leaf while the budget lasts
    fn bottom_leaf(&mut self) -> Link<T> {
        if self.extra == 0 {
            return None;
        }
        let value = self.values.next()?;
        self.extra -= 1;
        Some(Box::new(Node::new(value)))
    }
}
