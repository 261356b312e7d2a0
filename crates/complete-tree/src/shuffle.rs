//! Restoring the complete shape after deletion

use log::debug;

use crate::flat::from_level_order;
use crate::node::{Link, Node};

/// Relinearizes a tree of any shape into the complete tree of the same size
///
/// Works in two phases: the old nodes are dismantled in pre-order, collecting
/// their values, then a fresh complete tree is grown with that sequence as its
/// level order. The k-th value in pre-order ends up in complete-tree slot k.
pub struct Shuffler;

impl Shuffler {
    /// Reshape the tree under `root`, returning the new root
    pub fn reshape<T>(root: Option<Node<T>>) -> Option<Node<T>> {
        Self::reshape_link(root.map(Box::new)).map(|node| *node)
    }

    pub(crate) fn reshape_link<T>(root: Link<T>) -> Link<T> {
        let values = drain_preorder(root);
        debug!("reshaping {} nodes into a complete tree", values.len());
        from_level_order(values)
    }
}

/// Dismantle a tree, moving its values out in pre-order
fn drain_preorder<T>(root: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        let Node { value, left, right } = *node;
        values.push(value);
        stack.extend(right);
        stack.extend(left);
    }
    values
}
