//! Borrowing iterators over the values of a tree

use std::collections::VecDeque;

use crate::node::Node;
use crate::order::TraversalOrder;

/// Depth-first iterator over the values of a tree
///
/// Uses an explicit stack instead of recursion. A stack entry is a node plus
/// a flag telling whether its subtrees have already been scheduled; in-order
/// and post-order walks yield a node only once the flag is set.
pub struct Walk<'a, T> {
    order: TraversalOrder,
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Walk<'a, T> {
    /// Create a walk starting at `start` (an empty walk for `None`)
    pub fn new(start: Option<&'a Node<T>>, order: TraversalOrder) -> Self {
        Self {
            order,
            stack: start.map(|node| (node, false)).into_iter().collect(),
        }
    }

    fn push_child(&mut self, child: Option<&'a Node<T>>) {
        if let Some(node) = child {
            self.stack.push((node, false));
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            match self.order {
                TraversalOrder::Pre => {
                    // Right first so the left subtree is popped first
                    self.push_child(node.right());
                    self.push_child(node.left());
                    return Some(node.value());
                }
                _ if expanded => return Some(node.value()),
                TraversalOrder::In => {
                    self.push_child(node.right());
                    self.stack.push((node, true));
                    self.push_child(node.left());
                }
                TraversalOrder::Post => {
                    self.stack.push((node, true));
                    self.push_child(node.right());
                    self.push_child(node.left());
                }
            }
        }
    }
}

/// Breadth-first iterator yielding each node together with its depth
/// (root = 0)
pub struct LevelWalk<'a, T> {
    queue: VecDeque<(&'a Node<T>, usize)>,
}

impl<'a, T> LevelWalk<'a, T> {
    pub fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            queue: start.map(|node| (node, 0)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelWalk<'a, T> {
    type Item = (&'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.pop_front()?;
        for child in [node.left(), node.right()].into_iter().flatten() {
            self.queue.push_back((child, depth + 1));
        }
        Some((node, depth))
    }
}
