//! The binary tree container

use log::{debug, trace};
use std::collections::VecDeque;
use std::fmt;

use crate::builder::CompleteShapeBuilder;
use crate::error::{Result, TreeError};
use crate::flat::{self, FlatArray};
use crate::node::{self, Link, Node};
use crate::order::TraversalOrder;
use crate::shuffle::Shuffler;
use crate::walk::{LevelWalk, Walk};

/// A general binary tree owning its root node
///
/// Positions are structural, not key-based: nothing orders the values. Trees
/// built by [`build_from_traversal`](Self::build_from_traversal),
/// [`from_level_order`](Self::from_level_order) or by successive
/// [`insert`](Self::insert) calls are complete, and
/// [`delete`](Self::delete) restores completeness after removing nodes.
/// Arbitrary shapes can still be adopted through [`from_root`](Self::from_root).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> BinaryTree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an existing node graph as-is, whatever its shape
    pub fn from_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Build the complete tree whose `order` traversal yields `values`
    pub fn from_traversal(values: impl IntoIterator<Item = T>, order: TraversalOrder) -> Self {
        let mut tree = Self::new();
        tree.build_from_traversal(values, order);
        tree
    }

    /// Build the complete tree whose level order yields `values`
    pub fn from_level_order(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            root: flat::from_level_order(values),
        }
    }

    /// Replace the contents of this tree with the complete tree whose `order`
    /// traversal yields `values`
    pub fn build_from_traversal(&mut self, values: impl IntoIterator<Item = T>, order: TraversalOrder) {
        self.root = CompleteShapeBuilder::new(values, order).build().map(Box::new);
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.root = None;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, for read-only walks
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Give up the tree, returning its root node
    pub fn into_root(self) -> Option<Node<T>> {
        self.root.map(|node| *node)
    }

    /// Number of edges from the root to the deepest level
    ///
    /// Both an empty tree and a single node have height 0.
    pub fn height(&self) -> usize {
        self.level_count().saturating_sub(1)
    }

    /// Number of levels, counted breadth-first (0 for an empty tree)
    pub fn level_count(&self) -> usize {
        let Some(root) = self.root.as_deref() else {
            return 0;
        };

        let mut levels = 0;
        let mut queue = VecDeque::from([root]);
        while !queue.is_empty() {
            levels += 1;
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else { break };
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
        levels
    }

    pub fn node_count(&self) -> usize {
        node::count(&self.root)
    }

    /// Number of nodes without children
    pub fn leaf_count(&self) -> usize {
        node::count_leaves(&self.root)
    }

    /// Iterate over the values in a depth-first order
    pub fn iter(&self, order: TraversalOrder) -> Walk<'_, T> {
        Walk::new(self.root(), order)
    }

    /// Iterate over the nodes breadth-first, with their depth
    pub fn level_walk(&self) -> LevelWalk<'_, T> {
        LevelWalk::new(self.root())
    }

    /// Call `visit` on every value in the given order
    pub fn traverse(&self, order: TraversalOrder, visit: impl FnMut(&T)) {
        self.iter(order).for_each(visit);
    }

    pub fn preorder(&self, visit: impl FnMut(&T)) {
        self.traverse(TraversalOrder::Pre, visit);
    }

    pub fn inorder(&self, visit: impl FnMut(&T)) {
        self.traverse(TraversalOrder::In, visit);
    }

    pub fn postorder(&self, visit: impl FnMut(&T)) {
        self.traverse(TraversalOrder::Post, visit);
    }

    /// Call `visit` on every value, level by level, left to right
    pub fn level_order(&self, mut visit: impl FnMut(&T)) {
        for (node, _) in self.level_walk() {
            visit(node.value());
        }
    }

    /// The values grouped by level, root level first
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels: Vec<Vec<&T>> = Vec::new();
        for (node, depth) in self.level_walk() {
            if levels.len() <= depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node.value());
        }
        levels
    }

    /// Returns true if every level is full except for a run of missing
    /// positions at the right end of the last one
    pub fn is_complete(&self) -> bool {
        let mut queue = VecDeque::from([self.root()]);
        let mut seen_gap = false;
        while let Some(slot) = queue.pop_front() {
            match slot {
                None => seen_gap = true,
                Some(_) if seen_gap => return false,
                Some(node) => {
                    queue.push_back(node.left());
                    queue.push_back(node.right());
                }
            }
        }
        true
    }

    /// Attach `value` at the first open child slot in level order, left
    /// before right
    ///
    /// A complete tree stays complete.
    pub fn insert(&mut self, value: T) {
        let Some(root) = self.root.as_deref_mut() else {
            trace!("inserting as the new root");
            self.root = Some(Box::new(Node::new(value)));
            return;
        };

        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            let Node { left, right, .. } = node;
            if left.is_none() {
                trace!("inserting as a left child");
                *left = Some(Box::new(Node::new(value)));
                return;
            }
            if right.is_none() {
                trace!("inserting as a right child");
                *right = Some(Box::new(Node::new(value)));
                return;
            }
            queue.extend(left.as_deref_mut());
            queue.extend(right.as_deref_mut());
        }
    }
}

impl<T: PartialEq> BinaryTree<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter(TraversalOrder::Pre).any(|candidate| candidate == value)
    }

    /// Remove every node holding `value`, then restore the complete shape
    ///
    /// Returns the number of removed nodes; zero leaves the tree untouched.
    pub fn delete(&mut self, value: &T) -> usize {
        let mut removed = 0;
        self.root = remove_matching(self.root.take(), value, &mut removed);
        if removed > 0 {
            debug!("removed {} nodes, reshaping", removed);
            self.root = Shuffler::reshape_link(self.root.take());
        }
        removed
    }
}

/// Remove every node equal to `value` below `link`.
///
/// A match with at most one child is replaced by that child. A match with two
/// children takes the value of its first non-matching in-order successor,
/// whose node is spliced out instead; matching successors met on the way are
/// removed too. Both subtrees are searched for further matches.
fn remove_matching<T: PartialEq>(link: Link<T>, value: &T, removed: &mut usize) -> Link<T> {
    let mut node = link?;
    if node.value != *value {
        node.left = remove_matching(node.left.take(), value, removed);
        node.right = remove_matching(node.right.take(), value, removed);
        return Some(node);
    }

    match (node.left.take(), node.right.take()) {
        (None, right) => {
            *removed += 1;
            remove_matching(right, value, removed)
        }
        (left, None) => {
            *removed += 1;
            remove_matching(left, value, removed)
        }
        (left, mut right) => {
            *removed += 1;
            let left = remove_matching(left, value, removed);
            loop {
                let Some(successor) = take_leftmost(&mut right) else {
                    // Everything on the right matched
                    return left;
                };
                if successor != *value {
                    node.value = successor;
                    break;
                }
                *removed += 1;
            }
            node.left = left;
            node.right = remove_matching(right, value, removed);
            Some(node)
        }
    }
}

/// Splice out the leftmost node below `link`, returning its value
fn take_leftmost<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        return take_leftmost(&mut link.as_mut()?.left);
    }
    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

impl<T: Clone> BinaryTree<T> {
    /// Copy the values into an array indexed by complete-tree position
    /// (root at 1, children of `i` at `2i` and `2i + 1`).
    ///
    /// Only indices below `max_cells` are written; [`FlatArray::span`] still
    /// reports the full extent, so compare it with `max_cells` (or use
    /// [`FlatArray::is_truncated`]) to detect a short buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotComplete`] if the tree is not complete, since
    /// the array would have gaps.
    pub fn to_flat_array(&self, max_cells: usize) -> Result<FlatArray<T>> {
        if !self.is_complete() {
            return Err(TreeError::NotComplete);
        }
        Ok(FlatArray::capture(self.root(), max_cells))
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    /// Inserting values one by one fills the complete tree in level order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_level_order(iter)
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Writes the values in in-order, separated by spaces
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter(TraversalOrder::In).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preorder_of<T: Clone>(tree: &BinaryTree<T>) -> Vec<T> {
        tree.iter(TraversalOrder::Pre).cloned().collect()
    }

    #[test]
    fn test_empty_tree_queries() {
        let tree = BinaryTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.level_count(), 0);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.leaf_count(), 0);
        assert!(tree.is_complete());
        assert!(tree.levels().is_empty());
        assert_eq!(tree.to_string(), "");
    }

    #[test]
    fn test_single_node_height() {
        let tree = BinaryTree::from_root(Node::new('r'));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.level_count(), 1);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_insert_fills_level_order() {
        let mut tree = BinaryTree::new();
        for value in 1..=6 {
            tree.insert(value);
            assert!(tree.is_complete());
        }
        assert_eq!(tree.levels(), vec![vec![&1], vec![&2, &3], vec![&4, &5, &6]]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_insert_matches_from_iter() {
        let mut inserted = BinaryTree::new();
        inserted.extend(0..11);
        let collected: BinaryTree<_> = (0..11).collect();
        assert_eq!(inserted, collected);
    }

    #[test]
    fn test_is_complete_detects_gaps() {
        let gap_on_left = Node::with_children(1, None, Some(Node::new(2)));
        assert!(!BinaryTree::from_root(gap_on_left).is_complete());

        //      1
        //     / \
        //    2   3
        //       /
        //      4
        let gap_mid_level = Node::with_children(
            1,
            Some(Node::new(2)),
            Some(Node::with_children(3, Some(Node::new(4)), None)),
        );
        assert!(!BinaryTree::from_root(gap_mid_level).is_complete());
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = BinaryTree::from_level_order(1..=5);
        assert_eq!(tree.delete(&5), 1);
        // Pre-order 1 2 4 3 of the gapped tree becomes the new level order
        assert_eq!(tree.levels(), vec![vec![&1], vec![&2, &4], vec![&3]]);
        assert!(tree.is_complete());
    }

    #[test]
    fn test_delete_node_with_one_child() {
        //      1               1
        //     / \             / \
        //    2   3    ->     4   3
        //   /
        //  4
        let mut tree = BinaryTree::from_level_order(1..=4);
        assert_eq!(tree.delete(&2), 1);
        assert_eq!(tree.levels(), vec![vec![&1], vec![&4, &3]]);
    }

    #[test]
    fn test_delete_node_with_two_children_uses_successor() {
        //        1                  6                   6
        //      /   \              /   \               /   \
        //     2     3     ->     2     3      ->     2     4
        //    / \   / \          / \     \           / \   /
        //   4   5 6   7        4   5     7         5   3 7
        let mut tree = BinaryTree::from_level_order(1..=7);
        assert_eq!(tree.delete(&1), 1);
        assert_eq!(
            tree.levels(),
            vec![vec![&6], vec![&2, &4], vec![&5, &3, &7]]
        );
        assert_eq!(preorder_of(&tree), vec![6, 2, 5, 3, 4, 7]);
    }

    #[test]
    fn test_delete_successor_with_same_value() {
        //        7
        //      /   \
        //     1     7
        let mut tree = BinaryTree::from_level_order([7, 1, 7]);
        assert_eq!(tree.delete(&7), 2);
        assert_eq!(preorder_of(&tree), vec![1]);
        assert!(!tree.contains(&7));
    }

    #[test]
    fn test_delete_skips_matching_successors() {
        //        7                   3
        //      /   \                /
        //     1     7       ->     1
        //    / \   / \
        //   7   7 7   3
        let mut tree = BinaryTree::from_level_order([7, 1, 7, 7, 7, 7, 3]);
        assert_eq!(tree.delete(&7), 5);
        assert_eq!(tree.levels(), vec![vec![&3], vec![&1]]);
    }

    #[test]
    fn test_delete_everything() {
        let mut tree = BinaryTree::from_level_order(['a'; 9]);
        assert_eq!(tree.delete(&'a'), 9);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_absent_value_is_noop() {
        // A gapped shape stays gapped when nothing matches
        let shape = Node::with_children(1, None, Some(Node::new(2)));
        let mut tree = BinaryTree::from_root(shape.clone());
        assert_eq!(tree.delete(&9), 0);
        assert_eq!(tree, BinaryTree::from_root(shape));
    }

    #[test]
    fn test_to_flat_array_rejects_incomplete_tree() {
        let tree = BinaryTree::from_root(Node::with_children(1, None, Some(Node::new(2))));
        assert_eq!(tree.to_flat_array(8), Err(TreeError::NotComplete));
    }

    #[test]
    fn test_display_is_inorder() {
        let tree = BinaryTree::from_level_order(['b', 'a', 'c']);
        assert_eq!(tree.to_string(), "a b c");
    }

    #[test]
    fn test_clear_and_into_root() {
        let mut tree = BinaryTree::from_level_order(1..=3);
        let root = tree.clone().into_root().expect("tree is not empty");
        assert_eq!(root.subtree_len(), 3);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.into_root(), None);
    }
}
