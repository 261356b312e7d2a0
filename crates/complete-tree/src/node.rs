//! Owned binary tree cells

/// An owning link to a child subtree
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of a binary tree
///
/// Each node exclusively owns its two optional children, so a tree is a strict
/// out-tree: no parent pointers, no sharing, no cycles. Dropping a node drops
/// its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Create a node without children
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Create a node owning the given subtrees
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree, if any
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right subtree, if any
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if both children are absent
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Number of nodes in the subtree rooted here, this node included
    pub fn subtree_len(&self) -> usize {
        1 + count(&self.left) + count(&self.right)
    }
}

pub(crate) fn count<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, Node::subtree_len)
}

pub(crate) fn count_leaves<T>(link: &Link<T>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) if node.is_leaf() => 1,
        Some(node) => count_leaves(&node.left) + count_leaves(&node.right),
    }
}
