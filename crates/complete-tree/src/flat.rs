//! Flat-array view of complete trees
//!
//! A complete tree maps onto an array with the root in cell 1 and the
//! children of cell `i` in cells `2i` and `2i + 1`; cell 0 is unused.
//!
//! ```text
//!            1
//!          /   \                +---+---+---+---+---+---+---+---+
//!        2       3        -->   | _ | 1 | 2 | 3 | 4 | 5 | 6 | 7 |
//!       / \     / \             +---+---+---+---+---+---+---+---+
//!      4   5   6   7              0   1   2   3   4   5   6   7
//! ```

use crate::node::{Link, Node};
use crate::tree::BinaryTree;

/// Values of a tree laid out by their complete-tree index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatArray<T> {
    cells: Vec<Option<T>>,
    span: usize,
    max_cells: usize,
}

impl<T: Clone> FlatArray<T> {
    /// Copy the values below `root` into at most `max_cells` cells.
    ///
    /// Indices at or past `max_cells` are not written, but they still count
    /// towards the span so truncation stays detectable.
    pub(crate) fn capture(root: Option<&Node<T>>, max_cells: usize) -> Self {
        let mut flat = Self {
            cells: Vec::new(),
            span: 0,
            max_cells,
        };
        if let Some(root) = root {
            flat.write(root, 1);
        }
        flat.cells.resize_with(max_cells.min(flat.span + 1), || None);
        flat
    }

    fn write(&mut self, node: &Node<T>, index: usize) {
        self.span = self.span.max(index);
        if index < self.max_cells {
            if self.cells.len() <= index {
                self.cells.resize_with(index + 1, || None);
            }
            self.cells[index] = Some(node.value().clone());
        }

        // Keep descending past the cutoff so the span stays accurate
        if let Some(left) = node.left() {
            self.write(left, 2 * index);
        }
        if let Some(right) = node.right() {
            self.write(right, 2 * index + 1);
        }
    }
}

impl<T> FlatArray<T> {
    /// Highest complete-tree index spanned by the tree, written or not
    ///
    /// For a complete tree this is its node count.
    pub fn span(&self) -> usize {
        self.span
    }

    /// The cell budget this array was captured with
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// All cells, including the unused cell 0
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// The value at a complete-tree index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.cells.get(index)?.as_ref()
    }

    /// Returns true if some indices of the tree did not fit in the cell budget
    pub fn is_truncated(&self) -> bool {
        self.span > 0 && self.span >= self.max_cells
    }

    /// Returns true if every cell from 1 to the last written one holds a value
    pub fn is_dense(&self) -> bool {
        self.cells.iter().skip(1).all(Option::is_some)
    }

    /// The written values in index order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().skip(1).flatten()
    }

    /// Rebuild a tree from the written values, read as a level order
    ///
    /// Stops at the first empty cell; a truncated array yields the complete
    /// tree of the cells that were written.
    pub fn into_tree(self) -> BinaryTree<T> {
        let values = self.cells.into_iter().skip(1).map_while(|cell| cell);
        BinaryTree::from_level_order(values)
    }
}

/// Build the complete tree whose level order is `values`
pub(crate) fn from_level_order<T>(values: impl IntoIterator<Item = T>) -> Link<T> {
    let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
    place(&mut slots, 1)
}

fn place<T>(slots: &mut [Option<T>], index: usize) -> Link<T> {
    let value = slots.get_mut(index - 1)?.take()?;
    let left = place(slots, 2 * index);
    let right = place(slots, 2 * index + 1);
    Some(Box::new(Node { value, left, right }))
}
