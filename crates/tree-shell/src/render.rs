//! Text drawing of a tree
//!
//! Node positions come from [`TreeLayout`] with a character grid in mind:
//! siblings on the bottom level are four columns apart and every level takes
//! two rows, the second one holding the `/` and `\` edges.

use complete_tree::layout::{Point, TreeLayout};
use complete_tree::BinaryTree;
use std::fmt::Display;

pub struct Renderer {
    layout: TreeLayout,
    width: usize,
}

impl Renderer {
    /// A renderer centering its drawings within at least `width` columns
    pub fn new(width: usize) -> Self {
        Self {
            layout: TreeLayout::new()
                .node_spacing(4.)
                .level_spacing(2.)
                .scale_large_trees(false),
            width,
        }
    }

    /// Draw `tree`, one line per row, each line ending with a newline
    pub fn render<T: Display>(&self, tree: &BinaryTree<T>) -> String {
        let placements = self.layout.place(tree);
        let Some((min, max)) = TreeLayout::bounds(&placements) else {
            return String::new();
        };

        let span = (max.x - min.x).round() as usize + 1;
        let columns = span.max(self.width);
        let shift = (columns - span) / 2;
        let rows = (max.y - min.y).round() as usize + 1;
        let mut grid = vec![vec![' '; columns]; rows];

        let cell = |point: Point| {
            (
                (point.y - min.y).round() as usize,
                (point.x - min.x).round() as usize + shift,
            )
        };

        for placement in &placements {
            let (row, column) = cell(placement.position);
            if let Some(parent) = placement.parent {
                let edge = if placement.position.x < parent.x { '/' } else { '\\' };
                let middle = Point::new(
                    (parent.x + placement.position.x) / 2.,
                    (parent.y + placement.position.y) / 2.,
                );
                let (edge_row, edge_column) = cell(middle);
                put(&mut grid, edge_row, edge_column, edge);
            }
            for (i, c) in placement.value.to_string().chars().enumerate() {
                put(&mut grid, row, column + i, c);
            }
        }

        let mut drawing = String::new();
        for line in grid {
            let line: String = line.into_iter().collect();
            drawing.push_str(line.trim_end());
            drawing.push('\n');
        }
        drawing
    }
}

fn put(grid: &mut [Vec<char>], row: usize, column: usize, c: char) {
    if let Some(cell) = grid.get_mut(row).and_then(|line| line.get_mut(column)) {
        *cell = c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use complete_tree::TraversalOrder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_five_nodes() {
        let tree = BinaryTree::from_traversal("ABCDE".chars(), TraversalOrder::Pre);
        let expected = [
            "      A",
            "    /   \\",
            "  B       E",
            " / \\",
            "C   D",
        ];
        assert_eq!(Renderer::new(0).render(&tree), expected.join("\n") + "\n");
    }

    #[test]
    fn test_render_centers_in_width() {
        let tree = BinaryTree::from_level_order(['b', 'a', 'c']);
        let expected = ["    b", "   / \\", "  a   c"];
        assert_eq!(Renderer::new(9).render(&tree), expected.join("\n") + "\n");
    }

    #[test]
    fn test_render_single_and_empty() {
        let renderer = Renderer::new(0);
        assert_eq!(renderer.render(&BinaryTree::from_level_order(['r'])), "r\n");
        assert_eq!(renderer.render(&BinaryTree::<char>::new()), "");
    }
}
