//! Node placement for drawing a tree.
//!
//! This is the geometry a drawing backend needs and nothing more: it reads
//! the tree's height and walks its nodes, never mutating them. Horizontal
//! gaps halve at every level so that the bottom level is `node_spacing`
//! apart, and trees taller than four edges are scaled down to keep their
//! width bounded.

use crate::node::Node;
use crate::tree::BinaryTree;

/// A position in layout space. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a single value is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<'a, T> {
    /// The value held by the node.
    pub value: &'a T,

    /// Distance from the root (root = 0).
    pub depth: usize,

    /// Center of the node.
    pub position: Point,

    /// Center of the parent node, `None` for the root.
    pub parent: Option<Point>,
}

/// Computes node positions for a top-down drawing of a binary tree.
#[derive(Clone, Debug)]
pub struct TreeLayout {
    /// Horizontal distance between two siblings on the bottom level.
    pub node_spacing: f64,

    /// Vertical distance between levels.
    pub level_spacing: f64,

    /// Position of the root.
    pub origin: Point,

    /// Whether trees of height 4 or more are shrunk.
    pub scale_large_trees: bool,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            node_spacing: 30.,
            level_spacing: 90.,
            origin: Point::default(),
            scale_large_trees: true,
        }
    }
}

impl TreeLayout {
    /// Create a new tree layout with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing between sibling nodes.
    pub fn node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the spacing between levels.
    pub fn level_spacing(mut self, spacing: f64) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the root position.
    pub fn origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set whether tall trees are scaled down.
    pub fn scale_large_trees(mut self, scale: bool) -> Self {
        self.scale_large_trees = scale;
        self
    }

    /// The scale factor applied to a tree of the given height.
    pub fn scale_for_height(&self, height: usize) -> f64 {
        if self.scale_large_trees && height >= 4 {
            16.0 / 2f64.powi(height as i32)
        } else {
            1.0
        }
    }

    /// Place every node of `tree`, in pre-order.
    pub fn place<'a, T>(&self, tree: &'a BinaryTree<T>) -> Vec<Placement<'a, T>> {
        let height = tree.height();
        let scale = self.scale_for_height(height);
        let mut placements = Vec::with_capacity(tree.node_count());
        if let Some(root) = tree.root() {
            self.place_subtree(
                root,
                height.saturating_sub(1),
                0,
                self.origin,
                None,
                scale,
                &mut placements,
            );
        }
        placements
    }

    #[allow(clippy::too_many_arguments)]
    fn place_subtree<'a, T>(
        &self,
        node: &'a Node<T>,
        leaf_dist: usize,
        depth: usize,
        position: Point,
        parent: Option<Point>,
        scale: f64,
        placements: &mut Vec<Placement<'a, T>>,
    ) {
        placements.push(Placement {
            value: node.value(),
            depth,
            position,
            parent,
        });

        let offset = 2f64.powi(leaf_dist as i32) * self.node_spacing * scale / 2.0;
        let child_y = position.y + self.level_spacing * scale;
        let children = [(node.left(), -offset), (node.right(), offset)];
        for (child, dx) in children {
            if let Some(child) = child {
                self.place_subtree(
                    child,
                    leaf_dist.saturating_sub(1),
                    depth + 1,
                    Point::new(position.x + dx, child_y),
                    Some(position),
                    scale,
                    placements,
                );
            }
        }
    }

    /// The smallest box containing every placement, as (top-left,
    /// bottom-right). `None` when there is nothing placed.
    pub fn bounds<T>(placements: &[Placement<'_, T>]) -> Option<(Point, Point)> {
        let first = placements.first()?.position;
        let bounds = placements.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.position.x), min.y.min(p.position.y)),
                Point::new(max.x.max(p.position.x), max.y.max(p.position.y)),
            )
        });
        Some(bounds)
    }
}
