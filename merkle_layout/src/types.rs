// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for tree layout: input nodes, orientation, and spacing.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// A labeled node of the input tree.
///
/// The tree is owned by the caller and never mutated by layout or rendering.
/// Nodes carry no identity beyond their position in the tree: two nodes with the
/// same `text` are still distinct nodes and are laid out separately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Label drawn inside the node.
    pub text: String,
    /// Ordered children. Empty for leaves.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with the given children.
    pub fn new(text: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }

    /// Create a leaf.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// Append a child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Detach descendants onto a flat stack so deep chains drop without recursion.
        let mut stack = core::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Which drawing axis carries tree depth.
///
/// ## Axes
///
/// - [`Horizontal`](Orientation::Horizontal): depth advances along `x` (left to right),
///   siblings spread along `y`.
/// - [`Vertical`](Orientation::Vertical): depth advances along `y` (top to bottom),
///   siblings spread along `x`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Root on the left, leaves to the right.
    #[default]
    Horizontal,
    /// Root on top, leaves below.
    Vertical,
}

impl Orientation {
    /// Map a `(breadth, depth)` pair onto drawing coordinates.
    pub fn point(self, breadth: f64, depth: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(depth, breadth),
            Self::Vertical => Point::new(breadth, depth),
        }
    }

    /// Breadth-axis coordinate of a drawing-space point.
    pub fn breadth_of(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.y,
            Self::Vertical => p.x,
        }
    }

    /// Depth-axis coordinate of a drawing-space point.
    pub fn depth_of(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Side of the node footprint that lies along the breadth axis.
    pub fn breadth_extent(self, footprint: Size) -> f64 {
        match self {
            Self::Horizontal => footprint.height,
            Self::Vertical => footprint.width,
        }
    }

    /// Side of the node footprint that lies along the depth axis.
    pub fn depth_extent(self, footprint: Size) -> f64 {
        match self {
            Self::Horizontal => footprint.width,
            Self::Vertical => footprint.height,
        }
    }
}

/// Minimum free space between adjacent node footprints.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeGap {
    /// Gap between neighbors at the same depth.
    pub breadth: f64,
    /// Gap between a parent and its children.
    pub depth: f64,
}

impl NodeGap {
    /// Create a gap.
    pub const fn new(breadth: f64, depth: f64) -> Self {
        Self { breadth, depth }
    }
}

impl Default for NodeGap {
    fn default() -> Self {
        Self::new(10.0, 40.0)
    }
}

/// Center-to-center distances used by the layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spacing {
    /// Distance between adjacent leaf slots.
    pub breadth: f64,
    /// Distance between consecutive depth levels.
    pub depth: f64,
}

impl Spacing {
    /// Derive spacing from a footprint, a gap and the orientation that decides which
    /// footprint side runs along which axis.
    pub fn new(footprint: Size, gap: NodeGap, orientation: Orientation) -> Self {
        Self {
            breadth: orientation.breadth_extent(footprint) + gap.breadth,
            depth: orientation.depth_extent(footprint) + gap.depth,
        }
    }
}
