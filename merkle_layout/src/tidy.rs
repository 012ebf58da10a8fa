// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidy tree layout: leaf slots, centered parents, level-ordered output.

use core::ops::Range;

use kurbo::{Point, Size};
use tracing::instrument;

use crate::types::{NodeGap, Orientation, Spacing, TreeNode};

/// A node with its computed position.
///
/// Produced fresh by every call to [`layout`] and never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionedNode<'a> {
    /// The input node this position belongs to.
    pub node: &'a TreeNode,
    /// Index of this node in [`TreeLayout::nodes`].
    pub index: usize,
    /// Index of the parent in [`TreeLayout::nodes`], `None` for the root.
    pub parent: Option<usize>,
    /// Distance from the root; the root is 0.
    pub depth: usize,
    /// Horizontal drawing coordinate of the node center.
    pub x: f64,
    /// Vertical drawing coordinate of the node center.
    pub y: f64,
}

impl<'a> PositionedNode<'a> {
    /// Center of the node in layout space.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Label of the underlying node.
    pub fn text(&self) -> &'a str {
        &self.node.text
    }
}

/// A parent → child edge, as indices into [`TreeLayout::nodes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    /// Parent index.
    pub source: usize,
    /// Child index.
    pub target: usize,
}

/// Result of [`layout`].
///
/// Nodes are stored in level order (root first, then depth 1 left to right, and so on),
/// so the children of any node occupy a contiguous index range. Links follow the same
/// order: link `i` ends at node `i + 1`.
#[derive(Clone, Debug)]
pub struct TreeLayout<'a> {
    nodes: Vec<PositionedNode<'a>>,
    children: Vec<Range<usize>>,
    links: Vec<Link>,
    orientation: Orientation,
    spacing: Spacing,
}

impl<'a> TreeLayout<'a> {
    /// Positioned nodes in level order.
    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    /// Parent → child links in level order of their targets.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Orientation the layout was computed for.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Center-to-center spacing used.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a layout contains at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root node.
    pub fn root(&self) -> &PositionedNode<'a> {
        &self.nodes[0]
    }

    /// Children of `index`, in input order.
    pub fn children(&self, index: usize) -> &[PositionedNode<'a>] {
        &self.nodes[self.children[index].clone()]
    }

    /// Resolve both ends of a link.
    pub fn endpoints(&self, link: Link) -> (&PositionedNode<'a>, &PositionedNode<'a>) {
        (&self.nodes[link.source], &self.nodes[link.target])
    }

    /// Breadth-axis coordinate of a node.
    pub fn breadth(&self, index: usize) -> f64 {
        self.orientation.breadth_of(self.nodes[index].point())
    }
}

/// Level-order arena entry built before positions are known.
struct Slot<'a> {
    node: &'a TreeNode,
    parent: Option<usize>,
    depth: usize,
    children: Range<usize>,
}

/// Lay out `root`.
///
/// - Leaves take consecutive breadth slots, left to right in input order, `spacing.breadth` apart.
/// - Each parent sits at the mean breadth of its children.
/// - Depth coordinate is `depth * spacing.depth`.
/// - The root is placed at the origin; callers anchor the origin on their surface.
///
/// Leaf slots are disjoint and ordered, and every node lies within the span of its own
/// leaves, so nodes at the same depth are always at least one slot apart.
#[instrument(level = "trace", skip(root))]
pub fn layout<'a>(
    root: &'a TreeNode,
    footprint: Size,
    gap: NodeGap,
    orientation: Orientation,
) -> TreeLayout<'a> {
    let spacing = Spacing::new(footprint, gap, orientation);

    // Level order, so that siblings are contiguous and parents precede children.
    let mut slots = vec![Slot {
        node: root,
        parent: None,
        depth: 0,
        children: 0..0,
    }];
    let mut head = 0;
    while head < slots.len() {
        let node = slots[head].node;
        let depth = slots[head].depth + 1;
        let first = slots.len();
        slots.extend(node.children.iter().map(|child| Slot {
            node: child,
            parent: Some(head),
            depth,
            children: 0..0,
        }));
        slots[head].children = first..slots.len();
        head += 1;
    }

    let mut breadth = vec![0.0_f64; slots.len()];

    // Leaves in left-to-right order need a depth-first walk.
    let mut next_leaf = 0_usize;
    let mut stack = vec![0_usize];
    while let Some(i) = stack.pop() {
        let children = slots[i].children.clone();
        if children.is_empty() {
            breadth[i] = next_leaf as f64 * spacing.breadth;
            next_leaf += 1;
        } else {
            stack.extend(children.rev());
        }
    }

    // Reverse level order visits children before their parent.
    for i in (0..slots.len()).rev() {
        let children = slots[i].children.clone();
        if !children.is_empty() {
            let n = children.len() as f64;
            let mean = children.map(|c| breadth[c]).sum::<f64>() / n;
            breadth[i] = mean;
        }
    }

    let origin = breadth[0];
    let nodes: Vec<_> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let p = orientation.point(breadth[index] - origin, slot.depth as f64 * spacing.depth);
            PositionedNode {
                node: slot.node,
                index,
                parent: slot.parent,
                depth: slot.depth,
                x: p.x,
                y: p.y,
            }
        })
        .collect();

    let links = nodes
        .iter()
        .filter_map(|n| {
            n.parent.map(|source| Link {
                source,
                target: n.index,
            })
        })
        .collect();

    TreeLayout {
        nodes,
        children: slots.into_iter().map(|s| s.children).collect(),
        links,
        orientation,
        spacing,
    }
}
