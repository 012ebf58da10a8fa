// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merkle Layout: a Kurbo-native tidy layout for labeled hash trees.
//!
//! Merkle Layout takes an already-built tree of `{ text, children }` nodes and assigns each node a
//! position in a 2-D drawing space.
//!
//! - One axis carries depth, the other carries breadth; [`Orientation`] picks which is which.
//! - Leaves take consecutive breadth slots in input order, and every parent is centered on the
//!   mean breadth of its children, so subtrees never overlap and siblings never reorder.
//! - The root always lands on the origin, whatever the shape of the tree. Renderers anchor the
//!   origin once and get a stable starting view.
//!
//! It does not draw anything. See `merkle_scene` for the drawing surface that consumes a
//! [`TreeLayout`].
//!
//! ## Size guard
//!
//! Very large trees are unreadable as node-link diagrams. [`guard`] counts nodes against a limit
//! ([`DEFAULT_NODE_LIMIT`]) so callers can show a short notice instead of laying out at all.
//!
//! ## Input boundary
//!
//! [`TreeNode`] is a plain owned value. Trees that arrive as JSON go through
//! [`TreeNode::from_json_str`], which rejects malformed nodes with a [`TreeError`] naming the
//! offending node's location.
//!
//! ## Traversal
//!
//! Counting, layout, and JSON conversion all use explicit stacks or queues; deep chains do not
//! consume call stack.
//!
//! ## Example
//!
//! ```
//! use kurbo::Size;
//! use merkle_layout::{layout, Guard, NodeGap, Orientation, TreeNode, guard};
//!
//! let tree = TreeNode::leaf("root")
//!     .with_child(TreeNode::leaf("a"))
//!     .with_child(TreeNode::leaf("b").with_child(TreeNode::leaf("c")));
//!
//! assert_eq!(guard(&tree, 1200), Guard::Proceed { node_count: 4 });
//!
//! let l = layout(&tree, Size::new(162.0, 40.0), NodeGap::default(), Orientation::Horizontal);
//! assert_eq!(l.nodes().len(), 4);
//! assert_eq!(l.links().len(), 3);
//!
//! // The root is centered between its two children.
//! let root = l.breadth(0);
//! let mean = (l.breadth(1) + l.breadth(2)) / 2.0;
//! assert!((root - mean).abs() < 1e-9);
//! ```

mod guard;
mod input;
mod tidy;
mod types;

pub use guard::{DEFAULT_NODE_LIMIT, Guard, count_nodes, guard, overflow_message};
pub use input::TreeError;
pub use tidy::{Link, PositionedNode, TreeLayout, layout};
pub use types::{NodeGap, Orientation, Spacing, TreeNode};
