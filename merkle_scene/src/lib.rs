// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merkle Scene: a retained drawing surface for Merkle tree graphs.
//!
//! Merkle Scene takes a [`TreeLayout`](merkle_layout::TreeLayout) and draws it into a
//! [`Container`] as an SVG element tree:
//!
//! - one right-angled elbow path per parent → child link,
//! - one rounded rectangle per node, centered on its layout position,
//! - two labels per node: a shortened always-visible one and the full text, revealed on hover.
//!
//! Everything sits inside a single zoom group whose `transform` is the only thing pan and zoom
//! ever touch.
//!
//! ## Draw protocol
//!
//! [`GraphView::draw`] is the entry point. It counts nodes first; a tree over the configured
//! limit leaves a one-line notice in the container instead of a drawing. Otherwise it lays the
//! tree out and renders it. Each draw fully replaces what the container held before, so
//! redrawing after a resize is just another call.
//!
//! Containers live in a [`Document`] under stable keys. Drawing into an unregistered key fails
//! with [`DrawError::MissingContainer`]; JSON documents that are not well-formed trees fail with
//! [`DrawError::MalformedTree`] before the container is touched.
//!
//! ## Interaction
//!
//! A [`Drawing`] keeps just enough state to pan, zoom, and hit-test:
//! [`Drawing::pan_by`], [`Drawing::zoom_at`], [`Drawing::reset_zoom`], and
//! [`Drawing::hover_at`], which marks the hovered node and its path to the root.
//!
//! ## Example
//!
//! ```
//! use merkle_layout::TreeNode;
//! use merkle_scene::{Container, DrawOutcome, GraphConfig, GraphView};
//!
//! let tree = TreeNode::leaf("root")
//!     .with_child(TreeNode::leaf("a"))
//!     .with_child(TreeNode::leaf("b").with_child(TreeNode::leaf("c")));
//!
//! let view = GraphView::new(GraphConfig::default());
//! let mut holder = Container::new("merkle_graph_holder", 800.0);
//! let outcome = view.draw(&mut holder, &tree);
//! assert_eq!(outcome, DrawOutcome::Drawn { node_count: 4, link_count: 3 });
//! assert_eq!(holder.height(), Some(400.0));
//!
//! let drawing = holder.drawing_mut().unwrap();
//! drawing.pan_by(kurbo::Vec2::new(20.0, 0.0));
//! assert_eq!(
//!     drawing.zoom_group().attr("transform"),
//!     Some("translate(20,0) scale(1)")
//! );
//! ```

mod config;
mod container;
mod element;
mod error;
pub mod hover;
mod label;
mod path;
mod render;
mod view;
mod zoom;

pub use config::{Footprint, GraphConfig, LabelConfig};
pub use container::{Container, Document};
pub use element::Element;
pub use error::DrawError;
pub use hover::{HoverEvent, HoverState, NodeFlags};
pub use label::main_label;
pub use path::elbow_path;
pub use render::{Drawing, STYLESHEET, SVG_NS, render};
pub use view::{DrawOutcome, GraphView};
pub use zoom::ZoomTransform;
