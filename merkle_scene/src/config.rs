// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graph configuration.
//!
//! Every field has a default, so a partial document (for example a TOML file that only sets
//! `orientation`) deserializes into a complete configuration.

use kurbo::Size;
use merkle_layout::{DEFAULT_NODE_LIMIT, NodeGap, Orientation};
use serde::{Deserialize, Serialize};

/// Drawn size of one node rectangle, in surface units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footprint {
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
}

impl Footprint {
    /// As a Kurbo size.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            width: 162.0,
            height: 40.0,
        }
    }
}

/// How node labels are shortened for the always-visible text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Labels with more characters than this are truncated.
    pub max_chars: usize,
    /// Characters kept when truncating.
    pub keep_chars: usize,
    /// Appended after the kept characters.
    pub ellipsis: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            max_chars: 16,
            keep_chars: 14,
            ellipsis: "..".into(),
        }
    }
}

/// Everything a [`GraphView`](crate::GraphView) needs besides the tree and the container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Which axis carries depth.
    pub orientation: Orientation,
    /// Node rectangle size.
    pub footprint: Footprint,
    /// Free space between node rectangles.
    pub gap: NodeGap,
    /// Trees with more nodes than this show a notice instead of a drawing.
    pub node_limit: usize,
    /// Corner radius of node rectangles.
    pub corner_radius: f64,
    /// Label truncation.
    pub labels: LabelConfig,
    /// Emit a `<style>` element so exported markup shows full labels on hover by itself.
    pub embed_stylesheet: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            footprint: Footprint::default(),
            gap: NodeGap::default(),
            node_limit: DEFAULT_NODE_LIMIT,
            corner_radius: 5.0,
            labels: LabelConfig::default(),
            embed_stylesheet: false,
        }
    }
}

impl GraphConfig {
    /// Same configuration with a different orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Same configuration with a different node limit.
    #[must_use]
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }
}
