// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw protocol: guard, then layout, then render.

use merkle_layout::{TreeNode, guard, layout};
use tracing::{info, instrument};

use crate::config::GraphConfig;
use crate::container::{Container, Document};
use crate::error::DrawError;
use crate::render::render;

/// What a draw call left in its container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A drawing was installed.
    Drawn {
        /// Node groups drawn.
        node_count: usize,
        /// Link paths drawn.
        link_count: usize,
    },
    /// The tree was over the node limit; an overflow notice was installed instead.
    Overflow {
        /// Nodes counted.
        node_count: usize,
    },
}

impl DrawOutcome {
    /// Returns true if a drawing was installed.
    pub fn is_drawn(self) -> bool {
        matches!(self, Self::Drawn { .. })
    }
}

/// A configured graph view.
///
/// Holds no per-draw state: every call rebuilds the container's content from scratch, so
/// calling [`draw`](Self::draw) again after a resize or with a new tree is always safe.
#[derive(Clone, Debug, Default)]
pub struct GraphView {
    config: GraphConfig,
}

impl GraphView {
    /// View with the given configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next draw.
    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    /// Draw `tree` into `container`.
    ///
    /// Trees over the node limit leave only the overflow notice in the container.
    #[instrument(level = "trace", skip_all, fields(key = container.key()))]
    pub fn draw(&self, container: &mut Container, tree: &TreeNode) -> DrawOutcome {
        let checked = guard(tree, self.config.node_limit);
        if let Some(notice) = checked.notice() {
            let node_count = checked.node_count();
            info!(
                node_count,
                limit = self.config.node_limit,
                "tree too large to draw"
            );
            container.install_notice(notice);
            return DrawOutcome::Overflow { node_count };
        }
        let tree_layout = layout(
            tree,
            self.config.footprint.size(),
            self.config.gap,
            self.config.orientation,
        );
        let drawing = render(container, &tree_layout, &self.config);
        DrawOutcome::Drawn {
            node_count: drawing.node_count(),
            link_count: drawing.link_count(),
        }
    }

    /// Validate a JSON tree document, then draw it.
    ///
    /// A malformed document leaves the container untouched.
    pub fn draw_json(&self, container: &mut Container, json: &str) -> Result<DrawOutcome, DrawError> {
        let tree = TreeNode::from_json_str(json)?;
        Ok(self.draw(container, &tree))
    }

    /// Draw `tree` into the container registered under `key`.
    pub fn draw_in(
        &self,
        document: &mut Document,
        key: &str,
        tree: &TreeNode,
    ) -> Result<DrawOutcome, DrawError> {
        let container = document.container_mut(key)?;
        Ok(self.draw(container, tree))
    }
}
