// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size guard: refuse to lay out trees too large to be useful on screen.

use crate::types::TreeNode;

/// Node count above which a tree is not drawn.
pub const DEFAULT_NODE_LIMIT: usize = 1200;

/// Outcome of [`guard`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    /// The tree fits; continue with layout.
    Proceed {
        /// Total number of nodes, root included.
        node_count: usize,
    },
    /// The tree exceeds the limit; show a notice instead of a drawing.
    Overflow {
        /// Total number of nodes, root included.
        node_count: usize,
    },
}

impl Guard {
    /// Number of nodes counted.
    pub fn node_count(self) -> usize {
        match self {
            Self::Proceed { node_count } | Self::Overflow { node_count } => node_count,
        }
    }

    /// Returns true for [`Guard::Overflow`].
    pub fn is_overflow(self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Text shown in place of the drawing, if any.
    pub fn notice(self) -> Option<String> {
        match self {
            Self::Proceed { .. } => None,
            Self::Overflow { node_count } => Some(overflow_message(node_count)),
        }
    }
}

/// Count `root` and all of its descendants.
///
/// Uses an explicit stack, so arbitrarily deep chains are fine.
pub fn count_nodes(root: &TreeNode) -> usize {
    let mut count = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

/// Compare the size of `root` against `limit`.
///
/// A tree with exactly `limit` nodes proceeds; `limit + 1` overflows.
pub fn guard(root: &TreeNode, limit: usize) -> Guard {
    let node_count = count_nodes(root);
    if node_count > limit {
        Guard::Overflow { node_count }
    } else {
        Guard::Proceed { node_count }
    }
}

/// Diagnostic text for an oversize tree.
pub fn overflow_message(node_count: usize) -> String {
    format!("Too many nodes to display graph. Node count: {node_count}")
}
