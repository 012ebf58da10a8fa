// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over root→node paths.
//!
//! Hovering a node highlights its whole path back to the root, which is what a reader of a
//! Merkle tree usually wants: the chain of hashes that commits to the hovered one.
//!
//! ## Minimal example
//!
//! ```
//! use merkle_scene::hover::{HoverEvent, HoverState};
//!
//! let mut h: HoverState<usize> = HoverState::new();
//! assert_eq!(h.update_path(&[0, 2]), vec![HoverEvent::Enter(0), HoverEvent::Enter(2)]);
//! assert_eq!(h.update_path(&[0, 1]), vec![HoverEvent::Leave(2), HoverEvent::Enter(1)]);
//! ```

bitflags::bitflags! {
    /// Per-node hover state, reflected in the node group's `class` attribute.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node lies on the path from the root to the hovered node (inclusive).
        const ON_PATH = 0b0000_0001;
        /// Node is the one under the pointer.
        const HOVERED = 0b0000_0010;
    }
}

impl NodeFlags {
    /// Value for the node group's `class` attribute.
    pub fn class_attr(self) -> &'static str {
        match (self.contains(Self::ON_PATH), self.contains(Self::HOVERED)) {
            (false, false) => "node",
            (true, false) => "node on-path",
            (false, true) => "node hovered",
            (true, true) => "node on-path hovered",
        }
    }
}

/// Hover path state machine.
///
/// Holds the current root→node path. Updating it with a new path yields the minimal set of
/// transitions: leaves from the innermost node outwards, then enters from the outermost node
/// inwards. Nodes shared by both paths produce no event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Node joined the hovered path.
    Enter(K),
    /// Node left the hovered path.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Current root→node path; empty when nothing is hovered.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Innermost hovered node.
    pub fn target(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Drop the hover, leaving every node innermost first.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().rev().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Move the hover to `path` and return the transitions.
    pub fn update_path(&mut self, path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .current
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<_> = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(path[shared..].iter().map(|&k| HoverEvent::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(path);
        out
    }
}
