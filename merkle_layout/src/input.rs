// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry-boundary validation for trees arriving as JSON.
//!
//! Typed callers construct [`TreeNode`] directly and never hit these errors. Trees that
//! come from an untyped source (a serialized program, a file, a message) are checked once
//! here, so layout and rendering can assume a well-formed tree.

use core::ops::Range;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::TreeNode;

/// A tree document was rejected at the entry boundary.
///
/// `path` locates the offending node, for example `$.children[1].children[0]`.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The document is not valid JSON.
    #[error("tree is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A node is not a JSON object.
    #[error("tree node at `{path}` is not an object")]
    NotAnObject {
        /// Location of the node.
        path: String,
    },
    /// A node has no `text` field.
    #[error("tree node at `{path}` has no `text` field")]
    MissingText {
        /// Location of the node.
        path: String,
    },
    /// A node's `text` field is not a string.
    #[error("tree node at `{path}` has a `text` field that is not a string")]
    InvalidText {
        /// Location of the node.
        path: String,
    },
    /// A node's `children` field is present but not an array.
    #[error("tree node at `{path}` has a `children` field that is not a sequence")]
    InvalidChildren {
        /// Location of the node.
        path: String,
    },
}

impl TreeError {
    /// Location of the offending node, if the error concerns a single node.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::NotAnObject { path }
            | Self::MissingText { path }
            | Self::InvalidText { path }
            | Self::InvalidChildren { path } => Some(path),
        }
    }
}

impl TreeNode {
    /// Parse and validate a JSON tree document.
    ///
    /// Each node must be an object with a string `text`. `children` is optional and,
    /// when present, must be an array of nodes.
    ///
    /// ```
    /// use merkle_layout::TreeNode;
    ///
    /// let t = TreeNode::from_json_str(r#"{"text": "root", "children": [{"text": "a"}]}"#).unwrap();
    /// assert_eq!(t.children[0].text, "a");
    ///
    /// let err = TreeNode::from_json_str(r#"{"text": "root", "children": [{"txt": "a"}]}"#).unwrap_err();
    /// assert_eq!(err.path(), Some("$.children[0]"));
    /// ```
    ///
    /// Every tree level nests two JSON values (the node object and its `children` array), so
    /// the parser runs without a recursion limit and grows its stack on demand.
    pub fn from_json_str(json: &str) -> Result<Self, TreeError> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        let tree = Self::from_json_value(&value);
        dismantle(value);
        tree
    }

    /// Validate an already-parsed JSON value and convert it into a tree.
    ///
    /// Works level by level with an explicit queue; nesting depth is bounded only by the
    /// JSON parser.
    pub fn from_json_value(value: &Value) -> Result<Self, TreeError> {
        // (parent, position among siblings) for every queued value.
        let mut origins: Vec<(Option<usize>, usize)> = vec![(None, 0)];
        let mut values: Vec<&Value> = vec![value];
        let mut texts: Vec<&str> = Vec::new();
        let mut children: Vec<Range<usize>> = Vec::new();

        let mut head = 0;
        while head < values.len() {
            let current: &Value = values[head];
            let obj = current.as_object().ok_or_else(|| TreeError::NotAnObject {
                path: path_of(&origins, head),
            })?;
            let text = match obj.get("text") {
                None => {
                    return Err(TreeError::MissingText {
                        path: path_of(&origins, head),
                    });
                }
                Some(Value::String(s)) => s.as_str(),
                Some(_) => {
                    return Err(TreeError::InvalidText {
                        path: path_of(&origins, head),
                    });
                }
            };
            let kids: &[Value] = match obj.get("children") {
                None => &[],
                Some(Value::Array(items)) => items.as_slice(),
                Some(_) => {
                    return Err(TreeError::InvalidChildren {
                        path: path_of(&origins, head),
                    });
                }
            };
            let first = values.len();
            values.extend(kids.iter());
            origins.extend((0..kids.len()).map(|pos| (Some(head), pos)));
            texts.push(text);
            children.push(first..values.len());
            head += 1;
        }

        // Children have higher indices than their parent, so build back to front.
        let mut built: Vec<Option<Self>> = vec![None; values.len()];
        for i in (0..values.len()).rev() {
            let kids = children[i]
                .clone()
                .filter_map(|c| built[c].take())
                .collect();
            built[i] = Some(Self::new(texts[i], kids));
        }
        Ok(built.swap_remove(0).unwrap_or_default())
    }
}

/// Drop a parsed document without recursing into its nesting.
fn dismantle(value: Value) {
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

/// JSONPath-like locator for a queued value.
fn path_of(origins: &[(Option<usize>, usize)], mut index: usize) -> String {
    let mut positions = Vec::new();
    while let (Some(parent), pos) = origins[index] {
        positions.push(pos);
        index = parent;
    }
    let mut path = String::from("$");
    for pos in positions.into_iter().rev() {
        path.push_str(&format!(".children[{pos}]"));
    }
    path
}
