// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containers that host a drawing, and the document that owns them.

use std::collections::BTreeMap;

use tracing::trace;

use crate::element::Element;
use crate::error::DrawError;
use crate::render::Drawing;

/// The element a graph is drawn into.
///
/// A container has a stable key, a client width supplied by its host, and a height written
/// by the renderer. Its content is owned by the engine and fully replaced on every draw.
#[derive(Clone, Debug)]
pub struct Container {
    key: String,
    client_width: f64,
    height: Option<f64>,
    drawing: Option<Drawing>,
    notice: Option<Element>,
}

impl Container {
    /// Create an empty container.
    pub fn new(key: impl Into<String>, client_width: f64) -> Self {
        Self {
            key: key.into(),
            client_width,
            height: None,
            drawing: None,
            notice: None,
        }
    }

    /// Lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current rendered width.
    pub fn client_width(&self) -> f64 {
        self.client_width
    }

    /// Record a new rendered width. Takes effect on the next draw.
    pub fn set_client_width(&mut self, width: f64) {
        self.client_width = width;
    }

    /// Height set by the last draw, if any.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// The current drawing, if the last draw produced one.
    pub fn drawing(&self) -> Option<&Drawing> {
        self.drawing.as_ref()
    }

    /// Mutable access for pan/zoom and hover.
    pub fn drawing_mut(&mut self) -> Option<&mut Drawing> {
        self.drawing.as_mut()
    }

    /// Text of the overflow notice, if the last draw produced one.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().and_then(Element::text)
    }

    /// Returns true if the container holds neither a drawing nor a notice.
    pub fn is_empty(&self) -> bool {
        self.drawing.is_none() && self.notice.is_none()
    }

    /// Remove any previous content. Returns true if something was removed.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.is_empty();
        if had_content {
            trace!(key = %self.key, "removing previous graph content");
        }
        self.drawing = None;
        self.notice = None;
        had_content
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.height = Some(height);
    }

    pub(crate) fn install_drawing(&mut self, drawing: Drawing) -> &mut Drawing {
        self.clear();
        self.drawing.insert(drawing)
    }

    pub(crate) fn install_notice(&mut self, text: String) {
        self.clear();
        self.notice = Some(
            Element::new("p")
                .with_attr("class", "graph-overflow")
                .with_text(text),
        );
    }

    /// Serialize the container and its content.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let mut holder = Element::new("div").with_attr("id", &self.key);
        if let Some(h) = self.height {
            holder.set_attr("style", format!("height: {h}px"));
        }
        let inner = self
            .drawing
            .as_ref()
            .map(Drawing::svg)
            .or(self.notice.as_ref());
        if let Some(inner) = inner {
            holder.push(inner.clone());
        }
        holder.write_markup(&mut out);
        out
    }
}

/// Containers indexed by key.
///
/// Hosts create containers up front and hand the document to draw calls; the engine never
/// creates containers on its own.
#[derive(Clone, Debug, Default)]
pub struct Document {
    containers: BTreeMap<String, Container>,
}

impl Document {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container, replacing any container with the same key.
    pub fn insert(&mut self, container: Container) -> Option<Container> {
        self.containers.insert(container.key.clone(), container)
    }

    /// Unregister a container.
    pub fn remove(&mut self, key: &str) -> Option<Container> {
        self.containers.remove(key)
    }

    /// Look up a container.
    pub fn container(&self, key: &str) -> Option<&Container> {
        self.containers.get(key)
    }

    /// Look up a container for drawing.
    pub fn container_mut(&mut self, key: &str) -> Result<&mut Container, DrawError> {
        self.containers
            .get_mut(key)
            .ok_or_else(|| DrawError::MissingContainer { key: key.into() })
    }
}
