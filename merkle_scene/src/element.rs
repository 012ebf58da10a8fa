// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained element tree backing the drawing surface.
//!
//! Elements mirror the markup they serialize to: a tag name, ordered attributes, optional
//! text content, and ordered children. Equality is structural, which is what makes
//! redraws comparable.

use core::fmt::Display;

/// One element of the drawing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, builder style.
    #[must_use]
    pub fn with_attr(mut self, key: &'static str, value: impl Display) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set text content, builder style.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Attribute value, if set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set or overwrite an attribute. New attributes keep insertion order.
    pub fn set_attr(&mut self, key: &'static str, value: impl Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Remove an attribute, returning its old value.
    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(k, _)| *k == key)?;
        Some(self.attrs.remove(pos).1)
    }

    /// All attributes in order.
    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attrs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Text content.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Children in document order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Append a child.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns true if the whitespace-separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }

    /// This element and all of its descendants, in document (pre-)order.
    pub fn descendants(&self) -> impl Iterator<Item = &Self> + '_ {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }

    /// Serialize to markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    /// Append markup for this element to `out`.
    pub fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (k, v) in &self.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            escape_into(v, out);
            out.push('"');
        }
        if self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            escape_into(text, out);
        }
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
