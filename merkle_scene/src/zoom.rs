// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom transform applied to the whole graph group.

use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Uniform scale followed by a translation: `p ↦ p * k + (x, y)`.
///
/// Displays as `translate(x,y) scale(k)`, the form written to the zoom group's `transform`
/// attribute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Scale factor, always positive.
    pub k: f64,
}

impl ZoomTransform {
    /// No pan, unit scale.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    /// Create a transform; `None` unless all components are finite and `k > 0`.
    pub fn new(x: f64, y: f64, k: f64) -> Option<Self> {
        let t = Self { x, y, k };
        t.is_valid().then_some(t)
    }

    /// Returns true if all components are finite and `k > 0`.
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.k.is_finite() && self.k > 0.0
    }

    /// Pan by `delta` surface units.
    pub fn translated(self, delta: Vec2) -> Option<Self> {
        Self::new(self.x + delta.x, self.y + delta.y, self.k)
    }

    /// Multiply the scale by `factor`, keeping the surface point `focus` fixed.
    pub fn scaled_about(self, focus: Point, factor: f64) -> Option<Self> {
        let k = self.k * factor;
        Self::new(
            focus.x - (focus.x - self.x) * factor,
            focus.y - (focus.y - self.y) * factor,
            k,
        )
    }

    /// Map a graph-space point onto the surface.
    pub fn apply(self, p: Point) -> Point {
        Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
    }

    /// Map a surface point back into graph space.
    pub fn invert(self, p: Point) -> Point {
        Point::new((p.x - self.x) / self.k, (p.y - self.y) / self.k)
    }

    /// As a Kurbo affine.
    pub fn to_affine(self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y)) * Affine::scale(self.k)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", self.x, self.y, self.k)
    }
}
