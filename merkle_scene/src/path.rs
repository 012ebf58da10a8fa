// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elbow connectors between a parent and a child.

use kurbo::{BezPath, Point};
use merkle_layout::Orientation;

/// Right-angled connector from `source` to `target`.
///
/// The path runs along the depth axis to the depth midpoint, across along the breadth axis to
/// the target's breadth, then along the depth axis into the target:
///
/// ```text
/// source ──┐
///          │
///          └── target
/// ```
///
/// The midpoint is `(depth(source) + depth(target)) / 2`.
pub fn elbow_path(source: Point, target: Point, orientation: Orientation) -> BezPath {
    let mid = (orientation.depth_of(source) + orientation.depth_of(target)) / 2.0;
    let mut path = BezPath::new();
    path.move_to(source);
    path.line_to(orientation.point(orientation.breadth_of(source), mid));
    path.line_to(orientation.point(orientation.breadth_of(target), mid));
    path.line_to(target);
    path
}
