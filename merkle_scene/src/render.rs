// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer: turns a [`TreeLayout`] into a drawing inside a [`Container`].

use kurbo::{Affine, Point, Rect, RoundedRect, Shape, Size, Vec2};
use merkle_layout::{Orientation, TreeLayout};
use tracing::debug;

use crate::config::GraphConfig;
use crate::container::Container;
use crate::element::Element;
use crate::hover::{HoverEvent, HoverState, NodeFlags};
use crate::label::main_label;
use crate::path::elbow_path;
use crate::zoom::ZoomTransform;

/// Namespace written on the root `<svg>` element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Stylesheet embedded when [`GraphConfig::embed_stylesheet`] is set.
pub const STYLESHEET: &str = "\
.link{fill:none;stroke:#8a8a8a;stroke-width:1.5px}\
.node-rect{fill:#fff;stroke:#333;stroke-width:1px}\
.node text{font-family:monospace;font-size:12px}\
.node-full-text{visibility:hidden}\
.node:hover .node-full-text,.node.hovered .node-full-text{visibility:visible}\
.node:hover .node-main-text,.node.hovered .node-main-text{visibility:hidden}\
.node.on-path .node-rect{stroke:#e07b00;stroke-width:2px}";

/// Hit-test data kept per node.
#[derive(Copy, Clone, Debug)]
struct NodeSite {
    center: Point,
    parent: Option<usize>,
}

/// A rendered graph.
///
/// Element structure:
///
/// ```text
/// svg (width, height)
/// ├── style                       only with `embed_stylesheet`
/// └── g.zoom                      pan/zoom transform
///     └── g.graph                 anchor transform
///         ├── path.link …         one per link, level order
///         └── g.node …            one per node, level order
///             ├── rect.node-rect
///             ├── text.node-main-text
///             └── text.node-full-text
/// ```
///
/// Pan/zoom and hover only rewrite attributes; they never touch the layout.
#[derive(Clone, Debug)]
pub struct Drawing {
    svg: Element,
    zoom_slot: usize,
    size: Size,
    footprint: Size,
    corner_radius: f64,
    anchor: Point,
    zoom: ZoomTransform,
    link_count: usize,
    sites: Vec<NodeSite>,
    flags: Vec<NodeFlags>,
    hover: HoverState<usize>,
}

/// Draw `layout` into `container`, replacing whatever it held before.
///
/// The surface is as wide as the container's client width and half as tall; the height is
/// written back to the container. The layout origin (the root) is anchored at
/// `(footprint width, height / 2)` for horizontal layouts and `(width / 2, footprint height)`
/// for vertical ones.
pub fn render<'c>(
    container: &'c mut Container,
    layout: &TreeLayout<'_>,
    config: &GraphConfig,
) -> &'c mut Drawing {
    let raw = container.client_width();
    let width = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
    let size = Size::new(width, width / 2.0);
    container.set_height(size.height);
    let drawing = Drawing::build(layout, config, size);
    debug!(
        key = container.key(),
        nodes = layout.len(),
        links = layout.links().len(),
        width = size.width,
        height = size.height,
        "rendered merkle graph"
    );
    container.install_drawing(drawing)
}

impl Drawing {
    fn build(layout: &TreeLayout<'_>, config: &GraphConfig, size: Size) -> Self {
        let orientation = layout.orientation();
        let footprint = config.footprint.size();
        let anchor = match orientation {
            Orientation::Horizontal => Point::new(footprint.width, size.height / 2.0),
            Orientation::Vertical => Point::new(size.width / 2.0, footprint.height),
        };

        let mut graph = Element::new("g")
            .with_attr("class", "graph")
            .with_attr("transform", format!("translate({}, {})", anchor.x, anchor.y));

        for &link in layout.links() {
            let (source, target) = layout.endpoints(link);
            let d = elbow_path(source.point(), target.point(), orientation).to_svg();
            graph.push(Element::new("path").with_attr("class", "link").with_attr("d", d));
        }

        let offset = format!(
            "translate({}, {})",
            -footprint.width / 2.0,
            -footprint.height / 2.0
        );
        for node in layout.nodes() {
            let label = |class: &'static str, text: &str| {
                Element::new("text")
                    .with_attr("x", node.x)
                    .with_attr("y", node.y)
                    .with_attr("text-anchor", "middle")
                    .with_attr("dominant-baseline", "middle")
                    .with_attr("class", class)
                    .with_text(text)
            };
            let rect = Element::new("rect")
                .with_attr("x", node.x)
                .with_attr("y", node.y)
                .with_attr("rx", config.corner_radius)
                .with_attr("ry", config.corner_radius)
                .with_attr("width", footprint.width)
                .with_attr("height", footprint.height)
                .with_attr("transform", &offset)
                .with_attr("class", "node-rect");
            graph.push(
                Element::new("g")
                    .with_attr("class", NodeFlags::empty().class_attr())
                    .with_child(rect)
                    .with_child(label(
                        "node-main-text",
                        &main_label(node.text(), &config.labels),
                    ))
                    .with_child(label("node-full-text", node.text())),
            );
        }

        let mut svg = Element::new("svg")
            .with_attr("xmlns", SVG_NS)
            .with_attr("width", size.width)
            .with_attr("height", size.height);
        if config.embed_stylesheet {
            svg.push(Element::new("style").with_text(STYLESHEET));
        }
        let zoom_slot = svg.children().len();
        svg.push(
            Element::new("g")
                .with_attr("class", "zoom")
                .with_attr("transform", ZoomTransform::IDENTITY)
                .with_child(graph),
        );

        Self {
            svg,
            zoom_slot,
            size,
            footprint,
            corner_radius: config.corner_radius,
            anchor,
            zoom: ZoomTransform::IDENTITY,
            link_count: layout.links().len(),
            sites: layout
                .nodes()
                .iter()
                .map(|n| NodeSite {
                    center: n.point(),
                    parent: n.parent,
                })
                .collect(),
            flags: vec![NodeFlags::empty(); layout.len()],
            hover: HoverState::new(),
        }
    }

    /// Root `<svg>` element.
    pub fn svg(&self) -> &Element {
        &self.svg
    }

    /// Serialize the drawing.
    pub fn to_markup(&self) -> String {
        self.svg.to_markup()
    }

    /// Surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Where the root is anchored on the surface before pan/zoom.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Number of node groups.
    pub fn node_count(&self) -> usize {
        self.sites.len()
    }

    /// Number of link paths.
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// The group carrying the pan/zoom transform.
    pub fn zoom_group(&self) -> &Element {
        &self.svg.children()[self.zoom_slot]
    }

    fn graph_group(&self) -> &Element {
        &self.zoom_group().children()[0]
    }

    fn graph_group_mut(&mut self) -> &mut Element {
        &mut self.svg.children_mut()[self.zoom_slot].children_mut()[0]
    }

    /// Link paths, level order.
    pub fn link_paths(&self) -> &[Element] {
        &self.graph_group().children()[..self.link_count]
    }

    /// Node groups, level order.
    pub fn node_groups(&self) -> &[Element] {
        &self.graph_group().children()[self.link_count..]
    }

    /// Current pan/zoom transform.
    pub fn zoom(&self) -> ZoomTransform {
        self.zoom
    }

    /// Overwrite the pan/zoom transform. Invalid transforms are ignored; returns whether the
    /// transform was applied.
    pub fn set_zoom(&mut self, zoom: ZoomTransform) -> bool {
        if !zoom.is_valid() {
            return false;
        }
        self.zoom = zoom;
        let slot = self.zoom_slot;
        self.svg.children_mut()[slot].set_attr("transform", zoom);
        true
    }

    /// Pan by `delta` surface units.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.zoom
            .translated(delta)
            .is_some_and(|z| self.set_zoom(z))
    }

    /// Scale by `factor` around the surface point `focus`.
    pub fn zoom_at(&mut self, focus: Point, factor: f64) -> bool {
        self.zoom
            .scaled_about(focus, factor)
            .is_some_and(|z| self.set_zoom(z))
    }

    /// Back to the initial view.
    pub fn reset_zoom(&mut self) {
        self.set_zoom(ZoomTransform::IDENTITY);
    }

    /// Surface → layout space.
    fn surface_to_layout(&self) -> Affine {
        (self.zoom.to_affine() * Affine::translate(self.anchor.to_vec2())).inverse()
    }

    /// Node whose rounded rectangle contains the surface point `p`.
    ///
    /// Nodes never overlap, but if they did the one drawn last would win.
    pub fn node_at(&self, p: Point) -> Option<usize> {
        let local = self.surface_to_layout() * p;
        self.sites.iter().rposition(|site| {
            let rect = Rect::from_center_size(site.center, self.footprint);
            RoundedRect::from_rect(rect, self.corner_radius).contains(local)
        })
    }

    /// Current hover flags of a node.
    pub fn node_flags(&self, index: usize) -> NodeFlags {
        self.flags[index]
    }

    /// Hovered node, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.target()
    }

    /// Move the hover to whatever node lies under the surface point `p`.
    ///
    /// The hovered node and its ancestors are marked `on-path`; the hovered node is also
    /// marked `hovered`. Returns the transitions that were applied.
    pub fn hover_at(&mut self, p: Point) -> Vec<HoverEvent<usize>> {
        let path = self.node_at(p).map(|i| self.path_to_root(i)).unwrap_or_default();
        let previous = self.hover.target();
        let events = self.hover.update_path(&path);
        self.apply_hover(&events, previous);
        events
    }

    /// Remove every hover mark.
    pub fn clear_hover(&mut self) -> Vec<HoverEvent<usize>> {
        let previous = self.hover.target();
        let events = self.hover.clear();
        self.apply_hover(&events, previous);
        events
    }

    fn path_to_root(&self, mut index: usize) -> Vec<usize> {
        let mut path = vec![index];
        while let Some(parent) = self.sites[index].parent {
            path.push(parent);
            index = parent;
        }
        path.reverse();
        path
    }

    fn apply_hover(&mut self, events: &[HoverEvent<usize>], previous: Option<usize>) {
        let mut touched = Vec::with_capacity(events.len() + 2);
        for event in events {
            match *event {
                HoverEvent::Enter(i) => self.flags[i].insert(NodeFlags::ON_PATH),
                HoverEvent::Leave(i) => self.flags[i].remove(NodeFlags::ON_PATH),
            }
            touched.push(match *event {
                HoverEvent::Enter(i) | HoverEvent::Leave(i) => i,
            });
        }
        let current = self.hover.target();
        if previous != current {
            if let Some(i) = previous {
                self.flags[i].remove(NodeFlags::HOVERED);
                touched.push(i);
            }
            if let Some(i) = current {
                self.flags[i].insert(NodeFlags::HOVERED);
                touched.push(i);
            }
        }

        let first_node = self.link_count;
        for i in touched {
            let class = self.flags[i].class_attr();
            self.graph_group_mut().children_mut()[first_node + i].set_attr("class", class);
        }
    }
}
