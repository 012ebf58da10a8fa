// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan, zoom, and hover on a drawn graph.
//!
//! This example draws a small tree, hovers a leaf to light up its path to the root,
//! then pans and zooms. Only the zoom group's transform changes; hit testing follows it.
//!
//! Run:
//! - `cargo run -p merkle_demos --example pan_zoom_hover`

use kurbo::{Point, Vec2};
use merkle_layout::TreeNode;
use merkle_scene::{Container, Drawing, GraphConfig, GraphView};

fn main() {
    let tree = TreeNode::leaf("9f86d081884c7d659a2feaa0c55ad015")
        .with_child(
            TreeNode::leaf("3e23e8160039594a")
                .with_child(TreeNode::leaf("a"))
                .with_child(TreeNode::leaf("b")),
        )
        .with_child(TreeNode::leaf("2e7d2c03a9507ae2").with_child(TreeNode::leaf("c")));

    let view = GraphView::new(GraphConfig::default());
    let mut holder = Container::new("merkle_graph_holder", 900.0);
    let outcome = view.draw(&mut holder, &tree);
    println!("outcome: {outcome:?}");

    let Some(drawing) = holder.drawing_mut() else {
        return;
    };

    // Leaves "a" and "b" sit two levels deep; "a" is the topmost.
    let anchor = drawing.anchor();
    let probe = |d: &Drawing, p: Point| {
        d.node_at(p)
            .map(|i| d.node_groups()[i].children()[2].text().unwrap_or_default().to_owned())
    };
    let a = Point::new(anchor.x + 2.0 * 202.0, anchor.y - 62.5);
    println!("under {a:?}: {:?}", probe(&*drawing, a));

    for event in drawing.hover_at(a) {
        println!("hover: {event:?}");
    }
    for (i, g) in drawing.node_groups().iter().enumerate() {
        println!("  node {i}: class=\"{}\"", g.attr("class").unwrap_or_default());
    }

    drawing.pan_by(Vec2::new(-120.0, 30.0));
    drawing.zoom_at(Point::new(450.0, 225.0), 1.5);
    println!(
        "zoom transform: {}",
        drawing.zoom_group().attr("transform").unwrap_or_default()
    );

    // The same node, seen through the new transform.
    let moved = drawing.zoom().apply(a);
    println!("under {moved:?}: {:?}", probe(&*drawing, moved));

    for event in drawing.clear_hover() {
        println!("hover: {event:?}");
    }
    drawing.reset_zoom();
    println!("after reset: {}", drawing.zoom());
}
