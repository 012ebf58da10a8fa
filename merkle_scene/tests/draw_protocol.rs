// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end draws: guard, layout, render, and the container they leave behind.

use kurbo::{Point, Vec2};
use merkle_layout::{Orientation, TreeNode};
use merkle_scene::{
    Container, Document, DrawError, DrawOutcome, Element, GraphConfig, GraphView, ZoomTransform,
};

const SAMPLE: &str = r#"{
    "text": "root",
    "children": [
        { "text": "a" },
        { "text": "b", "children": [ { "text": "c", "children": [] } ] }
    ]
}"#;

fn chain(len: usize) -> TreeNode {
    let mut node = TreeNode::leaf(format!("n{}", len - 1));
    for i in (0..len - 1).rev() {
        node = TreeNode::new(format!("n{i}"), vec![node]);
    }
    node
}

/// JSON document for a chain of `len` nodes.
fn chain_json(len: usize) -> String {
    let mut json = String::new();
    for i in 0..len - 1 {
        json.push_str(&format!(r#"{{"text": "n{i}", "children": ["#));
    }
    json.push_str(&format!(r#"{{"text": "n{}"}}"#, len - 1));
    json.push_str(&"]}".repeat(len - 1));
    json
}

fn count(root: &Element, name: &str) -> usize {
    root.descendants().filter(|e| e.name() == name).count()
}

#[test]
fn sample_document_draws_four_nodes_three_links() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 960.0);
    let outcome = view.draw_json(&mut holder, SAMPLE).unwrap();
    assert_eq!(
        outcome,
        DrawOutcome::Drawn {
            node_count: 4,
            link_count: 3
        }
    );

    let svg = holder.drawing().unwrap().svg();
    assert_eq!(count(svg, "path"), 3);
    assert_eq!(count(svg, "rect"), 4);
    assert_eq!(count(svg, "text"), 8);
    assert_eq!(svg.descendants().filter(|e| e.has_class("zoom")).count(), 1);
    assert_eq!(holder.height(), Some(480.0));
}

#[test]
fn redraw_is_structurally_identical() {
    let tree = TreeNode::from_json_str(SAMPLE).unwrap();
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 700.0);

    view.draw(&mut holder, &tree);
    let first = holder.drawing().unwrap().svg().clone();
    view.draw(&mut holder, &tree);
    assert_eq!(holder.drawing().unwrap().svg(), &first);
}

#[test]
fn redraw_resets_pan_zoom_and_hover() {
    let tree = TreeNode::from_json_str(SAMPLE).unwrap();
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 700.0);
    view.draw(&mut holder, &tree);
    let pristine = holder.drawing().unwrap().svg().clone();

    let drawing = holder.drawing_mut().unwrap();
    drawing.zoom_at(Point::new(100.0, 100.0), 1.5);
    let root = drawing.anchor();
    drawing.hover_at(root);
    assert_ne!(drawing.svg(), &pristine);

    view.draw(&mut holder, &tree);
    let drawing = holder.drawing().unwrap();
    assert_eq!(drawing.zoom(), ZoomTransform::IDENTITY);
    assert_eq!(drawing.hovered(), None);
    assert_eq!(drawing.svg(), &pristine);
}

#[test]
fn over_limit_chain_leaves_only_the_notice() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    view.draw(&mut holder, &TreeNode::leaf("earlier"));
    assert!(holder.drawing().is_some());

    let outcome = view.draw(&mut holder, &chain(1201));
    assert_eq!(outcome, DrawOutcome::Overflow { node_count: 1201 });
    assert!(holder.drawing().is_none());
    assert_eq!(
        holder.notice(),
        Some("Too many nodes to display graph. Node count: 1201")
    );
    let markup = holder.to_markup();
    assert!(!markup.contains("<svg"));
    assert!(!markup.contains("<rect"));
}

#[test]
fn chain_at_limit_is_drawn() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    let outcome = view.draw(&mut holder, &chain(1200));
    assert_eq!(
        outcome,
        DrawOutcome::Drawn {
            node_count: 1200,
            link_count: 1199
        }
    );
    assert_eq!(holder.notice(), None);
}

#[test]
fn deep_json_chains_are_drawn_or_guarded() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);

    let outcome = view.draw_json(&mut holder, &chain_json(100)).unwrap();
    assert_eq!(
        outcome,
        DrawOutcome::Drawn {
            node_count: 100,
            link_count: 99
        }
    );

    let outcome = view.draw_json(&mut holder, &chain_json(1201)).unwrap();
    assert_eq!(outcome, DrawOutcome::Overflow { node_count: 1201 });
    assert_eq!(
        holder.notice(),
        Some("Too many nodes to display graph. Node count: 1201")
    );
}

#[test]
fn long_labels_are_shortened_but_kept_in_full() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    view.draw(&mut holder, &TreeNode::leaf("0123456789012345678"));

    let svg = holder.drawing().unwrap().svg();
    let main = svg.descendants().find(|e| e.has_class("node-main-text")).unwrap();
    let full = svg.descendants().find(|e| e.has_class("node-full-text")).unwrap();
    assert_eq!(main.text(), Some("01234567890123.."));
    assert_eq!(full.text(), Some("0123456789012345678"));
}

#[test]
fn pan_zoom_only_overwrites_one_transform() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    view.draw_json(&mut holder, SAMPLE).unwrap();
    let before = holder.drawing().unwrap().svg().clone();

    let drawing = holder.drawing_mut().unwrap();
    drawing.pan_by(Vec2::new(-30.0, 12.0));
    drawing.zoom_at(Point::new(0.0, 0.0), 0.5);

    let changed: Vec<_> = before
        .descendants()
        .zip(drawing.svg().descendants())
        .filter(|(a, b)| a != b && a.children() == b.children())
        .map(|(a, _)| a.attr("class").unwrap_or_default().to_owned())
        .collect();
    assert_eq!(changed, ["zoom"]);
    assert_eq!(
        drawing.zoom_group().attr("transform"),
        Some("translate(-15,6) scale(0.5)")
    );
}

#[test]
fn resize_recenters_the_root() {
    let tree = TreeNode::from_json_str(SAMPLE).unwrap();
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    view.draw(&mut holder, &tree);
    assert_eq!(holder.drawing().unwrap().anchor(), Point::new(162.0, 200.0));

    holder.set_client_width(500.0);
    view.draw(&mut holder, &tree);
    assert_eq!(holder.height(), Some(250.0));
    assert_eq!(holder.drawing().unwrap().anchor(), Point::new(162.0, 125.0));
}

#[test]
fn vertical_orientation_anchors_at_top_center() {
    let tree = TreeNode::from_json_str(SAMPLE).unwrap();
    let view = GraphView::new(GraphConfig::default().with_orientation(Orientation::Vertical));
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    view.draw(&mut holder, &tree);
    let drawing = holder.drawing_mut().unwrap();
    assert_eq!(drawing.anchor(), Point::new(400.0, 40.0));
    assert_eq!(drawing.node_at(Point::new(400.0, 40.0)), Some(0));
}

#[test]
fn hover_reveals_path_to_root() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    view.draw_json(&mut holder, SAMPLE).unwrap();
    let drawing = holder.drawing_mut().unwrap();

    let a = drawing.anchor() + Vec2::new(202.0, -25.0);
    drawing.hover_at(a);
    let on_path: Vec<_> = drawing
        .node_groups()
        .iter()
        .map(|g| g.has_class("on-path"))
        .collect();
    assert_eq!(on_path, [true, true, false, false]);
    assert!(drawing.node_groups()[1].has_class("hovered"));

    // Empty space clears everything.
    drawing.hover_at(Point::new(-500.0, -500.0));
    assert!(drawing.node_groups().iter().all(|g| g.attr("class") == Some("node")));
}

#[test]
fn missing_container_is_reported_by_key() {
    let view = GraphView::default();
    let mut doc = Document::new();
    doc.insert(Container::new("other", 300.0));
    let err = view
        .draw_in(&mut doc, "merkle_graph_holder", &TreeNode::leaf("x"))
        .unwrap_err();
    assert!(matches!(err, DrawError::MissingContainer { ref key } if key == "merkle_graph_holder"));
    assert!(doc.container("other").unwrap().is_empty());
}

#[test]
fn malformed_documents_are_rejected_with_a_location() {
    let view = GraphView::default();
    let mut holder = Container::new("merkle_graph_holder", 800.0);
    let cases = [
        r#"{"children": []}"#,
        r#"{"text": "r", "children": {"text": "x"}}"#,
        r#"{"text": "r", "children": [{"text": "a"}, {"text": 7}]}"#,
        r#"{"text": "r", "children": null}"#,
        "[1, 2, 3]",
        "{ not json",
    ];
    for json in cases {
        let err = view.draw_json(&mut holder, json).unwrap_err();
        assert!(matches!(err, DrawError::MalformedTree(_)), "{json}");
    }
    assert!(holder.is_empty());

    let err = view
        .draw_json(
            &mut holder,
            r#"{"text": "r", "children": [{"text": "a"}, {"text": 7}]}"#,
        )
        .unwrap_err();
    match err {
        DrawError::MalformedTree(e) => assert_eq!(e.path(), Some("$.children[1]")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn markup_is_well_formed_svg() {
    let config = GraphConfig {
        embed_stylesheet: true,
        ..GraphConfig::default()
    };
    let view = GraphView::new(config);
    let mut holder = Container::new("merkle_graph_holder", 640.0);
    view.draw(&mut holder, &TreeNode::leaf("a<b>&\"c\""));
    let markup = holder.to_markup();
    assert!(markup.starts_with(
        "<div id=\"merkle_graph_holder\" style=\"height: 320px\"><svg xmlns=\"http://www.w3.org/2000/svg\" width=\"640\" height=\"320\"><style>"
    ));
    assert!(markup.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
    assert!(markup.ends_with("</svg></div>"));
}
