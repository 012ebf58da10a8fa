// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use merkle_layout::{NodeGap, Orientation, TreeNode, count_nodes, layout};
use merkle_scene::{Container, GraphConfig, GraphView};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// Perfect binary tree with `levels` levels, labeled like hex digests.
fn binary_tree(levels: u32, rng: &mut Rng) -> TreeNode {
    let mut row: Vec<TreeNode> = (0..1_usize << (levels - 1))
        .map(|_| TreeNode::leaf(format!("{:016x}{:016x}", rng.next_u64(), rng.next_u64())))
        .collect();
    while row.len() > 1 {
        row = row
            .chunks(2)
            .map(|pair| TreeNode::new(format!("{:016x}", rng.next_u64()), pair.to_vec()))
            .collect();
    }
    row.pop().unwrap_or_default()
}

/// Ragged tree: each node gets 0..=fanout children until `budget` nodes exist.
fn ragged_tree(budget: usize, fanout: u64, rng: &mut Rng) -> TreeNode {
    let mut arena: Vec<(String, Vec<usize>)> = vec![(format!("{:x}", rng.next_u64()), Vec::new())];
    let mut head = 0;
    while head < arena.len() && arena.len() < budget {
        let kids = rng.below(fanout + 1).max(u64::from(head == 0));
        for _ in 0..kids {
            if arena.len() == budget {
                break;
            }
            let id = arena.len();
            arena.push((format!("{:x}", rng.next_u64()), Vec::new()));
            arena[head].1.push(id);
        }
        head += 1;
    }
    let mut built: Vec<Option<TreeNode>> = vec![None; arena.len()];
    for i in (0..arena.len()).rev() {
        let children = arena[i].1.iter().filter_map(|&c| built[c].take()).collect();
        built[i] = Some(TreeNode::new(arena[i].0.clone(), children));
    }
    built.swap_remove(0).unwrap_or_default()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for levels in [4_u32, 7, 10] {
        let tree = binary_tree(levels, &mut rng);
        group.throughput(Throughput::Elements(count_nodes(&tree) as u64));
        group.bench_function(format!("binary_levels{}", levels), |b| {
            b.iter(|| {
                let l = layout(
                    black_box(&tree),
                    Size::new(162.0, 40.0),
                    NodeGap::default(),
                    Orientation::Horizontal,
                );
                black_box(l.len());
            });
        });
    }
    let tree = ragged_tree(1200, 4, &mut rng);
    group.throughput(Throughput::Elements(count_nodes(&tree) as u64));
    group.bench_function("ragged_1200", |b| {
        b.iter(|| {
            let l = layout(
                black_box(&tree),
                Size::new(162.0, 40.0),
                NodeGap::default(),
                Orientation::Vertical,
            );
            black_box(l.links().len());
        });
    });
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let view = GraphView::new(GraphConfig::default());
    for levels in [4_u32, 7, 10] {
        let tree = binary_tree(levels, &mut rng);
        group.throughput(Throughput::Elements(count_nodes(&tree) as u64));
        group.bench_function(format!("binary_levels{}", levels), |b| {
            b.iter_batched(
                || Container::new("merkle_graph_holder", 1280.0),
                |mut holder| {
                    black_box(view.draw(&mut holder, black_box(&tree)));
                    holder
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.bench_function("markup_levels7", |b| {
        let tree = binary_tree(7, &mut rng);
        let mut holder = Container::new("merkle_graph_holder", 1280.0);
        view.draw(&mut holder, &tree);
        b.iter(|| black_box(holder.to_markup().len()));
    });
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let tree = ragged_tree(1200, 4, &mut rng);
    let view = GraphView::new(GraphConfig::default());
    let mut holder = Container::new("merkle_graph_holder", 1280.0);
    view.draw(&mut holder, &tree);
    let Some(drawing) = holder.drawing_mut() else {
        return;
    };
    let anchor = drawing.anchor();
    let probes: Vec<Point> = (0..256)
        .map(|_| {
            Point::new(
                anchor.x + rng.below(2400) as f64,
                anchor.y + rng.below(4000) as f64 - 2000.0,
            )
        })
        .collect();
    group.bench_function("hover_sweep_1200", |b| {
        b.iter(|| {
            for &p in &probes {
                black_box(drawing.hover_at(p));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_draw, bench_hover);
criterion_main!(benches);
