// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for viewport visibility queries.
//!
//! The cost of a query is dominated by the offset-parent walk, so these measure
//! chains of increasing depth plus a flat page of many siblings.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_inview::{
    InViewOptions, NodeId, OffsetTree, StaticMetrics, is_in_viewport, rect_in_view,
};

fn deep_chain(depth: usize) -> (OffsetTree, NodeId) {
    let mut tree = OffsetTree::new();
    let mut leaf = tree.insert(None, Vec2::ZERO, Size::new(1_280.0, 20_000.0));
    for _ in 1..depth {
        leaf = tree.insert(Some(leaf), Vec2::new(2.0, 3.0), Size::new(200.0, 40.0));
    }
    (tree, leaf)
}

fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("inview/chain_depth");
    let metrics = StaticMetrics::new(Vec2::new(0.0, 100.0), Size::new(1_280.0, 720.0));
    let opts = InViewOptions::default();

    for depth in [1usize, 8, 32, 128, 512] {
        let (tree, leaf) = deep_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &leaf, |b, &leaf| {
            b.iter(|| black_box(is_in_viewport(&tree.node(leaf), &metrics, &opts)));
        });
    }

    group.finish();
}

fn bench_scrolling_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("inview/scrolling_page");
    let opts = InViewOptions::new().with_threshold(0.1);

    // A long feed of 48px rows, queried while the page scrolls.
    for rows in [256usize, 4_096] {
        let mut tree = OffsetTree::new();
        let body = tree.insert(None, Vec2::ZERO, Size::new(1_280.0, 48.0 * rows as f64));
        let ids: Vec<NodeId> = (0..rows)
            .map(|i| {
                tree.insert(
                    Some(body),
                    Vec2::new(0.0, 48.0 * i as f64),
                    Size::new(1_280.0, 48.0),
                )
            })
            .collect();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("offset_tree", rows), &ids, |b, ids| {
            let metrics = StaticMetrics::new(Vec2::new(0.0, 2_000.0), Size::new(1_280.0, 720.0));
            b.iter(|| {
                let visible = ids
                    .iter()
                    .filter(|&&id| {
                        is_in_viewport(&tree.node(id), &metrics, &opts).unwrap_or(false)
                    })
                    .count();
                black_box(visible);
            });
        });

        let rects: Vec<Rect> = (0..rows)
            .map(|i| Rect::new(0.0, 48.0 * i as f64, 1_280.0, 48.0 * (i + 1) as f64))
            .collect();
        group.bench_with_input(BenchmarkId::new("rects", rows), &rects, |b, rects| {
            let viewport = Rect::new(0.0, 2_000.0, 1_280.0, 2_720.0);
            b.iter(|| {
                let visible = rects
                    .iter()
                    .filter(|&&r| rect_in_view(r, viewport, &opts))
                    .count();
                black_box(visible);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain_depth, bench_scrolling_page);
criterion_main!(benches);
