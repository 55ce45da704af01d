// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_anchor::{
    Corner, Direction, PositionRequest, Positioning, RepositionStrategy, Viewport,
    compute_placement,
};

fn request(anchor: Rect, strategy: RepositionStrategy) -> PositionRequest {
    PositionRequest {
        anchor,
        surface: Rect::new(0.0, 0.0, 240.0, 320.0),
        anchor_corner: Corner::END_START,
        surface_corner: Corner::START_START,
        positioning: Positioning::Fixed,
        x_offset: 0.0,
        y_offset: 4.0,
        strategy,
        viewport: Viewport {
            size: Size::new(1280.0, 720.0),
            scroll: Vec2::ZERO,
        },
        scrollbar: Vec2::new(15.0, 0.0),
        direction: Direction::Ltr,
        disable_block_flip: false,
        disable_inline_flip: false,
    }
}

fn bench_compute_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchor/compute_placement");

    // Fitting, flipping, and clamped after a flip that does not help.
    let cases = [
        ("fits", Rect::new(40.0, 40.0, 140.0, 60.0)),
        ("flips", Rect::new(40.0, 600.0, 140.0, 620.0)),
        ("overflows", Rect::new(1200.0, 300.0, 1270.0, 320.0)),
    ];
    for strategy in [RepositionStrategy::Move, RepositionStrategy::Resize] {
        for (name, anchor) in cases {
            let req = request(anchor, strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), name),
                &req,
                |b, req| b.iter(|| black_box(compute_placement(black_box(req)))),
            );
        }
    }

    group.finish();
}

fn bench_anchor_sweep(c: &mut Criterion) {
    // A pointer-driven context menu repositions for every anchor position.
    let anchors: Vec<Rect> = (0..64)
        .flat_map(|y| {
            (0..64).map(move |x| {
                let origin = (f64::from(x) * 20.0, f64::from(y) * 11.0);
                Rect::from_origin_size(origin, (1.0, 1.0))
            })
        })
        .collect();

    c.bench_function("anchor/sweep_4096", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                black_box(compute_placement(&request(anchor, RepositionStrategy::Move)));
            }
        });
    });
}

criterion_group!(benches, bench_compute_placement, bench_anchor_sweep);
criterion_main!(benches);
