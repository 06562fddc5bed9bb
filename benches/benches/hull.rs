// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use innerverse_hull::{BoundaryConfig, atlas_boundaries, convex_hull, smooth_boundary};
use innerverse_model::Atlas;
use kurbo::Point;

/// Deterministic scatter inside the 0–100 square.
fn scatter(n: usize) -> Vec<Point> {
    let mut state = 0x2545_f491_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        f64::from(state % 10_000) / 100.0
    };
    (0..n).map(|_| Point::new(next(), next())).collect()
}

fn bench_convex_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull/convex_hull");
    for len in [7_usize, 64, 512, 4_096] {
        let points = scatter(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter(|| black_box(convex_hull(black_box(points))));
        });
    }
    group.finish();
}

fn bench_boundaries(c: &mut Criterion) {
    let atlas = Atlas::reference();
    let config = BoundaryConfig::default();
    let hull = convex_hull(&atlas.groups()[0].boundary_points());

    c.bench_function("hull/smooth_boundary", |b| {
        b.iter(|| black_box(smooth_boundary(black_box(&hull), 25.0)));
    });
    c.bench_function("hull/atlas_boundaries", |b| {
        b.iter(|| black_box(atlas_boundaries(black_box(&atlas), &config)));
    });
}

criterion_group!(benches, bench_convex_hull, bench_boundaries);
criterion_main!(benches);
