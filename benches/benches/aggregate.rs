// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use innerverse_model::{Atlas, Lens};
use innerverse_stats::{aggregate, axis_summaries, group_summaries, highlights, node_summaries};

fn charted_atlas() -> Atlas {
    let mut atlas = Atlas::reference();
    let ids: Vec<_> = atlas.nodes().map(|n| n.id()).collect();
    for (i, id) in ids.into_iter().enumerate() {
        for lens in Lens::ALL {
            let value = ((i * 37 + lens.index() * 11) % 201) as f64 - 100.0;
            atlas.set_lens(id, lens, Some(value));
        }
    }
    atlas
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats/aggregate");
    for len in [18_usize, 72, 1_024, 16_384] {
        let values: Vec<f64> = (0..len).map(|i| (i % 201) as f64 - 100.0).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| black_box(aggregate(black_box(values).iter().copied())));
        });
    }
    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let atlas = charted_atlas();
    c.bench_function("stats/group_summaries", |b| {
        b.iter(|| black_box(group_summaries(black_box(&atlas))));
    });
    c.bench_function("stats/axis_summaries", |b| {
        b.iter(|| black_box(axis_summaries(black_box(&atlas))));
    });
    c.bench_function("stats/node_summaries", |b| {
        b.iter(|| black_box(node_summaries(black_box(&atlas))));
    });
    c.bench_function("stats/highlights", |b| {
        b.iter(|| black_box(highlights(black_box(&atlas))));
    });
}

criterion_group!(benches, bench_aggregate, bench_composites);
criterion_main!(benches);
