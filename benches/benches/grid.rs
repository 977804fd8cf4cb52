// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use vitrine_grid::{GridLayout, GridParams};

const VIEWPORTS: [(&str, Size); 3] = [
    ("laptop", Size::new(1440.0, 900.0)),
    ("ultrawide", Size::new(3440.0, 1440.0)),
    ("tablet", Size::new(820.0, 1180.0)),
];

fn bench_choose_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/choose_dimensions");
    let layout = GridLayout::default();

    for items in [6_usize, 24, 47] {
        for (name, viewport) in VIEWPORTS {
            group.bench_with_input(
                BenchmarkId::new(name, items),
                &(viewport, items),
                |b, &(viewport, items)| {
                    b.iter(|| black_box(layout.choose_dimensions(black_box(viewport), items)));
                },
            );
        }
    }

    group.finish();
}

fn bench_search_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/search_bounds");

    // The search is rows x cols; larger bounds grow it quadratically.
    for bound in [6_usize, 12, 24] {
        let layout = GridLayout::new(GridParams {
            max_cols: bound,
            max_rows: bound,
            min_cell_width: 40.0,
            min_cell_height: 30.0,
            ..GridParams::default()
        });
        group.throughput(Throughput::Elements((bound * bound) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bound), &layout, |b, layout| {
            b.iter(|| black_box(layout.layout(black_box(Size::new(2560.0, 1440.0)), 40)));
        });
    }

    group.finish();
}

fn bench_resize_sweep(c: &mut Criterion) {
    let layout = GridLayout::default();
    let widths: Vec<f64> = (0..200).map(|i| 600.0 + f64::from(i) * 10.0).collect();

    c.bench_function("grid/resize_sweep", |b| {
        b.iter(|| {
            for &width in &widths {
                black_box(layout.layout(Size::new(width, width * 0.6), 12));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_choose_dimensions,
    bench_search_bounds,
    bench_resize_sweep
);
criterion_main!(benches);
