// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Rect, Size};
use vitrine_grid::GridLayout;
use vitrine_loader::LazyLoader;

fn observed(len: usize) -> LazyLoader<usize> {
    let layout = GridLayout::default();
    let mut lazy = LazyLoader::new(200.0);
    for (index, rect) in layout.flow(1440.0, len).into_iter().enumerate() {
        lazy.observe(index, rect);
    }
    lazy
}

fn bench_lazy_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/lazy_scroll");

    // A full scroll from top to bottom in viewport-sized steps.
    for len in [100_usize, 1_000, 5_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || observed(len),
                |mut lazy| {
                    let mut y = 0.0;
                    while lazy.pending() > 0 && y < 1.0e6 {
                        black_box(lazy.visible(Rect::new(0.0, y, 1440.0, y + 900.0)));
                        y += 900.0;
                    }
                    black_box(lazy);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_flow(c: &mut Criterion) {
    let layout = GridLayout::default();
    c.bench_function("gallery/flow_1000", |b| {
        b.iter(|| black_box(layout.flow(black_box(Size::new(1440.0, 900.0)).width, 1_000)));
    });
}

criterion_group!(benches, bench_lazy_scroll, bench_flow);
criterion_main!(benches);
