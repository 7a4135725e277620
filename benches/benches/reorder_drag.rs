// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_reorder::controller::ReorderController;
use understory_reorder::list::OrderedList;
use understory_reorder::rows::{RowLayout, SectionSpacing};

const ROW_HEIGHT: f64 = 50.0;

/// Pointer samples sweeping from the top row to the bottom row, `per_row` samples per row.
fn sweep(layout: &RowLayout, per_row: usize) -> Vec<f64> {
    let steps = layout.len() * per_row;
    let h = layout.content_height();
    (0..steps).map(|i| h * i as f64 / steps as f64).collect()
}

fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_sweep");
    for &n in &[8usize, 128, 1024] {
        let layout = RowLayout::uniform(n, ROW_HEIGHT, 320.0, SectionSpacing::default());
        let samples = sweep(&layout, 4);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_function(format!("rows_{n}"), |b| {
            b.iter_batched(
                || ReorderController::new(0..n),
                |mut ctl| {
                    let _ = ctl.start(15.0, Some(0));
                    for &y in &samples {
                        let slot = layout.slot_at(Point::new(160.0, y));
                        black_box(ctl.pointer_moved(y, slot));
                    }
                    let _ = ctl.end();
                    black_box(ctl.finish_complete());
                    ctl
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_move_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_item");
    for &n in &[128usize, 4096] {
        group.bench_function(format!("end_to_end_{n}"), |b| {
            b.iter_batched(
                || (0..n).collect::<OrderedList<usize>>(),
                |mut list| {
                    list.move_item(0, n - 1);
                    list.move_item(n - 1, 0);
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_sweep, bench_move_item);
criterion_main!(benches);
