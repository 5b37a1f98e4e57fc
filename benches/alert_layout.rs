// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_alert::ui::alert::geometry;
use iced_alert::ui::alert::{AverageAdvance, Layout, TextMetrics};
use std::hint::black_box;

const MESSAGE: &str = "The document has unsaved changes. If you close it now, \
                       everything since the last save will be lost for good.";

fn alert_layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_layout");
    let metrics = TextMetrics::default();

    group.bench_function("measure_three_actions", |b| {
        b.iter(|| {
            black_box(Layout::measure(
                black_box(Some("Close document?")),
                black_box(Some(MESSAGE)),
                3,
                &metrics,
            ))
        });
    });

    let estimated = TextMetrics::Estimated(AverageAdvance::default());
    group.bench_function("measure_estimated", |b| {
        b.iter(|| {
            black_box(Layout::measure(
                black_box(Some("Close document?")),
                black_box(Some(MESSAGE)),
                3,
                &estimated,
            ))
        });
    });

    let long = MESSAGE.repeat(40);
    group.bench_function("measure_overflowing_message", |b| {
        b.iter(|| black_box(Layout::measure(None, black_box(Some(long.as_str())), 2, &metrics)));
    });

    let layout = Layout::measure(Some("Close document?"), Some(MESSAGE), 3, &metrics);
    group.bench_function("masks_and_faces", |b| {
        b.iter(|| {
            black_box(layout.content_mask());
            black_box(layout.button_row_mask());
            black_box(layout.shadow_outline());
            black_box(layout.cell_faces());
        });
    });

    group.bench_function("scaled_half", |b| {
        b.iter(|| black_box(layout.scaled(black_box(0.5))));
    });

    group.bench_function("header_outline", |b| {
        b.iter(|| black_box(geometry::header_outline(black_box(layout.header), 5.0, 8.0)));
    });

    group.finish();
}

criterion_group!(benches, alert_layout_benchmark);
criterion_main!(benches);
