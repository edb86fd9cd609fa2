// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use ui_events::pointer::PointerButton;
use zoombox_widget::ZoomViewer;

fn bench_event_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer/events");

    group.bench_function("wheel_then_drag", |b| {
        b.iter_batched(
            || {
                let mut viewer = ZoomViewer::new(|r: Rect| {
                    black_box(r);
                });
                viewer.on_resize(Size::new(1_280.0, 720.0));
                viewer.on_attach_image((), Size::new(4_000.0, 3_000.0)).unwrap();
                viewer.fit();
                viewer
            },
            |mut viewer| {
                for i in 0..32 {
                    let delta = if i < 16 { 120.0 } else { -120.0 };
                    viewer.on_pointer_wheel(Point::new(640.0, 360.0), delta);
                }
                viewer.on_pointer_down(Point::new(100.0, 100.0), PointerButton::Primary);
                for i in 0..128 {
                    viewer.on_pointer_move(Point::new(100.0 + f64::from(i), 100.0));
                }
                viewer.on_pointer_up(Point::new(228.0, 100.0));
                black_box(viewer.current_bounds());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_event_sequence);
criterion_main!(benches);
