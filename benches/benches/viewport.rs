// Copyright 2025 the Zoombox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use zoombox_view::{AnchorMode, DragSession, Viewport, ZoomLimits, clamp_zoom};

fn bench_apply_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/apply_zoom");
    let limits = ZoomLimits::default();

    for mode in [
        AnchorMode::MousePosition,
        AnchorMode::ControlCenter,
        AnchorMode::ImageCenter,
    ] {
        group.bench_with_input(
            BenchmarkId::new("wheel_ladder", format!("{mode:?}")),
            &mode,
            |b, &mode| {
                let start =
                    Viewport::attach(Size::new(4_000.0, 3_000.0), Size::new(1_280.0, 720.0))
                        .unwrap();
                b.iter(|| {
                    // Zoom in and back out in 3% steps, as a wheel would.
                    let mut vp = start;
                    for step in 0..64 {
                        let factor = if step < 32 { 1.03 } else { 1.0 / 1.03 };
                        let zoom = clamp_zoom(vp.zoom() * factor, &limits, vp.source());
                        vp = vp.apply_zoom(zoom, mode, Point::new(640.0, 360.0));
                    }
                    black_box(vp);
                });
            },
        );
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/drag");

    for moves in [16_usize, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("translate", moves), &moves, |b, &moves| {
            let start =
                Viewport::attach(Size::new(4_000.0, 3_000.0), Size::new(1_280.0, 720.0)).unwrap();
            b.iter(|| {
                let mut vp = start;
                let mut drag = DragSession::begin(Point::ZERO);
                let mut pointer = Point::ZERO;
                for _ in 0..moves {
                    pointer += Vec2::new(1.5, -0.5);
                    vp = vp.translate(drag.update(pointer));
                }
                black_box(vp);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply_zoom, bench_drag);
criterion_main!(benches);
