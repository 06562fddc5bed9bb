// Copyright 2025 the Innerverse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use innerverse_camera::{CameraConfig, CameraController, NarrativeStep, PointerId, PointerInput};
use kurbo::Point;

fn free_camera() -> CameraController {
    let mut camera = CameraController::new(CameraConfig::default());
    camera.set_narrative_step(NarrativeStep::COMPLETE);
    camera.tick(5.0);
    camera
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("camera/tick_60_frames", |b| {
        b.iter_batched(
            || {
                let mut camera = free_camera();
                camera.zoom_in();
                camera
            },
            |mut camera| {
                for _ in 0..60 {
                    black_box(camera.tick(1.0 / 60.0));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_drag(c: &mut Criterion) {
    let finger = PointerId(1);
    c.bench_function("camera/drag_100_moves", |b| {
        b.iter_batched(
            free_camera,
            |mut camera| {
                let mut capture = ();
                camera.handle_pointer(
                    PointerInput::Down {
                        pointer: finger,
                        position: Point::ZERO,
                    },
                    &mut capture,
                );
                for i in 0..100 {
                    let position = Point::new(f64::from(i), f64::from(i) * 0.5);
                    camera.handle_pointer(
                        PointerInput::Move {
                            pointer: finger,
                            position,
                        },
                        &mut capture,
                    );
                }
                camera.handle_pointer(PointerInput::Up { pointer: finger }, &mut capture);
                black_box(camera.state())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tick, bench_drag);
criterion_main!(benches);
