// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grove_camera::{CameraConfig, CameraController, CameraState};
use kurbo::{Point, Rect, Size};

fn bench_wheel(c: &mut Criterion) {
    let mut cam = CameraController::new(CameraConfig::default(), Size::new(1920.0, 1080.0));
    cam.fit(Rect::new(0.0, 0.0, 3880.0, 2920.0));
    let mut dir = -1.0;
    c.bench_function("camera/wheel", |b| {
        b.iter(|| {
            if !cam.on_wheel(black_box(Point::new(812.0, 433.0)), dir) {
                dir = -dir;
            }
        });
    });
}

fn bench_tween_frames(c: &mut Criterion) {
    c.bench_function("camera/tween_60_frames", |b| {
        b.iter(|| {
            let mut cam = CameraController::new(CameraConfig::default(), Size::new(1920.0, 1080.0));
            cam.animate_to(CameraState::new(0.4, -300.0, 120.0), 1_000.0, 0.0);
            let mut now = 0.0;
            while cam.tick(now).is_some() {
                now += 1_000.0 / 60.0;
            }
            black_box(cam.state());
        });
    });
}

criterion_group!(benches, bench_wheel, bench_tween_frames);
criterion_main!(benches);
