// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_zoom::{ZoomConfig, ZoomController, ZoomGesture};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gesture_stream(len: usize, seed: u64) -> Vec<ZoomGesture> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|i| match i % 8 {
            0 => ZoomGesture::PinchBegin {
                focus: Point::new(rng.next_f64() * 1080.0, rng.next_f64() * 1920.0),
            },
            1..=3 => ZoomGesture::PinchUpdate {
                factor: 0.8 + rng.next_f64() * 0.4,
            },
            4 => ZoomGesture::PinchEnd,
            5 => ZoomGesture::DoubleTap {
                at: Point::new(rng.next_f64() * 1080.0, rng.next_f64() * 1920.0),
            },
            _ => ZoomGesture::Drag {
                distance: Vec2::new(rng.next_f64() * 40.0 - 20.0, rng.next_f64() * 40.0 - 20.0),
            },
        })
        .collect()
}

fn attached() -> ZoomController {
    let mut zc = ZoomController::new(ZoomConfig::default());
    zc.on_layout(Size::new(1080.0, 1920.0), Size::new(4000.0, 3000.0))
        .unwrap();
    zc
}

fn bench_gesture_stream(c: &mut Criterion) {
    let gestures = gesture_stream(4_096, 7);
    c.bench_function("zoom/gesture_stream_4096", |b| {
        b.iter_batched(
            attached,
            |mut zc| {
                let mut now = 0_u64;
                for gesture in &gestures {
                    now += 16;
                    zc.handle(*gesture, now);
                    zc.on_animation_frame(now);
                }
                black_box(zc.current_transform());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_render_transform(c: &mut Criterion) {
    let mut zc = attached();
    zc.set_animated_scale(0.5);
    c.bench_function("zoom/render_transform_affine", |b| {
        b.iter(|| {
            let frame = zc.render_transform().unwrap().unwrap();
            black_box(frame.to_affine());
        });
    });
}

criterion_group!(benches, bench_gesture_stream, bench_render_transform);
criterion_main!(benches);
