use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_cube::core::{render, Cube, Model, Vec3i};
use tui_cube::types::{Euler, FaceColor, ScreenBounds};

/// Sink that throws pixels away; keeps the bench on the geometry cost.
struct NullSink(u64);

impl tui_cube::core::PixelSink for NullSink {
    fn set_cell(&mut self, _x: i32, _y: i32, _color: FaceColor) {
        self.0 += 1;
    }
}

fn bench_full_pass(c: &mut Criterion) {
    let mut cube = Cube::new(Vec3i::new(0, 0, 250), 60);
    cube.rotate_to(Euler::new(0.6, 0.8, 0.3));
    let bounds = ScreenBounds::centered(160, 96);

    c.bench_function("render_cube_160x96", |b| {
        b.iter(|| {
            let mut sink = NullSink(0);
            render(black_box(&cube), black_box(bounds), &mut sink);
            sink.0
        })
    });
}

fn bench_rotate_to(c: &mut Criterion) {
    let mut cube = Cube::new(Vec3i::new(0, 0, 250), 60);
    let mut t = 0.0f64;

    c.bench_function("rotate_to_cube", |b| {
        b.iter(|| {
            t += 0.016;
            cube.rotate_to(black_box(Euler::new(0.7 * t, 0.4 * t, 0.6 * t)));
        })
    });
}

criterion_group!(benches, bench_full_pass, bench_rotate_to);
criterion_main!(benches);
