//! Benchmarks for per-frame hot paths.
//!
//! Run with: `cargo bench`

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brim::geometry::{self, WavePathSpec};
use brim::{Animation, Viewport};

fn bench_path_build(c: &mut Criterion) {
    let spec = WavePathSpec {
        level: 150.0,
        amplitude: 133.33,
        width: 800.0,
        height: 600.0,
    };

    c.bench_function("wave_path_build", |b| {
        b.iter(|| black_box(black_box(&spec).to_path()))
    });
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_height_at");

    let path = WavePathSpec {
        level: 150.0,
        amplitude: 133.33,
        width: 800.0,
        height: 600.0,
    }
    .to_path();

    group.bench_function("first_segment", |b| {
        b.iter(|| black_box(geometry::sample_height_at(black_box(200.0), &path)))
    });

    group.bench_function("second_segment", |b| {
        b.iter(|| black_box(geometry::sample_height_at(black_box(1200.0), &path)))
    });

    group.bench_function("outside", |b| {
        b.iter(|| black_box(geometry::sample_height_at(black_box(-5.0), &path)))
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("animation_tick", |b| {
        let viewport = Viewport::new(800.0, 600.0).unwrap();
        let mut anim = Animation::new(viewport);
        let mut now = Duration::ZERO;
        let step = Duration::from_millis(17);

        b.iter(|| {
            now += step;
            black_box(anim.tick(now))
        })
    });
}

criterion_group!(benches, bench_path_build, bench_sample, bench_tick);
criterion_main!(benches);
