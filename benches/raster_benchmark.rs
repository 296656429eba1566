#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the rasterization primitives.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trazar::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    for length in [16, 128, 512, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let mut fb = Framebuffer::new(1024, 1024).expect("framebuffer creation should succeed");
            b.iter(|| {
                // Shallow, steep, and diagonal strokes of the given length.
                draw_line(&mut fb, 0, 0, black_box(length), length / 3, Rgba::WHITE);
                draw_line(&mut fb, 0, 0, length / 3, black_box(length), Rgba::RED);
                draw_line(&mut fb, 0, 0, black_box(length), length, Rgba::GREEN);
            });
        });
    }

    group.finish();
}

fn triangle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");

    for size in [16, 64, 256, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut fb = Framebuffer::new(1024, 1024).expect("framebuffer creation should succeed");
            let v0 = Point2::new(0, 0);
            let v1 = Point2::new(size, size / 4);
            let v2 = Point2::new(size / 3, size);
            b.iter(|| {
                fill_triangle(
                    &mut fb,
                    black_box(v0),
                    black_box(v1),
                    black_box(v2),
                    Rgba::RED,
                );
            });
        });
    }

    group.finish();
}

fn clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for size in [64u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut fb = Framebuffer::new(size, size).expect("framebuffer creation should succeed");
            b.iter(|| {
                fb.clear(black_box(Rgba::BLACK));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, triangle_benchmark, clear_benchmark);
criterion_main!(benches);
