#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::{black_box, Criterion};
use mandelbrot::{escape_time, MandelbrotRenderer, PlaneMapper, ViewWindow};
use num::Complex;

fn kernel_inside(c: &mut Criterion) {
    c.bench_function("escape_time, point in the main cardioid", |b| {
        b.iter(|| escape_time(black_box(Complex::new(-0.1, 0.1)), 1000))
    });
}

fn kernel_deep_zoom(c: &mut Criterion) {
    c.bench_function("escape_time, reference view center", |b| {
        b.iter(|| escape_time(black_box(Complex::new(-0.0452407411, 0.9868162204352258)), 1000))
    });
}

fn render_small(c: &mut Criterion) {
    c.bench_function("render 64x64 full set", |b| {
        let view = ViewWindow::new(Complex::new(-0.5, 0.0), 1.5).unwrap();
        let plane = PlaneMapper::new(64, 64, view).unwrap();
        let renderer = MandelbrotRenderer::new(plane, 250).unwrap();
        b.iter(|| renderer.render_single().unwrap())
    });
}

criterion_group!(benches, kernel_inside, kernel_deep_zoom, render_small);
criterion_main!(benches);
