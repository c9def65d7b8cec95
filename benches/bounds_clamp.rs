use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{DVec2, DVec3};
use map_nav::math::{closest_point_on_polygon, point_in_polygon};
use map_nav::{gesture_within_bounds, ViewState};
use std::f64::consts::TAU;

/// Regular n-gon of radius 100 centered on the origin
fn regular_polygon(n: usize) -> Vec<DVec2> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * TAU;
            DVec2::new(100.0 * angle.cos(), 100.0 * angle.sin())
        })
        .collect()
}

fn bench_point_in_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_polygon");
    for n in [4, 16, 64, 256] {
        let polygon = regular_polygon(n);
        let inside = DVec2::new(3.0, 7.0);
        let outside = DVec2::new(150.0, 150.0);

        group.bench_with_input(BenchmarkId::new("inside", n), &polygon, |b, poly| {
            b.iter(|| black_box(point_in_polygon(black_box(poly), black_box(inside))))
        });
        group.bench_with_input(BenchmarkId::new("outside", n), &polygon, |b, poly| {
            b.iter(|| black_box(point_in_polygon(black_box(poly), black_box(outside))))
        });
    }
    group.finish();
}

fn bench_closest_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_point_on_polygon");
    for n in [4, 64, 256] {
        let polygon = regular_polygon(n);
        let point = DVec2::new(140.0, -30.0);

        group.bench_with_input(BenchmarkId::from_parameter(n), &polygon, |b, poly| {
            b.iter(|| black_box(closest_point_on_polygon(black_box(poly), black_box(point))))
        });
    }
    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let projector = ViewState::new(DVec3::new(0.0, 0.0, 1.0), DVec2::new(1920.0, 1080.0));
    let polygon = regular_polygon(64);

    // Interior candidate: single containment pass
    let interior = DVec3::new(0.0, 0.0, 1.0);
    c.bench_function("clamp_interior", |b| {
        b.iter(|| {
            black_box(gesture_within_bounds(
                black_box(&polygon),
                black_box(interior),
                &projector,
            ))
        })
    });

    // Exterior candidate: exercises the corrective loop
    let exterior = DVec3::new(250.0, 250.0, 1.0);
    c.bench_function("clamp_exterior", |b| {
        b.iter(|| {
            black_box(gesture_within_bounds(
                black_box(&polygon),
                black_box(exterior),
                &projector,
            ))
        })
    });
}

criterion_group!(benches, bench_point_in_polygon, bench_closest_point, bench_clamp);
criterion_main!(benches);
