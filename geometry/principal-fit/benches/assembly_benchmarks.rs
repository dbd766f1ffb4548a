//! Benchmarks for principal-fit assembly and fitting.
//!
//! Run with: cargo bench -p principal-fit
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p principal-fit -- --save-baseline main
//! 2. After changes: cargo bench -p principal-fit -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use principal_fit::{FitParams, PrimitiveDimension, TriangleFormula, assemble_moments, fit_plane_to};
use shape_types::{Cuboid, Point3, Tetrahedron, Triangle};

// =============================================================================
// Test Geometry Generation
// =============================================================================

/// A slightly wavy `n x n` grid of triangles over the unit square.
fn create_grid(n: usize) -> Vec<Triangle> {
    let step = 1.0 / n as f64;
    let height = |i: usize, j: usize| 0.05 * ((i * 7 + j * 3) % 5) as f64 * step;
    let point = |i: usize, j: usize| Point3::new(i as f64 * step, j as f64 * step, height(i, j));

    let mut triangles = Vec::with_capacity(2 * n * n);
    for i in 0..n {
        for j in 0..n {
            let (a, b, c, d) = (point(i, j), point(i + 1, j), point(i + 1, j + 1), point(i, j + 1));
            triangles.push(Triangle::new(a, b, c));
            triangles.push(Triangle::new(a, c, d));
        }
    }
    triangles
}

/// One corner tetrahedron per grid cell.
fn create_tetrahedra(n: usize) -> Vec<Tetrahedron> {
    let step = 1.0 / n as f64;
    (0..n * n)
        .map(|k| {
            let x = (k % n) as f64 * step;
            let y = (k / n) as f64 * step;
            Tetrahedron::new(
                Point3::new(x, y, 0.0),
                Point3::new(x + step, y, 0.0),
                Point3::new(x, y + step, 0.0),
                Point3::new(x, y, step),
            )
        })
        .collect()
}

fn create_boxes(n: usize) -> Vec<Cuboid> {
    let step = 1.0 / n as f64;
    (0..n * n)
        .map(|k| {
            let min = Point3::new((k % n) as f64 * step, (k / n) as f64 * step, 0.0);
            Cuboid::cube(min, step * 0.5)
        })
        .collect()
}

// =============================================================================
// Assembly Benchmarks
// =============================================================================

fn bench_triangle_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("TriangleAssembly");

    for n in [16, 64, 256] {
        let triangles = create_grid(n);
        group.throughput(Throughput::Elements(triangles.len() as u64));

        for (name, formula) in [
            ("vertex_moment", TriangleFormula::VertexMoment),
            ("centroid_edges", TriangleFormula::CentroidEdges),
        ] {
            let params = FitParams::default().with_triangle_formula(formula);
            let dim = PrimitiveDimension::Surface;
            group.bench_with_input(BenchmarkId::new(name, triangles.len()), &triangles, |b, tris| {
                b.iter(|| assemble_moments(black_box(tris.as_slice()), dim, &params));
            });
        }
    }

    group.finish();
}

fn bench_skeletons(c: &mut Criterion) {
    let mut group = c.benchmark_group("Skeletons");
    let params = FitParams::default();

    let tets = create_tetrahedra(64);
    let boxes = create_boxes(64);

    for dimension in [
        PrimitiveDimension::Volume,
        PrimitiveDimension::Surface,
        PrimitiveDimension::Curve,
        PrimitiveDimension::Point,
    ] {
        group.bench_with_input(BenchmarkId::new("tetrahedra", dimension), &tets, |b, tets| {
            b.iter(|| assemble_moments(black_box(tets.as_slice()), dimension, &params));
        });
        group.bench_with_input(BenchmarkId::new("boxes", dimension), &boxes, |b, boxes| {
            b.iter(|| assemble_moments(black_box(boxes.as_slice()), dimension, &params));
        });
    }

    group.finish();
}

// =============================================================================
// End-to-End Benchmarks
// =============================================================================

fn bench_plane_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("PlaneFit");
    let params = FitParams::default();

    for n in [16, 256] {
        let triangles = create_grid(n);
        group.throughput(Throughput::Elements(triangles.len() as u64));
        group.bench_with_input(BenchmarkId::new("grid", triangles.len()), &triangles, |b, tris| {
            b.iter(|| {
                fit_plane_to(black_box(tris.as_slice()), PrimitiveDimension::Surface, &params)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_triangle_assembly, bench_skeletons, bench_plane_fit);
criterion_main!(benches);
