use criterion::{black_box, criterion_group, criterion_main, Criterion};
use naca4_rs::airfoil::generate::generate;
use naca4_rs::airfoil::params::{AirfoilSpec, SurfaceOffset};
use naca4_rs::export::write_table;

fn benchmark(c: &mut Criterion) {
    let normal = AirfoilSpec::from_designation("2412", 2001).unwrap();
    let vertical = normal.clone().with_offset(SurfaceOffset::Vertical);

    c.bench_function("NACA 2412 normal offset", |b| {
        b.iter(|| generate(black_box(&normal)).unwrap().to_outer_contour())
    });
    c.bench_function("NACA 2412 vertical offset", |b| {
        b.iter(|| generate(black_box(&vertical)).unwrap().to_outer_contour())
    });

    let contour = generate(&normal).unwrap().to_outer_contour();
    c.bench_function("Coordinate table", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(100_000);
            write_table(black_box(&contour), &mut buffer).unwrap();
            buffer
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
