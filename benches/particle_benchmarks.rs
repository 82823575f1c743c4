use std::time::Instant;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use termfolio::effects::ParticleField;

fn bench_step(c: &mut Criterion) {
    let mut field = ParticleField::seeded(200.0, 60.0, 40, 42);

    c.bench_function("particle step (40 particles)", |b| {
        b.iter(|| {
            field.step();
            black_box(field.particles().len())
        })
    });
}

fn bench_step_with_pointer(c: &mut Criterion) {
    let mut field = ParticleField::seeded(200.0, 60.0, 40, 42);
    field.set_pointer(100.0, 30.0, Instant::now());

    c.bench_function("particle step with pointer (40 particles)", |b| {
        b.iter(|| field.step())
    });
}

fn bench_connections(c: &mut Criterion) {
    let field = ParticleField::seeded(200.0, 60.0, 200, 7);

    c.bench_function("particle connections (200 particles)", |b| {
        b.iter(|| black_box(field.connections()))
    });
}

criterion_group!(benches, bench_step, bench_step_with_pointer, bench_connections);
criterion_main!(benches);
