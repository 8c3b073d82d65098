use colorsolve::{Rgb, Solver, hex};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn solve(c: &mut Criterion) {
    let target = Rgb::new(0, 169, 145);
    let e = Rgb::new(107, 105, 119);
    let m = Rgb::new(105, 46, 99);
    let o = Rgb::new(111, 109, 0);
    let solver = Solver::default();
    c.bench_function("solve", |b| {
        b.iter(|| solver.solve(black_box(target), black_box(e), black_box(m), black_box(o)))
    });
}

fn codec(c: &mut Criterion) {
    c.bench_function("decode", |b| b.iter(|| hex::decode(black_box("#00a991"))));
    c.bench_function("to_hsl", |b| b.iter(|| black_box(Rgb::new(73, 56, 0)).to_hsl()));
}

criterion_group!(benches, solve, codec);
criterion_main!(benches);
