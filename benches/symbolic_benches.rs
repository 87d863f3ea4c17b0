use RustedSymbolic::symbolic::symbolic_engine::Expr;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const INPUT: &str = "(x + 2) * (y - 1) / (x * y + 3) - pi * x * x + e / (y + 1)";

fn lookup(name: &str) -> f64 {
    match name {
        "x" => 1.5,
        "y" => 2.5,
        _ => f64::NAN,
    }
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| Expr::parse_expression(black_box(INPUT)))
    });
}

fn bench_diff(c: &mut Criterion) {
    let expr = Expr::parse_expression(INPUT).unwrap();
    c.bench_function("diff x", |b| b.iter(|| black_box(&expr).diff("x")));
    c.bench_function("second derivative x", |b| {
        b.iter(|| black_box(&expr).n_th_derivative("x", 2))
    });
}

fn bench_eval_and_simplify(c: &mut Criterion) {
    let expr = Expr::parse_expression(INPUT).unwrap();
    let derivative = expr.diff("x").unwrap();
    let mut group = c.benchmark_group("derivative of x");
    group.bench_function("eval", |b| {
        b.iter(|| black_box(&derivative).eval_with(lookup))
    });
    group.bench_function("simplify", |b| b.iter(|| black_box(&derivative).simplify()));
    group.bench_function("render into buffer", |b| {
        let mut buffer = [0u8; 64];
        b.iter(|| black_box(&derivative).write_to_buffer(&mut buffer))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_diff, bench_eval_and_simplify);
criterion_main!(benches);
