//! Benchmarks for the normal-form passes and the e-graph oracle.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rotor::core::Symbol;
use rotor::simplify::{normal_form, sorted_form, EqualitySaturation, Simplifier};

/// The sum `x1 + x2 + ... + xn`.
fn linear_sum(n: usize) -> Symbol {
    (1..=n)
        .map(|i| Symbol::var(format!("x{i}")))
        .fold(Symbol::zero(), |acc, x| acc + x)
}

/// `(x1 + ... + xn)^power`, built as repeated products.
fn power_of_sum(n: usize, power: usize) -> Symbol {
    let sum = linear_sum(n);
    (1..power).fold(sum.clone(), |acc, _| acc * &sum)
}

fn bench_normal_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_form");

    for n in [2, 3, 4, 6] {
        let expr = power_of_sum(n, 2);
        group.bench_with_input(BenchmarkId::new("square_of_sum", n), &expr, |b, e| {
            b.iter(|| black_box(normal_form(e).unwrap()));
        });
    }

    let cube = power_of_sum(3, 3);
    group.bench_function("cube_of_3_sum", |b| {
        b.iter(|| black_box(normal_form(&cube).unwrap()));
    });

    group.finish();
}

fn bench_sorted_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_form");

    for n in [4, 16, 64] {
        let expr = linear_sum(n);
        group.bench_with_input(BenchmarkId::new("linear_sum", n), &expr, |b, e| {
            b.iter(|| black_box(sorted_form(e).unwrap()));
        });
    }

    group.finish();
}

fn bench_simplifier_vs_egraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("equivalence");

    let a = Symbol::var("a");
    let b = Symbol::var("b");
    let lhs = (&a + &b) * (&a - &b);
    let rhs = &a * &a - &b * &b;

    let simplifier = Simplifier::new();
    group.bench_function("normal_forms", |bench| {
        bench.iter(|| black_box(simplifier.equivalent(&lhs, &rhs).unwrap()));
    });

    let oracle = EqualitySaturation::new();
    group.bench_function("egraph", |bench| {
        bench.iter(|| black_box(oracle.equivalent(&lhs, &rhs)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normal_form,
    bench_sorted_form,
    bench_simplifier_vs_egraph
);

criterion_main!(benches);
