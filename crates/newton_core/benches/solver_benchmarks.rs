//! Criterion benchmarks for newton_core estimators and solvers.
//!
//! Compares estimated against analytic derivatives and measures how the
//! system solver scales with the number of unknowns.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::DMatrix;
use newton_core::math::finite_difference::{central_difference, central_difference_jacobian};
use newton_core::math::solvers::{NewtonRaphsonSolver, NewtonSystemSolver, SolverConfig};

/// Diagonally coupled nonlinear system with the root at `x_i = 1`.
fn coupled_system(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    (0..n)
        .map(|i| {
            let next = x[(i + 1) % n];
            x[i] * x[i] * x[i] + 0.1 * next - 1.1
        })
        .collect()
}

fn coupled_jacobian(x: &[f64]) -> DMatrix<f64> {
    let n = x.len();
    let mut j = DMatrix::zeros(n, n);
    for i in 0..n {
        j[(i, i)] += 3.0 * x[i] * x[i];
        j[(i, (i + 1) % n)] += 0.1;
    }
    j
}

/// Benchmark finite-difference estimators.
fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("finite_difference");

    group.bench_function("derivative", |b| {
        b.iter(|| central_difference(|x: f64| x.sin() * x.exp(), black_box(0.7), 1e-6));
    });

    for size in [2, 8, 32] {
        let x = vec![1.2; size];
        group.bench_with_input(BenchmarkId::new("jacobian", size), &x, |b, x| {
            b.iter(|| central_difference_jacobian(coupled_system, black_box(x), 1e-6));
        });
    }

    group.finish();
}

/// Benchmark the scalar solver with estimated and analytic slopes.
fn bench_scalar_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton_raphson");
    let solver = NewtonRaphsonSolver::new(SolverConfig::default().with_tolerance(1e-12));
    let f = |x: f64| x * x * x - x - 2.0;

    group.bench_function("estimated", |b| {
        b.iter(|| solver.find_root(f, black_box(1.5)).unwrap());
    });

    group.bench_function("analytic", |b| {
        b.iter(|| {
            solver
                .find_root_with_derivative(f, |x: f64| 3.0 * x * x - 1.0, black_box(1.5))
                .unwrap()
        });
    });

    group.finish();
}

/// Benchmark the system solver across problem sizes.
fn bench_system_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton_system");
    let solver = NewtonSystemSolver::new(SolverConfig::for_systems().with_tolerance(1e-10));

    for size in [2, 8, 32] {
        let x0 = vec![1.2; size];

        group.bench_with_input(BenchmarkId::new("estimated", size), &x0, |b, x0| {
            b.iter(|| solver.find_root(coupled_system, black_box(x0.clone())).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("analytic", size), &x0, |b, x0| {
            b.iter(|| {
                let x0 = black_box(x0.clone());
                solver
                    .find_root_with_jacobian(coupled_system, coupled_jacobian, x0)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_estimators,
    bench_scalar_solver,
    bench_system_solver
);
criterion_main!(benches);
