//! Criterion benchmarks for the MaxSAT evaluators and solvers.
//!
//! Uses planted random 3-SAT instances at clause/variable ratio 4.2.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_maxsat::formula::{evaluate_formula, Clause, Formula, Literal};
use u_maxsat::hc::{steepest_move, HcConfig, HcRunner};
use u_maxsat::random::{create_rng, random_assignment};
use u_maxsat::sa::{SaConfig, SaRunner};

fn planted_3sat(n: usize, seed: u64) -> Formula {
    let mut rng = create_rng(seed);
    let hidden = random_assignment(n, &mut rng);
    let m = (n as f64 * 4.2) as usize;
    let mut clauses = Vec::with_capacity(m);
    while clauses.len() < m {
        let lits: Vec<Literal> = (0..3)
            .map(|_| Literal::new(rng.random_range(0..n), rng.random_bool(0.5)))
            .collect();
        if lits.iter().any(|l| l.is_satisfied_by(&hidden)) {
            clauses.push(Clause::new(lits));
        }
    }
    Formula::new(n, clauses).expect("planted formula is well-formed")
}

// ===========================================================================
// Evaluators
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[50usize, 200, 1000] {
        let formula = planted_3sat(n, 42);
        let assignment = random_assignment(n, &mut create_rng(7));
        group.bench_with_input(
            BenchmarkId::new("formula", n),
            &(&formula, &assignment),
            |b, (f, a)| b.iter(|| black_box(evaluate_formula(black_box(f), black_box(a)))),
        );
        group.bench_with_input(
            BenchmarkId::new("steepest_move", n),
            &(&formula, &assignment),
            |b, (f, a)| b.iter(|| black_box(steepest_move(black_box(f), black_box(a)))),
        );
    }
    group.finish();
}

// ===========================================================================
// Solvers
// ===========================================================================

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_3sat");
    group.sample_size(10);

    for &n in &[50usize, 100] {
        let formula = planted_3sat(n, 42);
        let config = SaConfig::default().with_max_iterations(5_000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(formula, config),
            |b, (f, c)| b.iter(|| black_box(SaRunner::run(black_box(f), black_box(c)))),
        );
    }
    group.finish();
}

fn bench_hc(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc_3sat");
    group.sample_size(10);

    for &n in &[50usize, 100] {
        let formula = planted_3sat(n, 42);
        let config = HcConfig::default().with_max_restarts(50).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(formula, config),
            |b, (f, c)| b.iter(|| black_box(HcRunner::run(black_box(f), black_box(c)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_sa, bench_hc);
criterion_main!(benches);
