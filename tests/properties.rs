//! Property tests for the evaluators and the solver contracts.

use proptest::prelude::*;
use u_maxsat::formula::{
    evaluate_clause, evaluate_delta, evaluate_formula, flip, Clause, Formula, Literal,
};
use u_maxsat::hc::{HcConfig, HcRunner};
use u_maxsat::sa::{SaConfig, SaRunner};
use u_maxsat::{MaxSatSolver, Method, Termination};

/// A formula over `1..=8` variables with up to 12 clauses of up to 4
/// literals, paired with an assignment of matching length.
fn formula_and_assignment() -> impl Strategy<Value = (Formula, Vec<bool>)> {
    (1usize..=8).prop_flat_map(|n| {
        let literal = (0..n, any::<bool>()).prop_map(|(v, p)| Literal::new(v, p));
        let clause = prop::collection::vec(literal, 0..=4).prop_map(Clause::new);
        (
            prop::collection::vec(clause, 0..=12)
                .prop_map(move |clauses| Formula::new(n, clauses).unwrap()),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

proptest! {
    #[test]
    fn formula_score_counts_satisfied_clauses((f, a) in formula_and_assignment()) {
        let score = evaluate_formula(&f, &a);
        let expected = f.clauses().iter().filter(|c| evaluate_clause(c, &a)).count();
        prop_assert_eq!(score, expected);
        prop_assert!(score <= f.num_clauses());
        // Pure: a second call sees the same inputs and returns the same value.
        prop_assert_eq!(evaluate_formula(&f, &a), score);
    }

    #[test]
    fn delta_agrees_with_full_reevaluation((f, a) in formula_and_assignment()) {
        let base = evaluate_formula(&f, &a) as isize;
        for var in 0..f.num_vars() {
            let mut flipped = a.clone();
            flip(&mut flipped, var);
            let expected = evaluate_formula(&f, &flipped) as isize - base;
            prop_assert_eq!(evaluate_delta(&f, &a, var), expected);
        }
    }

    #[test]
    fn solvers_stay_in_range((f, _a) in formula_and_assignment(), seed in any::<u64>()) {
        let mut solver = MaxSatSolver::default().with_seed(seed);
        solver.sa.max_iterations = 300;
        solver.hc.max_restarts = Some(20);

        for method in Method::ALL {
            let s = solver.solve(&f, method).unwrap();
            prop_assert_eq!(s.assignment.len(), f.num_vars());
            prop_assert!(s.score <= f.num_clauses());
            prop_assert_eq!(evaluate_formula(&f, &s.assignment), s.score);
            if s.termination == Termination::Converged {
                prop_assert_eq!(s.score, f.num_clauses());
            }
            prop_assert!(s.trajectory.iter().all(|p| p.score <= f.num_clauses()));
        }
    }

    #[test]
    fn out_of_range_literal_is_rejected(n in 1usize..10, extra in 0usize..5) {
        let clause = Clause::new(vec![Literal::positive(n + extra)]);
        let err = Formula::new(n, vec![clause]).unwrap_err();
        prop_assert!(err.is_malformed_input());
    }
}

#[test]
fn contradictory_units_never_report_two() {
    let f = Formula::new(
        1,
        vec![Clause::new(vec![Literal::positive(0)]), Clause::new(vec![Literal::negative(0)])],
    )
    .unwrap();

    for seed in 0..5 {
        let sa = SaRunner::run(&f, &SaConfig::default().with_max_iterations(1_000).with_seed(seed))
            .unwrap();
        assert_eq!(sa.best_score, 1);
        let hc = HcRunner::run(&f, &HcConfig::default().with_seed(seed)).unwrap();
        assert_eq!(hc.best_score, 1);
    }
}

#[test]
fn independent_solves_on_threads() {
    let f: Formula = "1 -2 3\n-1 2\n2 3\n-3 1\n".parse().unwrap();
    let solver = MaxSatSolver::default().with_seed(8);

    std::thread::scope(|scope| {
        let handles: Vec<_> = Method::ALL
            .iter()
            .map(|&method| {
                let (f, solver) = (&f, &solver);
                scope.spawn(move || solver.solve(f, method).unwrap())
            })
            .collect();
        for h in handles {
            let s = h.join().unwrap();
            assert_eq!(s.score, 4);
            assert!(s.is_satisfying());
        }
    });
}
