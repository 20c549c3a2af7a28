//! Clause, formula and single-flip delta evaluation.
//!
//! All three evaluators are pure functions of their inputs; nothing is
//! cached between calls, so a score can never go stale relative to the
//! `(formula, assignment)` pair it was computed from.

use super::types::{Clause, Formula};

/// Whether any literal of `clause` is satisfied by `assignment`.
///
/// An empty clause is never satisfied. O(clause length).
///
/// # Panics
///
/// Panics if a literal's variable is out of bounds for `assignment`.
#[inline]
pub fn evaluate_clause(clause: &Clause, assignment: &[bool]) -> bool {
    clause
        .literals()
        .iter()
        .any(|lit| lit.is_satisfied_by(assignment))
}

/// Number of clauses of `formula` satisfied by `assignment`.
///
/// This is the objective both solvers maximize. The result lies in
/// `[0, formula.num_clauses()]`. O(total literal count).
pub fn evaluate_formula(formula: &Formula, assignment: &[bool]) -> usize {
    debug_assert_eq!(assignment.len(), formula.num_vars());
    formula
        .clauses()
        .iter()
        .filter(|clause| evaluate_clause(clause, assignment))
        .count()
}

/// Change in [`evaluate_formula`] caused by flipping variable `var`.
///
/// Only the clauses that reference `var` can change status, so the
/// delta is computed over [`Formula::occurrences`] instead of two full
/// evaluations. The result always equals
/// `evaluate_formula(f, flip(a, var)) - evaluate_formula(f, a)`.
///
/// # Panics
///
/// Panics if `var >= formula.num_vars()`.
pub fn evaluate_delta(formula: &Formula, assignment: &[bool], var: usize) -> isize {
    debug_assert_eq!(assignment.len(), formula.num_vars());
    let clauses = formula.clauses();
    let flipped = !assignment[var];

    let mut delta = 0isize;
    for &ci in formula.occurrences(var) {
        let clause = &clauses[ci];
        let before = evaluate_clause(clause, assignment);
        let after = clause.literals().iter().any(|lit| {
            if lit.var == var {
                flipped == lit.polarity
            } else {
                lit.is_satisfied_by(assignment)
            }
        });
        match (before, after) {
            (false, true) => delta += 1,
            (true, false) => delta -= 1,
            _ => {}
        }
    }
    delta
}

/// Toggles variable `var` in place.
#[inline]
pub fn flip(assignment: &mut [bool], var: usize) {
    assignment[var] = !assignment[var];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Literal;

    fn sample() -> Formula {
        // (x0 ∨ ¬x1) ∧ (x1 ∨ x2) ∧ (¬x0 ∨ ¬x2) ∧ (x2)
        Formula::new(
            3,
            vec![
                Clause::from(vec![(0, true), (1, false)]),
                Clause::from(vec![(1, true), (2, true)]),
                Clause::from(vec![(0, false), (2, false)]),
                Clause::from(vec![(2, true)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_clause() {
        let c = Clause::new(vec![Literal::positive(0), Literal::negative(1)]);
        assert!(evaluate_clause(&c, &[true, true]));
        assert!(evaluate_clause(&c, &[false, false]));
        assert!(!evaluate_clause(&c, &[false, true]));
    }

    #[test]
    fn test_empty_clause_unsatisfied() {
        assert!(!evaluate_clause(&Clause::default(), &[true]));
    }

    #[test]
    fn test_evaluate_formula_counts() {
        let f = sample();
        assert_eq!(evaluate_formula(&f, &[false, false, true]), 4);
        assert_eq!(evaluate_formula(&f, &[true, false, true]), 3);
        assert_eq!(evaluate_formula(&f, &[false, true, false]), 2);
    }

    #[test]
    fn test_evaluate_formula_empty_clause_set() {
        let f = Formula::new(1, vec![]).unwrap();
        assert_eq!(evaluate_formula(&f, &[false]), 0);
        assert_eq!(evaluate_formula(&f, &[true]), 0);
    }

    #[test]
    fn test_delta_matches_full_reevaluation() {
        let f = sample();
        for bits in 0..8u8 {
            let a: Vec<bool> = (0..3).map(|i| bits & (1 << i) != 0).collect();
            let base = evaluate_formula(&f, &a) as isize;
            for var in 0..3 {
                let mut b = a.clone();
                flip(&mut b, var);
                let expected = evaluate_formula(&f, &b) as isize - base;
                assert_eq!(
                    evaluate_delta(&f, &a, var),
                    expected,
                    "assignment {a:?}, var {var}"
                );
            }
        }
    }

    #[test]
    fn test_delta_with_repeated_variable_in_clause() {
        // (x0 ∨ ¬x0) is a tautology; flipping x0 never changes it.
        let f = Formula::new(1, vec![Clause::from(vec![(0, true), (0, false)])]).unwrap();
        assert_eq!(evaluate_delta(&f, &[true], 0), 0);
        assert_eq!(evaluate_delta(&f, &[false], 0), 0);
    }

    #[test]
    fn test_delta_contradictory_units() {
        let f = Formula::new(
            1,
            vec![Clause::from(vec![(0, true)]), Clause::from(vec![(0, false)])],
        )
        .unwrap();
        assert_eq!(evaluate_formula(&f, &[true]), 1);
        assert_eq!(evaluate_delta(&f, &[true], 0), 0);
    }
}
