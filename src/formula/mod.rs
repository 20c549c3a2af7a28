//! CNF formula model and evaluators.
//!
//! A [`Formula`] is an immutable list of [`Clause`]s over `n` Boolean
//! variables indexed `0..n`. An assignment is a `[bool]` slice of length
//! `n`; the objective both solvers maximize is [`evaluate_formula`], the
//! number of satisfied clauses.

mod eval;
mod parse;
mod types;

pub use eval::{evaluate_clause, evaluate_delta, evaluate_formula, flip};
pub use parse::{parse_clauses, read_formula, MAX_VARIABLES};
pub use types::{Assignment, Clause, Formula, Literal};
