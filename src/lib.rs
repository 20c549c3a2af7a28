//! Local-search MaxSAT solvers.
//!
//! Given a CNF formula, find an assignment satisfying as many clauses as
//! possible. Two incomplete metaheuristics are provided:
//!
//! - **Simulated Annealing (SA)**: random multi-bit perturbation with
//!   Metropolis acceptance and a configurable cooling schedule.
//! - **Hill Climbing (HC)**: steepest-ascent single flips with random
//!   restarts at local optima.
//!
//! Neither guarantees optimality. Both return the assignment, its score
//! and a score-over-time trajectory for diagnostics.
//!
//! # Architecture
//!
//! [`formula`] holds the immutable model and the pure evaluators both
//! solvers share. [`sa`] and [`hc`] each expose a config and a runner;
//! [`MaxSatSolver`] dispatches over [`Method`] and returns a unified
//! [`Solution`]. Every run owns its own seedable generator, so solves are
//! reproducible and independent solves can run on separate threads.

pub mod error;
pub mod formula;
pub mod hc;
pub mod random;
pub mod sa;
pub mod solver;
pub mod trajectory;

pub use error::{MaxSatError, Result};
pub use solver::{MaxSatSolver, Method, Solution, Termination};
