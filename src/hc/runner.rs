//! Hill Climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random assignment
//! 2. At each step:
//!    a. Compute the delta of every single-variable flip
//!    b. If the best delta is positive, apply it and reset the stall counter
//!    c. Otherwise restart from a fresh random assignment and count a stall
//! 3. Stop when the formula is satisfied, the stall counter reaches
//!    `max_stall_restarts`, the restart cap is hit, or on cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use super::config::HcConfig;
use crate::error::{MaxSatError, Result};
use crate::formula::{evaluate_delta, evaluate_formula, flip, Assignment, Formula};
use crate::random::{create_rng, random_assignment, resolve_seed};
use crate::solver::Termination;
use crate::trajectory::{SearchEvent, Trajectory, TrajectoryPoint};

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// Returned assignment: best-ever or last-held, per
    /// [`HcConfig::keep_best`].
    pub best: Assignment,
    /// Number of clauses `best` satisfies.
    pub best_score: usize,
    /// Steps executed (improving moves plus restarts).
    pub iterations: usize,
    /// Improving flips applied.
    pub improving_moves: usize,
    /// Random restarts performed.
    pub restarts: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Seed the generator was built from.
    pub seed: u64,
    /// Initial score, then one sample per improving move or restart.
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Hill Climbing runner.
pub struct HcRunner;

impl HcRunner {
    /// Executes steepest-ascent Hill Climbing with random restarts.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_maxsat::formula::{Clause, Formula};
    /// use u_maxsat::hc::{HcConfig, HcRunner};
    ///
    /// let formula = Formula::new(1, vec![Clause::from(vec![(0, true)])]).unwrap();
    /// let result = HcRunner::run(&formula, &HcConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(result.best_score, 1);
    /// assert_eq!(result.best, vec![true]);
    /// ```
    pub fn run(formula: &Formula, config: &HcConfig) -> Result<HcResult> {
        Self::run_with_cancel(formula, config, None)
    }

    /// Executes Hill Climbing with an optional cancellation token,
    /// checked once per step.
    pub fn run_with_cancel(
        formula: &Formula,
        config: &HcConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HcResult> {
        config.validate().map_err(MaxSatError::InvalidConfig)?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let n = formula.num_vars();
        let num_clauses = formula.num_clauses();

        debug!(
            "hc: start n={} m={} max_stall_restarts={} seed={}",
            n, num_clauses, config.max_stall_restarts, seed
        );

        let mut trajectory = Trajectory::start();

        let mut current = random_assignment(n, &mut rng);
        let mut score = evaluate_formula(formula, &current);
        trajectory.record(score, SearchEvent::Start);

        let mut best = current.clone();
        let mut best_score = score;

        let mut stall = 0usize;
        let mut iterations = 0usize;
        let mut improving_moves = 0usize;
        let mut restarts = 0usize;

        let termination = loop {
            if score == num_clauses {
                break Termination::Converged;
            }
            if stall >= config.max_stall_restarts {
                break Termination::Exhausted;
            }
            if config.max_restarts.is_some_and(|cap| restarts >= cap) {
                break Termination::Exhausted;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }

            iterations += 1;
            let (var, delta) = steepest_move(formula, &current);

            if delta > 0 {
                let expected = score as isize + delta;
                flip(&mut current, var);
                score = evaluate_formula(formula, &current);
                debug_assert_eq!(score as isize, expected);
                stall = 0;
                improving_moves += 1;
                trajectory.record(score, SearchEvent::Improvement);
            } else {
                stall += 1;
                restarts += 1;
                current = random_assignment(n, &mut rng);
                score = evaluate_formula(formula, &current);
                trajectory.record(score, SearchEvent::Restart);
                trace!("hc: restart {restarts} (stall {stall}) score {score}/{num_clauses}");
            }

            if score > best_score {
                best.copy_from_slice(&current);
                best_score = score;
            }
        };

        let (best, best_score) = if config.keep_best {
            (best, best_score)
        } else {
            (current, score)
        };

        debug!(
            "hc: {:?} after {} steps ({} improving, {} restarts), returning {}/{}",
            termination, iterations, improving_moves, restarts, best_score, num_clauses
        );

        Ok(HcResult {
            best,
            best_score,
            iterations,
            improving_moves,
            restarts,
            termination,
            seed,
            trajectory: trajectory.finish(),
        })
    }
}

/// The steepest single-flip move from `assignment`.
///
/// Returns `(var, delta)` where `delta` is the largest
/// [`evaluate_delta`] over all variables and `var` is the first index
/// attaining it.
///
/// # Panics
///
/// Panics if `assignment` is shorter than `formula.num_vars()`.
pub fn steepest_move(formula: &Formula, assignment: &[bool]) -> (usize, isize) {
    let mut best_var = 0;
    let mut best_delta = isize::MIN;
    for var in 0..formula.num_vars() {
        let delta = evaluate_delta(formula, assignment, var);
        if delta > best_delta {
            best_var = var;
            best_delta = delta;
        }
    }
    (best_var, best_delta)
}
