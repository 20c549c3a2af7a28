//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;

use super::config::SaConfig;
use crate::error::{MaxSatError, Result};
use crate::formula::{evaluate_formula, Assignment, Formula};
use crate::random::{create_rng, random_assignment, resolve_seed};
use crate::solver::Termination;
use crate::trajectory::{SearchEvent, Trajectory, TrajectoryPoint};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best assignment held at any point of the run.
    pub best: Assignment,

    /// Number of clauses `best` satisfies.
    pub best_score: usize,

    /// Iterations executed (candidate evaluations).
    pub iterations: usize,

    /// Temperature in effect when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Seed the generator was built from.
    pub seed: u64,

    /// Initial score followed by one sample per scored candidate.
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Executes Simulated Annealing over a [`Formula`].
pub struct SaRunner;

impl SaRunner {
    /// Runs SA until the formula is satisfied or the iteration budget
    /// is spent.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_maxsat::formula::{Clause, Formula};
    /// use u_maxsat::sa::{SaConfig, SaRunner};
    ///
    /// let formula = Formula::new(2, vec![
    ///     Clause::from(vec![(0, true), (1, true)]),
    ///     Clause::from(vec![(0, false)]),
    /// ]).unwrap();
    /// let config = SaConfig::default().with_max_iterations(10_000).with_seed(7);
    ///
    /// let result = SaRunner::run(&formula, &config).unwrap();
    /// assert_eq!(result.best_score, 2);
    /// assert_eq!(result.best, vec![false, true]);
    /// ```
    pub fn run(formula: &Formula, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(formula, config, None)
    }

    /// Runs SA with an optional cancellation token, checked once per
    /// iteration.
    pub fn run_with_cancel(
        formula: &Formula,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate().map_err(MaxSatError::InvalidConfig)?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let num_clauses = formula.num_clauses();

        debug!(
            "sa: start n={} m={} max_iterations={} cooling={:?} seed={}",
            formula.num_vars(),
            num_clauses,
            config.max_iterations,
            config.cooling,
            seed
        );

        let mut trajectory = Trajectory::start();

        let mut current = random_assignment(formula.num_vars(), &mut rng);
        let mut current_score = evaluate_formula(formula, &current);
        trajectory.record(current_score, SearchEvent::Start);

        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.temperature_at(0);
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut termination = if current_score == num_clauses {
            Termination::Converged
        } else {
            Termination::Exhausted
        };

        // Scratch buffer reused for every candidate.
        let mut candidate = current.clone();

        while termination != Termination::Converged && iterations < config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    termination = Termination::Cancelled;
                    break;
                }
            }

            candidate.copy_from_slice(&current);
            for bit in candidate.iter_mut() {
                if rng.random_bool(config.flip_probability) {
                    *bit = !*bit;
                }
            }

            let candidate_score = evaluate_formula(formula, &candidate);
            trajectory.record(candidate_score, SearchEvent::Candidate);

            // Metropolis acceptance criterion
            let delta = candidate_score as f64 - current_score as f64;
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < (delta / temperature).exp()
            };

            if accept {
                std::mem::swap(&mut current, &mut candidate);
                current_score = candidate_score;
                accepted_moves += 1;

                if current_score > best_score {
                    best.copy_from_slice(&current);
                    best_score = current_score;
                    trace!("sa: iteration {iterations} new best {best_score}/{num_clauses}");
                }
            }

            iterations += 1;

            if current_score == num_clauses {
                termination = Termination::Converged;
                break;
            }

            temperature = config.temperature_at(iterations);
        }

        debug!(
            "sa: {:?} after {} iterations, best {}/{} (accepted {}, improving {})",
            termination, iterations, best_score, num_clauses, accepted_moves, improving_moves
        );

        Ok(SaResult {
            best,
            best_score,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            termination,
            seed,
            trajectory: trajectory.finish(),
        })
    }
}
