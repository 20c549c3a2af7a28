//! Method selection and the unified solve entry point.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::{MaxSatError, Result};
use crate::formula::{Assignment, Formula};
use crate::hc::{HcConfig, HcResult, HcRunner};
use crate::sa::{SaConfig, SaResult, SaRunner};
use crate::trajectory::TrajectoryPoint;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Every clause is satisfied.
    Converged,
    /// The iteration, stall or restart budget ran out.
    Exhausted,
    /// The cancellation token was raised.
    Cancelled,
}

/// Local-search method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    SimulatedAnnealing,
    HillClimbing,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::SimulatedAnnealing, Method::HillClimbing];

    /// Short selector, `SA` or `HC`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Method::SimulatedAnnealing => "SA",
            Method::HillClimbing => "HC",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::SimulatedAnnealing => write!(f, "Simulated Annealing"),
            Method::HillClimbing => write!(f, "Hill Climbing"),
        }
    }
}

impl FromStr for Method {
    type Err = MaxSatError;

    /// Accepts `SA`/`HC` and the full names, case-insensitively, with
    /// `-`, `_` or nothing between words.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "sa" | "simulatedannealing" => Ok(Method::SimulatedAnnealing),
            "hc" | "hillclimbing" => Ok(Method::HillClimbing),
            _ => Err(MaxSatError::InvalidMethodSelector(s.to_string())),
        }
    }
}

/// Outcome of a solve, whichever method produced it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub method: Method,
    /// Satisfied clause count of `assignment`, in `[0, m]`.
    pub score: usize,
    /// One value per variable.
    pub assignment: Assignment,
    /// `(elapsed seconds, score)` samples for diagnostics.
    pub trajectory: Vec<TrajectoryPoint>,
    pub iterations: usize,
    pub termination: Termination,
    pub seed: u64,
}

impl Solution {
    /// Whether every clause is satisfied.
    pub fn is_satisfying(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Assignment as `0`/`1` values.
    pub fn bits(&self) -> Vec<u8> {
        self.assignment.iter().map(|&b| u8::from(b)).collect()
    }
}

impl From<SaResult> for Solution {
    fn from(r: SaResult) -> Self {
        Solution {
            method: Method::SimulatedAnnealing,
            score: r.best_score,
            assignment: r.best,
            trajectory: r.trajectory,
            iterations: r.iterations,
            termination: r.termination,
            seed: r.seed,
        }
    }
}

impl From<HcResult> for Solution {
    fn from(r: HcResult) -> Self {
        Solution {
            method: Method::HillClimbing,
            score: r.best_score,
            assignment: r.best,
            trajectory: r.trajectory,
            iterations: r.iterations,
            termination: r.termination,
            seed: r.seed,
        }
    }
}

/// Dispatches a [`Formula`] to either solver.
///
/// Holds one configuration per method. The solver itself is stateless
/// between calls; each call builds its own generator, assignment and
/// trajectory, so one instance can serve several threads.
///
/// # Examples
///
/// ```
/// use u_maxsat::formula::Formula;
/// use u_maxsat::{MaxSatSolver, Method};
///
/// let formula: Formula = "1 2\n-1\n".parse().unwrap();
/// let solver = MaxSatSolver::default().with_seed(3);
/// let solution = solver.solve_named(&formula, "HC").unwrap();
/// assert_eq!(solution.score, 2);
/// assert_eq!(solution.method, Method::HillClimbing);
/// assert!(solver.solve_named(&formula, "tabu").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaxSatSolver {
    pub sa: SaConfig,
    pub hc: HcConfig,
}

impl MaxSatSolver {
    pub fn new(sa: SaConfig, hc: HcConfig) -> Self {
        Self { sa, hc }
    }

    /// Seeds both methods.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sa.seed = Some(seed);
        self.hc.seed = Some(seed);
        self
    }

    /// Runs `method` on `formula`.
    pub fn solve(&self, formula: &Formula, method: Method) -> Result<Solution> {
        self.solve_with_cancel(formula, method, None)
    }

    /// Parses `name` as a [`Method`] before any search begins, then solves.
    pub fn solve_named(&self, formula: &Formula, name: &str) -> Result<Solution> {
        let method: Method = name.parse()?;
        self.solve(formula, method)
    }

    /// Runs `method` with an optional cancellation token.
    pub fn solve_with_cancel(
        &self,
        formula: &Formula,
        method: Method,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Solution> {
        match method {
            Method::SimulatedAnnealing => {
                SaRunner::run_with_cancel(formula, &self.sa, cancel).map(Solution::from)
            }
            Method::HillClimbing => {
                HcRunner::run_with_cancel(formula, &self.hc, cancel).map(Solution::from)
            }
        }
    }
}
