//! Simulated Annealing (SA) for MaxSAT.
//!
//! Each iteration perturbs the current assignment by flipping every bit
//! independently with a small probability, scores the candidate, and
//! accepts it by the Metropolis criterion: always when it satisfies more
//! clauses, otherwise with probability `exp(delta / T)`. The temperature
//! follows a [`CoolingSchedule`] over the iteration budget.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
