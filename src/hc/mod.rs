//! Steepest-ascent Hill Climbing (HC) with random restarts.
//!
//! Every step scores all single-variable flips and applies the best one
//! if it strictly improves the number of satisfied clauses. When no
//! flip improves, the search is at a local optimum or plateau and
//! restarts from a fresh uniformly random assignment. The run ends when
//! `max_stall_restarts` restarts happen in a row without an improving
//! move in between.
//!
//! # References
//!
//! - Selman, Levesque & Mitchell (1992), "A New Method for Solving Hard
//!   Satisfiability Problems" (GSAT)

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{steepest_move, HcResult, HcRunner};
