//! Reader for line-oriented clause files.
//!
//! One clause per line, literals as whitespace-separated signed
//! non-zero integers: `3` is `x2`, `-3` is `¬x2`. The variable count is
//! the largest magnitude seen, or the variable count of a `p cnf V C`
//! header when one is present. DIMACS files load as well: `c` comment
//! lines and SATLIB's `%` trailer are skipped, and a trailing `0` on a
//! line is taken as the clause terminator. Clauses spanning several
//! lines are not supported.
//!
//! Variable indices are bounded by the header count, or by
//! [`MAX_VARIABLES`] without one, so a stray huge literal is a parse
//! error rather than an oversized allocation.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::types::{Clause, Formula, Literal};
use crate::error::{MaxSatError, Result};

/// Largest variable count accepted from a clause file.
pub const MAX_VARIABLES: usize = 1 << 24;

/// Parses clause text into a [`Formula`].
pub fn parse_clauses(input: &str) -> Result<Formula> {
    let mut clauses = Vec::new();
    let mut header_vars: Option<usize> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(['c', '%']) {
            continue;
        }
        if line.starts_with('p') {
            header_vars = Some(parse_header(idx, line)?);
            continue;
        }

        let limit = header_vars.unwrap_or(MAX_VARIABLES);
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut literals = Vec::with_capacity(tokens.len());
        for (k, token) in tokens.iter().enumerate() {
            let value: i64 = token.parse().map_err(|_| parse_error(idx, token))?;
            if value == 0 {
                if k + 1 == tokens.len() {
                    break;
                }
                return Err(parse_error(idx, token));
            }
            let var = usize::try_from(value.unsigned_abs() - 1)
                .ok()
                .filter(|&v| v < limit)
                .ok_or_else(|| parse_error(idx, token))?;
            literals.push(Literal::new(var, value > 0));
        }

        // A lone terminator (SATLIB's trailing "0") carries no clause.
        if !literals.is_empty() {
            clauses.push(Clause::new(literals));
        }
    }

    match header_vars {
        Some(num_vars) => Formula::new(num_vars, clauses),
        None => Formula::from_clauses(clauses),
    }
}

/// Variable count from a `p cnf V C` line.
fn parse_header(idx: usize, line: &str) -> Result<usize> {
    let token = line.split_whitespace().nth(2).unwrap_or(line);
    token
        .parse::<usize>()
        .ok()
        .filter(|&v| v <= MAX_VARIABLES)
        .ok_or_else(|| parse_error(idx, token))
}

/// Reads and parses a clause file.
pub fn read_formula<P: AsRef<Path>>(path: P) -> Result<Formula> {
    let text = fs::read_to_string(path)?;
    parse_clauses(&text)
}

fn parse_error(idx: usize, token: &str) -> MaxSatError {
    MaxSatError::Parse {
        line: idx + 1,
        token: token.to_string(),
    }
}

impl FromStr for Formula {
    type Err = MaxSatError;

    fn from_str(s: &str) -> Result<Self> {
        parse_clauses(s)
    }
}
