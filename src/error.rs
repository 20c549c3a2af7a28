//! Error types.

use thiserror::Error;

/// Errors raised while building a formula or preparing a solve.
///
/// Nothing in this enum is produced by the search loops themselves:
/// once a [`Formula`](crate::formula::Formula) is constructed and a
/// configuration validated, both solvers run to completion.
#[derive(Debug, Error)]
pub enum MaxSatError {
    /// A literal references a variable outside `[0, n)`.
    #[error("clause {clause} references variable {variable}, but the formula has {num_vars} variables")]
    VariableOutOfRange {
        clause: usize,
        variable: usize,
        num_vars: usize,
    },

    /// The formula has no variables.
    #[error("formula must have at least one variable")]
    NoVariables,

    /// Method name outside {SimulatedAnnealing, HillClimbing}.
    #[error("unknown method selector `{0}` (expected SA or HC)")]
    InvalidMethodSelector(String),

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A token in a clause file could not be read as a literal.
    #[error("line {line}: invalid literal `{token}`")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MaxSatError {
    /// Returns `true` for the malformed-input family: a literal out of
    /// range or a formula without variables.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            MaxSatError::VariableOutOfRange { .. } | MaxSatError::NoVariables
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MaxSatError>;
