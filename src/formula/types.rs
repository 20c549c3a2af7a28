//! Literals, clauses and formulas.

use std::fmt;

use crate::error::{MaxSatError, Result};

/// A variable assignment: one truth value per variable.
pub type Assignment = Vec<bool>;

/// A variable together with the polarity that satisfies it.
///
/// `polarity == true` is the positive literal `x`, `false` is `¬x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// Zero-based variable index.
    pub var: usize,
    /// Value the variable must take to satisfy this literal.
    pub polarity: bool,
}

impl Literal {
    pub fn new(var: usize, polarity: bool) -> Self {
        Self { var, polarity }
    }

    pub fn positive(var: usize) -> Self {
        Self::new(var, true)
    }

    pub fn negative(var: usize) -> Self {
        Self::new(var, false)
    }

    /// Returns the complementary literal.
    pub fn negated(self) -> Self {
        Self::new(self.var, !self.polarity)
    }

    /// Whether `assignment` satisfies this literal.
    ///
    /// # Panics
    ///
    /// Panics if `self.var` is out of bounds for `assignment`.
    #[inline]
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        assignment[self.var] == self.polarity
    }

    /// Signed one-based form used by clause files (`-3` is `¬x2`).
    ///
    /// Saturates at `i64::MAX` for indices past the range of `i64`.
    pub fn to_signed(self) -> i64 {
        let v = i64::try_from(self.var).map_or(i64::MAX, |v| v.saturating_add(1));
        if self.polarity {
            v
        } else {
            -v
        }
    }
}

impl From<(usize, bool)> for Literal {
    fn from((var, polarity): (usize, bool)) -> Self {
        Self::new(var, polarity)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_signed())
    }
}

/// A disjunction of literals. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Largest variable index referenced, if any.
    pub fn max_var(&self) -> Option<usize> {
        self.literals.iter().map(|l| l.var).max()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<(usize, bool)>> for Clause {
    fn from(pairs: Vec<(usize, bool)>) -> Self {
        pairs.into_iter().map(Literal::from).collect()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, lit) in self.literals.iter().enumerate() {
            if k > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, ")")
    }
}

/// A CNF formula over `num_vars` variables.
///
/// Construction validates every literal against `num_vars` and builds
/// the per-variable occurrence lists used by
/// [`evaluate_delta`](super::evaluate_delta). There are no mutating
/// methods; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFormula", into = "RawFormula")
)]
pub struct Formula {
    num_vars: usize,
    clauses: Vec<Clause>,
    /// `occurrences[v]` lists, in ascending order and without repeats,
    /// the clauses that mention `v`.
    occurrences: Vec<Vec<usize>>,
}

impl Formula {
    /// Builds a formula, rejecting `num_vars == 0` and literals whose
    /// variable is `>= num_vars`.
    pub fn new(num_vars: usize, clauses: Vec<Clause>) -> Result<Self> {
        if num_vars == 0 {
            return Err(MaxSatError::NoVariables);
        }

        let mut occurrences = vec![Vec::new(); num_vars];
        for (ci, clause) in clauses.iter().enumerate() {
            for lit in clause.literals() {
                if lit.var >= num_vars {
                    return Err(MaxSatError::VariableOutOfRange {
                        clause: ci,
                        variable: lit.var,
                        num_vars,
                    });
                }
                let occ = &mut occurrences[lit.var];
                if occ.last() != Some(&ci) {
                    occ.push(ci);
                }
            }
        }

        Ok(Self {
            num_vars,
            clauses,
            occurrences,
        })
    }

    /// Builds a formula whose variable count is derived as
    /// `1 + max variable index`.
    ///
    /// Fails with [`MaxSatError::NoVariables`] when no clause has a literal.
    pub fn from_clauses(clauses: Vec<Clause>) -> Result<Self> {
        let num_vars = clauses
            .iter()
            .filter_map(Clause::max_var)
            .max()
            .map_or(0, |v| v + 1);
        Self::new(num_vars, clauses)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Indices of the clauses that reference `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= self.num_vars()`.
    pub fn occurrences(&self, var: usize) -> &[usize] {
        &self.occurrences[var]
    }

    /// Total literal count across all clauses.
    pub fn num_literals(&self) -> usize {
        self.clauses.iter().map(Clause::len).sum()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawFormula {
    num_vars: usize,
    clauses: Vec<Clause>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFormula> for Formula {
    type Error = MaxSatError;

    fn try_from(raw: RawFormula) -> Result<Self> {
        Formula::new(raw.num_vars, raw.clauses)
    }
}

#[cfg(feature = "serde")]
impl From<Formula> for RawFormula {
    fn from(f: Formula) -> Self {
        RawFormula {
            num_vars: f.num_vars,
            clauses: f.clauses,
        }
    }
}
