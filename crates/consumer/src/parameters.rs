use std::fmt;

use thiserror::Error;

use crate::{
    ConsumerProblem,
    constraint::{Constrained, Constraint, ConstraintError},
};

/// Names one of the five model inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Utility share `a`.
    A,
    /// Substitution parameter `p`.
    P,
    /// Price of good X.
    Px,
    /// Price of good Y.
    Py,
    /// Income.
    M,
}

impl Parameter {
    /// Returns the short symbol used in messages, e.g. `px`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::P => "p",
            Self::Px => "px",
            Self::Py => "py",
            Self::M => "m",
        }
    }

    /// Checks `value` against `C`, attributing any violation to this parameter.
    pub(crate) fn constrain<C: Constraint>(
        self,
        value: f64,
    ) -> Result<Constrained<C>, ParameterError> {
        Constrained::new(value).map_err(|source| ParameterError {
            parameter: self,
            source,
        })
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A model input outside its admissible domain.
///
/// Displays as `'<parameter>' <reason>`, for example
/// `'a' must be strictly between 0 and 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{parameter}' {source}")]
pub struct ParameterError {
    pub parameter: Parameter,
    #[source]
    pub source: ConstraintError,
}

/// The five scalar inputs of a consumer problem, not yet validated.
///
/// This is the record front ends fill from user input or parameter files.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    pub a: f64,
    pub p: f64,
    pub px: f64,
    pub py: f64,
    pub m: f64,
}

impl Parameters {
    /// Validates the inputs and builds the corresponding problem.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] in the order `a, p, px, py, m`.
    pub fn problem(&self) -> Result<ConsumerProblem, ParameterError> {
        ConsumerProblem::new(self.a, self.p, self.px, self.py, self.m)
    }
}
