//! Numeric constraints checked once, at construction.
//!
//! Model parameters are validated by wrapping them in [`Constrained`], which
//! can only be built from a value that satisfies its marker type. After that
//! the value is trusted everywhere it flows.
//!
//! # Provided Constraints
//!
//! - [`StrictlyPositive`]: finite and greater than zero (prices, income)
//! - [`OpenUnitInterval`]: strictly between zero and one (the share `a`)
//! - [`AtMostOne`]: finite and no greater than one (the substitution `p`)
//!
//! All constraints reject NaN and infinities.

use std::marker::PhantomData;

use thiserror::Error;

/// A numeric invariant enforced by [`Constrained`].
pub trait Constraint {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: f64) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// The messages read as predicates so they can follow a parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("is not a number")]
    NotANumber,
    #[error("must be finite")]
    NotFinite,
    #[error("must be positive")]
    NotPositive,
    #[error("must be strictly between 0 and 1")]
    OutsideUnitInterval,
    #[error("must be less than or equal to 1")]
    AboveOne,
}

/// An `f64` known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use ces_consumer::constraint::{Constrained, StrictlyPositive};
///
/// let price = Constrained::<StrictlyPositive>::new(2.5).unwrap();
/// assert_eq!(price.into_inner(), 2.5);
///
/// assert!(Constrained::<StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<C: Constraint> {
    value: f64,
    _marker: PhantomData<C>,
}

impl<C: Constraint> Constrained<C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        C::check(value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> f64 {
        self.value
    }
}

impl<C: Constraint> AsRef<f64> for Constrained<C> {
    fn as_ref(&self) -> &f64 {
        &self.value
    }
}

fn check_finite(value: f64) -> Result<(), ConstraintError> {
    if value.is_nan() {
        Err(ConstraintError::NotANumber)
    } else if value.is_infinite() {
        Err(ConstraintError::NotFinite)
    } else {
        Ok(())
    }
}

/// Marker for values in `(0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl Constraint for StrictlyPositive {
    fn check(value: f64) -> Result<(), ConstraintError> {
        check_finite(value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConstraintError::NotPositive)
        }
    }
}

/// Marker for values in `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpenUnitInterval;

impl Constraint for OpenUnitInterval {
    fn check(value: f64) -> Result<(), ConstraintError> {
        check_finite(value)?;
        if value > 0.0 && value < 1.0 {
            Ok(())
        } else {
            Err(ConstraintError::OutsideUnitInterval)
        }
    }
}

/// Marker for values in `(-∞, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtMostOne;

impl Constraint for AtMostOne {
    fn check(value: f64) -> Result<(), ConstraintError> {
        check_finite(value)?;
        if value <= 1.0 {
            Ok(())
        } else {
            Err(ConstraintError::AboveOne)
        }
    }
}
