//! Numeric invariants checked once at construction.
//!
//! Sizing inputs arrive from design-day data and user input, so a handful of
//! quantities (capacitance rates, effectiveness, humidity ratio) are wrapped
//! in [`Constrained<T, C>`] to make their valid range part of the type.
//!
//! Three markers are provided:
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//! - [`UnitInterval`]: closed interval `0 ≤ x ≤ 1`
//!
//! ```
//! use twine_sizing::support::constraint::{NonNegative, StrictlyPositive};
//!
//! assert!(NonNegative::new(0.0).is_ok());
//! assert!(StrictlyPositive::new(0.0).is_err());
//! assert!(NonNegative::new(f64::NAN).is_err());
//! ```

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;
use uom::si::{f64::Ratio, ratio::ratio};

/// A numeric invariant enforced by [`Constrained`].
pub trait Constraint<T> {
    /// Checks that `value` satisfies the constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// A violated [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that satisfied constraint `C` when it was built.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` after checking it against `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Builds a [`Constrained<T, NonNegative>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonNegative>> {
        Constrained::new(value)
    }

    /// The non-negative zero.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Builds a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> ConstraintResult<Constrained<T, StrictlyPositive>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Closed unit interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Builds a [`Constrained<T, UnitInterval>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value lies outside `[0, 1]` or is `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> ConstraintResult<Constrained<T, UnitInterval>> {
        Constrained::new(value)
    }
}

/// Supplies the interval endpoints for [`UnitInterval`].
pub trait UnitBounds: PartialOrd + Sized {
    fn lower() -> Self;
    fn upper() -> Self;
}

impl UnitBounds for f64 {
    fn lower() -> Self {
        0.0
    }
    fn upper() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn lower() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn upper() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (
            value.partial_cmp(&T::lower()),
            value.partial_cmp(&T::upper()),
        ) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
