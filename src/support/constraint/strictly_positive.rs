use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is greater than zero.
///
/// Use this for lengths and durations that are divided by and have no
/// physical meaning when negative, such as a pulley radius or a stopwatch time.
///
/// # Examples
///
/// ```
/// use rotor_loss_models::support::constraint::{ConstraintError, StrictlyPositive};
///
/// assert!(StrictlyPositive::new(0.05).is_ok());
/// assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
/// assert_eq!(StrictlyPositive::new(-0.05).unwrap_err(), ConstraintError::Negative);
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> ConstraintResult<Constrained<T, StrictlyPositive>> {
        Constrained::<T, StrictlyPositive>::new(value)
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
