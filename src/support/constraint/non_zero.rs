use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker type enforcing that a value is not zero.
///
/// Use this for any value that ends up as a divisor.
///
/// # Examples
///
/// ```
/// use rotor_loss_models::support::constraint::{Constrained, NonZero};
///
/// let t = Constrained::<_, NonZero>::new(1.5).unwrap();
/// assert_eq!(t.into_inner(), 1.5);
///
/// assert!(NonZero::new(-3.0).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, NonZero>> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Time},
        length::meter,
        time::second,
    };

    #[test]
    fn floats() {
        assert!(NonZero::new(-3.5).is_ok());
        assert_eq!(NonZero::new(0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(NonZero::new(-0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(
            NonZero::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn divisors() {
        assert!(NonZero::new(Length::new::<meter>(0.05)).is_ok());
        assert!(NonZero::new(Length::new::<meter>(0.0)).is_err());
        assert!(NonZero::new(Time::new::<second>(1.0)).is_ok());
        assert!(NonZero::new(Time::new::<second>(0.0)).is_err());
    }
}
