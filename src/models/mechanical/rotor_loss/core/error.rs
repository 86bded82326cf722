use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::TimeFormat;

/// The measurement (or derived quantity) an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Mass,
    Radius,
    DropHeight,
    FallTime,
    StartRpm,
    EndRpm,
    CoastTime,
    /// Sum of drop-test torque and friction torque.
    TotalTorque,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mass => "mass",
            Self::Radius => "pulley radius",
            Self::DropHeight => "drop height",
            Self::FallTime => "drop time",
            Self::StartRpm => "start RPM",
            Self::EndRpm => "end RPM",
            Self::CoastTime => "coast-down time",
            Self::TotalTorque => "total torque",
        })
    }
}

/// A time entry that could not be read in the selected format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read {input:?} as {format}: {reason}")]
pub struct ParseError {
    /// The text as entered.
    pub input: String,

    /// The format the text was read with.
    pub format: TimeFormat,

    /// What was wrong with it.
    pub reason: &'static str,
}

impl ParseError {
    pub(super) fn new(input: &str, format: TimeFormat, reason: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            format,
            reason,
        }
    }
}

/// Errors that can occur while running a rotor loss calculation.
///
/// Every variant names the [`Measurement`] at fault so a caller can point
/// the user at the field to correct.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A time entry was malformed.
    #[error("invalid {measurement}")]
    Parse {
        measurement: Measurement,
        #[source]
        source: ParseError,
    },

    /// A formula would divide by this zero-valued quantity.
    #[error("{measurement} must not be zero")]
    DivisionByZero { measurement: Measurement },

    /// A measurement is negative where that is not physical, or not a number.
    #[error("invalid {measurement}")]
    InvalidMeasurement {
        measurement: Measurement,
        #[source]
        source: ConstraintError,
    },
}

impl CalcError {
    /// Maps a constraint violation on `measurement` to the matching error.
    ///
    /// A zero divisor becomes [`CalcError::DivisionByZero`]; anything else is
    /// reported as [`CalcError::InvalidMeasurement`].
    pub(super) fn constraint(measurement: Measurement, err: ConstraintError) -> Self {
        match err {
            ConstraintError::Zero => Self::DivisionByZero { measurement },
            source => Self::InvalidMeasurement {
                measurement,
                source,
            },
        }
    }

    /// Returns the measurement this error refers to.
    #[must_use]
    pub fn measurement(&self) -> Measurement {
        match *self {
            Self::Parse { measurement, .. }
            | Self::DivisionByZero { measurement }
            | Self::InvalidMeasurement { measurement, .. } => measurement,
        }
    }
}
