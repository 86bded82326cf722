//! Rotor loss model.
//!
//! Infers a rotating assembly's moment of inertia from a falling-mass drop
//! test, its friction torque from a coast-down test, and the multiplier that
//! corrects externally measured horsepower for that friction.
//!
//! [`RotorLoss`] is the [`twine_core::Model`] implementation; [`run_calculation`]
//! is a shortcut using the default [`EngineConfig`].
//!
//! # Example
//!
//! ```
//! use rotor_loss_models::models::mechanical::rotor_loss::{
//!     RawMeasurement, TimeEntry, TimeFormat, run_calculation,
//! };
//! use rotor_loss_models::support::units::UnitSystem;
//!
//! let raw = RawMeasurement {
//!     mass: 2.0,
//!     radius: 0.05,
//!     drop_height: 1.0,
//!     fall_time: TimeEntry::text("0:01", TimeFormat::MinutesSeconds),
//!     rpm1: 3000.0,
//!     rpm2: 2500.0,
//!     coast_time: TimeEntry::Seconds(5.0),
//!     unit_system: UnitSystem::Metric,
//! };
//!
//! let result = run_calculation(&raw).unwrap();
//! assert_eq!(result.correction_factor.rounded(), "1.2618");
//! ```

pub(crate) mod core;

pub use self::core::{
    CalcError, DisplayResult, DisplayValue, EngineConfig, Measurement, NormalizedMeasurement,
    OperatingSpeed, ParseError, PhysicsResult, RawMeasurement, TimeEntry, TimeFormat, compute,
    correction_factor, format, normalize, parse_time,
};

use log::debug;
use twine_core::Model;

/// Runs a full calculation with the default [`EngineConfig`].
///
/// # Errors
///
/// Returns a [`CalcError`] naming the measurement at fault if a time entry is
/// malformed, a divisor is zero, or a measurement is not physical.
pub fn run_calculation(raw: &RawMeasurement) -> Result<DisplayResult, CalcError> {
    RotorLoss::default().call(raw)
}

/// Rotor loss model with a fixed engine configuration.
///
/// Holds no state beyond its configuration, so one instance can serve any
/// number of independent calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotorLoss {
    config: EngineConfig,
}

impl RotorLoss {
    /// Creates a model that calculates with `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Model for RotorLoss {
    type Input = RawMeasurement;
    type Output = DisplayResult;
    type Error = CalcError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        debug!("rotor loss calculation: {input:?}");

        let normalized = normalize(input)?;
        let result = compute(&normalized, &self.config)?;
        Ok(format(&result, input.unit_system))
    }
}
