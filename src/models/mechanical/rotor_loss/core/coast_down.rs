//! Friction torque from an unpowered coast-down.
//!
//! With no applied torque, the assembly slows only under friction. Given the
//! inertia from the drop test, the deceleration between two measured speeds
//! gives the friction torque:
//!
//! ```text
//! α_f = (ω₂ − ω₁) / t
//! T_f = |I · α_f|
//! ```

use log::trace;
use uom::si::{
    angular_acceleration::radian_per_second_squared,
    angular_velocity::radian_per_second,
    f64::{AngularAcceleration, MomentOfInertia, Torque},
    moment_of_inertia::kilogram_square_meter,
    time::second,
    torque::newton_meter,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{CalcError, Measurement, NormalizedMeasurement};

/// Quantities derived from a coast-down test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CoastDown {
    /// Signed; negative while the assembly is slowing down.
    pub(super) deceleration: AngularAcceleration,
    pub(super) friction_torque: Torque,
}

/// Evaluates the coast-down test for an assembly with inertia `moi`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] for a zero coast-down time, and
/// [`CalcError::InvalidMeasurement`] for a negative coast-down time or
/// negative or non-numeric speeds.
pub(super) fn coast_down(
    n: &NormalizedMeasurement,
    moi: MomentOfInertia,
) -> Result<CoastDown, CalcError> {
    let omega1 = NonNegative::new(n.start_speed)
        .map_err(|err| CalcError::constraint(Measurement::StartRpm, err))?
        .into_inner()
        .get::<radian_per_second>();
    let omega2 = NonNegative::new(n.end_speed)
        .map_err(|err| CalcError::constraint(Measurement::EndRpm, err))?
        .into_inner()
        .get::<radian_per_second>();
    let t = StrictlyPositive::new(n.coast_time)
        .map_err(|err| CalcError::constraint(Measurement::CoastTime, err))?
        .into_inner()
        .get::<second>();

    let alpha_f = (omega2 - omega1) / t;
    let friction = (moi.get::<kilogram_square_meter>() * alpha_f).abs();

    trace!("coast-down: α_f={alpha_f} rad/s², T_f={friction} N·m");

    Ok(CoastDown {
        deceleration: AngularAcceleration::new::<radian_per_second_squared>(alpha_f),
        friction_torque: Torque::new::<newton_meter>(friction),
    })
}
