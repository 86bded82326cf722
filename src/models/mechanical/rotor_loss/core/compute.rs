//! Combines the drop test and the coast-down into power and loss figures.

use log::{debug, warn};
use uom::si::{
    angular_acceleration::radian_per_second_squared,
    angular_velocity::radian_per_second,
    f64::{AngularAcceleration, MomentOfInertia, Power, Ratio, Torque},
    moment_of_inertia::kilogram_square_meter,
    power::watt,
    ratio::ratio,
    torque::newton_meter,
};

use crate::support::{constraint::NonZero, units::WATTS_PER_HORSEPOWER};

use super::{
    CalcError, EngineConfig, Measurement, NormalizedMeasurement, OperatingSpeed, PhysicsResult,
    coast_down::coast_down, drop_test::drop_test,
};

/// Computes inertia, friction, power, and the horsepower correction factor.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] if the radius, fall time, drop
/// height, coast-down time, or resulting total torque is zero, and
/// [`CalcError::InvalidMeasurement`] for negative or non-numeric inputs.
pub fn compute(
    n: &NormalizedMeasurement,
    config: &EngineConfig,
) -> Result<PhysicsResult, CalcError> {
    let drop = drop_test(n, config.gravity)?;

    let low_signal_warning = drop.linear_acceleration < config.low_signal_threshold;
    if low_signal_warning {
        warn!(
            "drop-test acceleration {:?} is below {:?}; inertia estimate is unreliable",
            drop.linear_acceleration, config.low_signal_threshold
        );
    }

    let coast = coast_down(n, drop.moment_of_inertia)?;

    let moi = drop.moment_of_inertia.get::<kilogram_square_meter>();
    let alpha = drop.angular_acceleration.get::<radian_per_second_squared>();
    let friction = coast.friction_torque.get::<newton_meter>();

    let total = NonZero::new(moi * alpha + friction)
        .map_err(|err| CalcError::constraint(Measurement::TotalTorque, err))?
        .into_inner();

    let omega = match config.operating_speed {
        OperatingSpeed::Start => n.start_speed,
        OperatingSpeed::Mean => (n.start_speed + n.end_speed) / 2.0,
    };
    let power = total * omega.get::<radian_per_second>();
    let horsepower = power / WATTS_PER_HORSEPOWER;

    let correction_factor = correction_factor(
        coast.friction_torque,
        drop.moment_of_inertia,
        drop.angular_acceleration,
    );

    debug!(
        "rotor loss: I={moi} kg·m², T_total={total} N·m, P={power} W, correction={:?}",
        correction_factor
    );

    Ok(PhysicsResult {
        linear_acceleration: drop.linear_acceleration,
        angular_acceleration: drop.angular_acceleration,
        drop_torque: drop.torque,
        moment_of_inertia: drop.moment_of_inertia,
        coast_deceleration: coast.deceleration,
        friction_torque: coast.friction_torque,
        total_torque: Torque::new::<newton_meter>(total),
        operating_speed: omega,
        power: Power::new::<watt>(power),
        horsepower,
        power_loss: Ratio::new::<ratio>(friction / total),
        correction_factor,
        low_signal_warning,
    })
}

/// Returns the multiplier that corrects measured horsepower for friction.
///
/// This is `1 + T_f / (I·α)`: the ratio of total torque to the torque that
/// actually accelerated the assembly. With no drop-test rotation (`α = 0`)
/// there is nothing to correct against and the factor is exactly one.
#[must_use]
pub fn correction_factor(
    friction_torque: Torque,
    moment_of_inertia: MomentOfInertia,
    angular_acceleration: AngularAcceleration,
) -> Ratio {
    let alpha = angular_acceleration.get::<radian_per_second_squared>();
    if alpha == 0.0 {
        return Ratio::new::<ratio>(1.0);
    }

    let drive = moment_of_inertia.get::<kilogram_square_meter>() * alpha;
    Ratio::new::<ratio>(1.0 + friction_torque.get::<newton_meter>() / drive)
}
