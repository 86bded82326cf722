//! Results of a rotor loss calculation.

use uom::si::f64::{
    Acceleration, AngularAcceleration, AngularVelocity, MomentOfInertia, Power, Ratio, Torque,
};

/// Everything computed from one drop test and one coast-down test, in SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsResult {
    /// Acceleration of the falling mass.
    pub linear_acceleration: Acceleration,

    /// Angular acceleration of the assembly during the drop.
    pub angular_acceleration: AngularAcceleration,

    /// Torque applied by the string during the drop.
    pub drop_torque: Torque,

    /// Moment of inertia inferred from the drop test.
    pub moment_of_inertia: MomentOfInertia,

    /// Angular acceleration during the coast-down.
    ///
    /// Negative while the assembly is slowing down.
    pub coast_deceleration: AngularAcceleration,

    /// Magnitude of the torque lost to friction.
    pub friction_torque: Torque,

    /// Drive torque (`I·α`) plus friction torque.
    pub total_torque: Torque,

    /// Speed the power figures are evaluated at.
    pub operating_speed: AngularVelocity,

    /// Total torque times operating speed.
    pub power: Power,

    /// `power` in mechanical horsepower (745.7 W/HP).
    pub horsepower: f64,

    /// Fraction of the total torque lost to friction.
    pub power_loss: Ratio,

    /// Multiplier for externally measured horsepower to account for friction.
    pub correction_factor: Ratio,

    /// Set when the drop-test acceleration is too small for a trustworthy
    /// inertia estimate. The result is still computed.
    pub low_signal_warning: bool,
}
