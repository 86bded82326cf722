use crate::support::units::UnitSystem;

use super::TimeEntry;

/// The measurements from one drop test and one coast-down test, as entered.
///
/// Lengths and masses are plain numbers in the units of `unit_system`
/// (see [`UnitSystem`] for which units those are).
/// Rotational speeds are always revolutions per minute.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMeasurement {
    /// Mass hung from the string.
    pub mass: f64,

    /// Effective radius of the pulley or drum the string is wound around.
    pub radius: f64,

    /// Vertical distance the mass falls.
    pub drop_height: f64,

    /// Time for the mass to fall `drop_height` from rest.
    pub fall_time: TimeEntry,

    /// Speed at the start of the coast-down.
    pub rpm1: f64,

    /// Speed at the end of the coast-down.
    pub rpm2: f64,

    /// Time between `rpm1` and `rpm2`.
    pub coast_time: TimeEntry,

    pub unit_system: UnitSystem,
}
