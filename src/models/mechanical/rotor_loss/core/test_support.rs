use crate::support::units::UnitSystem;

use super::{RawMeasurement, TimeEntry};

/// A 2 kg mass on a 5 cm pulley falling 1 m in 1 s, then a coast-down from
/// 3000 to 2500 rpm in 5 s.
pub(crate) fn metric_scenario() -> RawMeasurement {
    RawMeasurement {
        mass: 2.0,
        radius: 0.05,
        drop_height: 1.0,
        fall_time: TimeEntry::Seconds(1.0),
        rpm1: 3000.0,
        rpm2: 2500.0,
        coast_time: TimeEntry::Seconds(5.0),
        unit_system: UnitSystem::Metric,
    }
}

/// [`metric_scenario`] entered in pounds, inches, and feet.
pub(crate) fn imperial_scenario() -> RawMeasurement {
    RawMeasurement {
        mass: 4.409,
        radius: 1.9685,
        drop_height: 3.2808,
        unit_system: UnitSystem::Imperial,
        ..metric_scenario()
    }
}
