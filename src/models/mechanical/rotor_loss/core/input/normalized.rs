use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Mass, Time},
};

use crate::models::mechanical::rotor_loss::core::{CalcError, Measurement};

use super::RawMeasurement;

/// Drop and coast-down measurements expressed as SI quantities.
///
/// Construction does not validate values: a zero radius or a zero time is
/// carried through and rejected by the calculation that would divide by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedMeasurement {
    pub mass: Mass,
    pub radius: Length,
    pub drop_height: Length,
    pub fall_time: Time,
    pub start_speed: AngularVelocity,
    pub end_speed: AngularVelocity,
    pub coast_time: Time,
}

/// Converts a raw measurement to SI.
///
/// Masses and lengths are converted according to the raw unit system.
/// Times and speeds do not depend on it.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] if either time entry is malformed.
pub fn normalize(raw: &RawMeasurement) -> Result<NormalizedMeasurement, CalcError> {
    let units = raw.unit_system;

    let fall_time = raw.fall_time.to_time().map_err(|source| CalcError::Parse {
        measurement: Measurement::FallTime,
        source,
    })?;
    let coast_time = raw.coast_time.to_time().map_err(|source| CalcError::Parse {
        measurement: Measurement::CoastTime,
        source,
    })?;

    Ok(NormalizedMeasurement {
        mass: units.mass(raw.mass),
        radius: units.radius(raw.radius),
        drop_height: units.drop_height(raw.drop_height),
        fall_time,
        start_speed: AngularVelocity::new::<revolution_per_minute>(raw.rpm1),
        end_speed: AngularVelocity::new::<revolution_per_minute>(raw.rpm2),
        coast_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::radian_per_second, length::meter, mass::kilogram, time::second,
    };

    use crate::models::mechanical::rotor_loss::core::{
        ParseError, TimeEntry, TimeFormat, test_support,
    };
    use crate::support::units::UnitSystem;

    #[test]
    fn metric_is_identity() {
        let n = normalize(&test_support::metric_scenario()).unwrap();

        assert_relative_eq!(n.mass.get::<kilogram>(), 2.0);
        assert_relative_eq!(n.radius.get::<meter>(), 0.05);
        assert_relative_eq!(n.drop_height.get::<meter>(), 1.0);
        assert_relative_eq!(n.fall_time.get::<second>(), 1.0);
        assert_relative_eq!(n.coast_time.get::<second>(), 5.0);
        assert_relative_eq!(
            n.start_speed.get::<radian_per_second>(),
            100.0 * std::f64::consts::PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn imperial_converts_lengths_and_mass_only() {
        let raw = RawMeasurement {
            mass: 10.0,
            radius: 2.0,
            drop_height: 3.0,
            unit_system: UnitSystem::Imperial,
            ..test_support::metric_scenario()
        };
        let n = normalize(&raw).unwrap();

        assert_relative_eq!(n.mass.get::<kilogram>(), 4.535_92);
        assert_relative_eq!(n.radius.get::<meter>(), 0.0508);
        assert_relative_eq!(n.drop_height.get::<meter>(), 0.9144, max_relative = 1e-12);
        assert_relative_eq!(n.fall_time.get::<second>(), 1.0);
        assert_relative_eq!(n.start_speed.get::<revolution_per_minute>(), 3000.0);
    }

    #[test]
    fn imperial_round_trip_reproduces_entries() {
        let raw = test_support::imperial_scenario();
        let n = normalize(&raw).unwrap();
        let units = raw.unit_system;

        assert_relative_eq!(units.mass_value(n.mass), raw.mass, max_relative = 1e-6);
        assert_relative_eq!(units.radius_value(n.radius), raw.radius, max_relative = 1e-6);
        assert_relative_eq!(
            units.drop_height_value(n.drop_height),
            raw.drop_height,
            max_relative = 1e-6
        );
    }

    #[test]
    fn zeros_pass_through() {
        let raw = RawMeasurement {
            radius: 0.0,
            fall_time: TimeEntry::text("0:00", TimeFormat::MinutesSeconds),
            ..test_support::metric_scenario()
        };
        let n = normalize(&raw).unwrap();
        assert_relative_eq!(n.radius.get::<meter>(), 0.0);
        assert_relative_eq!(n.fall_time.get::<second>(), 0.0);
    }

    #[test]
    fn malformed_times_name_the_measurement() {
        let raw = RawMeasurement {
            coast_time: TimeEntry::text("abc:def", TimeFormat::MinutesSeconds),
            ..test_support::metric_scenario()
        };
        let err = normalize(&raw).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Parse {
                measurement: Measurement::CoastTime,
                source: ParseError { .. },
            }
        ));

        let raw = RawMeasurement {
            fall_time: TimeEntry::text("1.5s", TimeFormat::Seconds),
            ..test_support::metric_scenario()
        };
        assert_eq!(
            normalize(&raw).unwrap_err().measurement(),
            Measurement::FallTime
        );
    }
}
