//! Presentation of results in the user's unit system.

use std::fmt;

use uom::si::{
    angular_acceleration::radian_per_second_squared,
    power::watt,
    ratio::{percent, ratio},
};

use crate::support::units::UnitSystem;

use super::PhysicsResult;

/// Unit label for angular accelerations, shared by both unit systems.
const ANGULAR_ACCELERATION_LABEL: &str = "rad/s²";

/// A number paired with its unit label and display precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayValue {
    pub value: f64,
    pub unit: &'static str,

    /// Fixed number of decimal places.
    pub precision: usize,
}

impl DisplayValue {
    fn new(value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            value,
            unit,
            precision,
        }
    }

    /// Returns the value rounded to its display precision, without the unit.
    #[must_use]
    pub fn rounded(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*} {}", self.precision, self.value, self.unit)
    }
}

/// A [`PhysicsResult`] expressed in a chosen unit system, ready to show.
///
/// Moment of inertia, coast-down deceleration, and the correction factor use
/// four decimal places; torques, accelerations, and powers use three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayResult {
    pub unit_system: UnitSystem,
    pub moment_of_inertia: DisplayValue,
    pub drop_torque: DisplayValue,
    pub linear_acceleration: DisplayValue,
    pub angular_acceleration: DisplayValue,
    pub coast_deceleration: DisplayValue,
    pub friction_torque: DisplayValue,
    pub total_torque: DisplayValue,

    /// Power in watts. Only reported in [`UnitSystem::Metric`].
    pub power: Option<DisplayValue>,

    pub horsepower: DisplayValue,
    pub power_loss: DisplayValue,
    pub correction_factor: DisplayValue,

    /// See [`PhysicsResult::low_signal_warning`].
    pub low_signal_warning: bool,
}

/// Re-expresses `r` in `unit_system` with matching unit labels.
#[must_use]
pub fn format(r: &PhysicsResult, unit_system: UnitSystem) -> DisplayResult {
    let units = unit_system;

    let torque = |t| DisplayValue::new(units.torque_value(t), units.torque_label(), 3);
    let power = match units {
        UnitSystem::Metric => Some(DisplayValue::new(r.power.get::<watt>(), "W", 3)),
        UnitSystem::Imperial => None,
    };

    DisplayResult {
        unit_system,
        moment_of_inertia: DisplayValue::new(
            units.moment_of_inertia_value(r.moment_of_inertia),
            units.moment_of_inertia_label(),
            4,
        ),
        drop_torque: torque(r.drop_torque),
        linear_acceleration: DisplayValue::new(
            units.acceleration_value(r.linear_acceleration),
            units.acceleration_label(),
            3,
        ),
        angular_acceleration: DisplayValue::new(
            r.angular_acceleration.get::<radian_per_second_squared>(),
            ANGULAR_ACCELERATION_LABEL,
            3,
        ),
        coast_deceleration: DisplayValue::new(
            r.coast_deceleration.get::<radian_per_second_squared>(),
            ANGULAR_ACCELERATION_LABEL,
            4,
        ),
        friction_torque: torque(r.friction_torque),
        total_torque: torque(r.total_torque),
        power,
        horsepower: DisplayValue::new(r.horsepower, "HP", 3),
        power_loss: DisplayValue::new(r.power_loss.get::<percent>(), "%", 3),
        correction_factor: DisplayValue::new(r.correction_factor.get::<ratio>(), "x", 4),
        low_signal_warning: r.low_signal_warning,
    }
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Drop Test Results")?;
        writeln!(f, "• Moment of Inertia: {}", self.moment_of_inertia)?;
        writeln!(f, "• Torque from Falling Mass: {}", self.drop_torque)?;
        writeln!(f, "• Linear Acceleration: {}", self.linear_acceleration)?;
        writeln!(f, "• Angular Acceleration: {}", self.angular_acceleration)?;
        if self.low_signal_warning {
            writeln!(
                f,
                "⚠ The drop speed is too slow for reliable readings. \
                 Try increasing the mass or reducing the drop time."
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Coast-Down Results")?;
        writeln!(f, "• Angular Deceleration: {}", self.coast_deceleration)?;
        writeln!(f, "• Friction Torque: {}", self.friction_torque)?;

        writeln!(f)?;
        writeln!(f, "Summary")?;
        writeln!(f, "• Total Torque: {}", self.total_torque)?;
        if let Some(power) = self.power {
            writeln!(f, "• Power: {power}")?;
        }
        writeln!(f, "• Horsepower: {}", self.horsepower)?;
        writeln!(f, "• Power Loss: {}", self.power_loss)?;
        writeln!(f, "• System Moment of Inertia: {}", self.moment_of_inertia)?;
        writeln!(
            f,
            "• Horsepower Correction Multiplier: {}",
            self.correction_factor
        )?;
        write!(
            f,
            "Multiply any dyno-measured horsepower value by this factor \
             to correct for system losses."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::mechanical::rotor_loss::core::{
        EngineConfig, compute, normalize, test_support,
    };

    fn scenario() -> PhysicsResult {
        let n = normalize(&test_support::metric_scenario()).unwrap();
        compute(&n, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn metric_labels_and_precision() {
        let d = format(&scenario(), UnitSystem::Metric);

        assert_eq!(d.moment_of_inertia.unit, "kg·m²");
        assert_eq!(d.moment_of_inertia.precision, 4);
        assert_eq!(d.moment_of_inertia.rounded(), "0.0195");

        assert_eq!(d.drop_torque.unit, "N·m");
        assert_eq!(d.drop_torque.to_string(), "0.781 N·m");
        assert_eq!(d.friction_torque.unit, "N·m");
        assert_eq!(d.total_torque.unit, "N·m");

        assert_eq!(d.linear_acceleration.to_string(), "2.000 m/s²");
        assert_eq!(d.angular_acceleration.to_string(), "40.000 rad/s²");
        assert_eq!(d.coast_deceleration.to_string(), "-10.4720 rad/s²");

        let power = d.power.expect("metric reports watts");
        assert_eq!(power.unit, "W");
        assert_eq!(power.precision, 3);
        assert_eq!(d.horsepower.unit, "HP");

        assert_eq!(d.correction_factor.precision, 4);
        assert_eq!(d.correction_factor.rounded(), "1.2618");
    }

    #[test]
    fn imperial_labels_and_values() {
        let r = scenario();
        let metric = format(&r, UnitSystem::Metric);
        let d = format(&r, UnitSystem::Imperial);

        assert_eq!(d.moment_of_inertia.unit, "slug·ft²");
        assert_relative_eq!(
            d.moment_of_inertia.value,
            metric.moment_of_inertia.value / 1.355_82 * 0.737_562_149,
            max_relative = 1e-12
        );

        for (imperial, si) in [
            (d.drop_torque, metric.drop_torque),
            (d.friction_torque, metric.friction_torque),
            (d.total_torque, metric.total_torque),
        ] {
            assert_eq!(imperial.unit, "ft·lbf");
            assert_eq!(imperial.precision, 3);
            assert_relative_eq!(imperial.value, si.value / 1.355_82, max_relative = 1e-12);
        }

        assert_eq!(d.linear_acceleration.unit, "ft/s²");
        assert_relative_eq!(d.linear_acceleration.value, 2.0 / 0.3048, max_relative = 1e-12);

        // Power is only reported as horsepower.
        assert!(d.power.is_none());
        assert_eq!(d.horsepower, metric.horsepower);

        // Unit-free and rotational values do not change.
        assert_eq!(d.angular_acceleration, metric.angular_acceleration);
        assert_eq!(d.coast_deceleration, metric.coast_deceleration);
        assert_eq!(d.power_loss, metric.power_loss);
        assert_eq!(d.correction_factor, metric.correction_factor);
    }

    #[test]
    fn renders_summary() {
        let text = format(&scenario(), UnitSystem::Metric).to_string();

        assert!(text.contains("• Moment of Inertia: 0.0195 kg·m²"));
        assert!(text.contains("• Friction Torque: 0.204 N·m"));
        assert!(text.contains("• Horsepower Correction Multiplier: 1.2618 x"));
        assert!(text.contains("• Power: "));
        assert!(!text.contains("too slow"));

        let text = format(&scenario(), UnitSystem::Imperial).to_string();
        assert!(text.contains("slug·ft²"));
        assert!(!text.contains("• Power: "));
    }

    #[test]
    fn renders_low_signal_advisory() {
        let r = PhysicsResult {
            low_signal_warning: true,
            ..scenario()
        };
        let d = format(&r, UnitSystem::Metric);
        assert!(d.low_signal_warning);
        assert!(d.to_string().contains("too slow for reliable readings"));
    }
}
