//! Imperial and SI conversions for rotor test measurements.
//!
//! This crate uses [`uom`] for every physical quantity, and all calculations
//! run in SI. The conversions here bridge two places where plain numbers in a
//! user-chosen unit system appear: raw measurements typed into a form, and
//! values written back out for display.
//!
//! The factors are the rounded shop-floor constants used throughout the
//! drop and coast-down procedures, not the exact definitions that [`uom`]
//! carries, so results line up with hand calculations.
//!
//! ```
//! use rotor_loss_models::support::units::UnitSystem;
//! use uom::si::length::meter;
//!
//! let radius = UnitSystem::Imperial.radius(2.0);
//! assert!((radius.get::<meter>() - 0.0508).abs() < 1e-12);
//! assert!((UnitSystem::Imperial.radius_value(radius) - 2.0).abs() < 1e-12);
//! ```

use std::fmt;

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Mass, MomentOfInertia, Torque},
    length::meter,
    mass::kilogram,
    moment_of_inertia::kilogram_square_meter,
    torque::newton_meter,
};

/// Kilograms per pound-mass.
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592;

/// Meters per inch.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Meters per foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Newton-meters per foot-pound-force.
pub const NEWTON_METERS_PER_FOOT_POUND: f64 = 1.355_82;

/// Slug-square-feet per kilogram-square-meter.
pub const SLUG_SQUARE_FEET_PER_KILOGRAM_SQUARE_METER: f64 = 0.737_562_149;

/// Watts per mechanical horsepower.
pub const WATTS_PER_HORSEPOWER: f64 = 745.7;

/// The unit system a user enters measurements in and reads results back in.
///
/// | Quantity            | Metric  | Imperial   |
/// |---------------------|---------|------------|
/// | mass                | kg      | lb         |
/// | pulley radius       | m       | in         |
/// | drop height         | m       | ft         |
/// | moment of inertia   | kg·m²   | slug·ft²   |
/// | torque              | N·m     | ft·lbf     |
/// | linear acceleration | m/s²    | ft/s²      |
///
/// Times, rotational speeds, and angular accelerations are the same in both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Pounds, inches, and feet.
    #[default]
    Imperial,
    /// Kilograms and meters.
    Metric,
}

impl UnitSystem {
    /// Interprets a raw mass entry (kg or lb).
    #[must_use]
    pub fn mass(self, value: f64) -> Mass {
        match self {
            Self::Metric => Mass::new::<kilogram>(value),
            Self::Imperial => Mass::new::<kilogram>(value * KILOGRAMS_PER_POUND),
        }
    }

    /// Interprets a raw pulley radius entry (m or in).
    #[must_use]
    pub fn radius(self, value: f64) -> Length {
        match self {
            Self::Metric => Length::new::<meter>(value),
            Self::Imperial => Length::new::<meter>(value * METERS_PER_INCH),
        }
    }

    /// Interprets a raw drop height entry (m or ft).
    #[must_use]
    pub fn drop_height(self, value: f64) -> Length {
        match self {
            Self::Metric => Length::new::<meter>(value),
            Self::Imperial => Length::new::<meter>(value * METERS_PER_FOOT),
        }
    }

    /// Expresses a mass in this system's entry unit.
    #[must_use]
    pub fn mass_value(self, mass: Mass) -> f64 {
        let kg = mass.get::<kilogram>();
        match self {
            Self::Metric => kg,
            Self::Imperial => kg / KILOGRAMS_PER_POUND,
        }
    }

    /// Expresses a pulley radius in this system's entry unit.
    #[must_use]
    pub fn radius_value(self, radius: Length) -> f64 {
        let m = radius.get::<meter>();
        match self {
            Self::Metric => m,
            Self::Imperial => m / METERS_PER_INCH,
        }
    }

    /// Expresses a drop height in this system's entry unit.
    #[must_use]
    pub fn drop_height_value(self, drop_height: Length) -> f64 {
        let m = drop_height.get::<meter>();
        match self {
            Self::Metric => m,
            Self::Imperial => m / METERS_PER_FOOT,
        }
    }

    /// Expresses a moment of inertia for display.
    ///
    /// The Imperial figure is `I / 1.35582 × 0.737562149`.
    #[must_use]
    pub fn moment_of_inertia_value(self, moi: MomentOfInertia) -> f64 {
        let si = moi.get::<kilogram_square_meter>();
        match self {
            Self::Metric => si,
            Self::Imperial => {
                si / NEWTON_METERS_PER_FOOT_POUND * SLUG_SQUARE_FEET_PER_KILOGRAM_SQUARE_METER
            }
        }
    }

    /// Expresses a torque for display.
    #[must_use]
    pub fn torque_value(self, torque: Torque) -> f64 {
        let si = torque.get::<newton_meter>();
        match self {
            Self::Metric => si,
            Self::Imperial => si / NEWTON_METERS_PER_FOOT_POUND,
        }
    }

    /// Expresses a linear acceleration for display.
    #[must_use]
    pub fn acceleration_value(self, acceleration: Acceleration) -> f64 {
        let si = acceleration.get::<meter_per_second_squared>();
        match self {
            Self::Metric => si,
            Self::Imperial => si / METERS_PER_FOOT,
        }
    }

    #[must_use]
    pub fn moment_of_inertia_label(self) -> &'static str {
        match self {
            Self::Metric => "kg·m²",
            Self::Imperial => "slug·ft²",
        }
    }

    #[must_use]
    pub fn torque_label(self) -> &'static str {
        match self {
            Self::Metric => "N·m",
            Self::Imperial => "ft·lbf",
        }
    }

    #[must_use]
    pub fn acceleration_label(self) -> &'static str {
        match self {
            Self::Metric => "m/s²",
            Self::Imperial => "ft/s²",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => f.write_str("Imperial (Standard)"),
            Self::Metric => f.write_str("Metric (SI)"),
        }
    }
}
