use uom::si::{acceleration::meter_per_second_squared, f64::Acceleration};

/// Which rotational speed power is evaluated at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperatingSpeed {
    /// The coast-down start speed (`rpm1`).
    ///
    /// This is the defined operating point. It assumes the assembly runs at
    /// its peak measured speed, which overstates power when the coast-down
    /// spans a wide speed range.
    #[default]
    Start,

    /// The mean of the coast-down start and end speeds.
    Mean,
}

/// Engine configuration for rotor loss calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Gravitational acceleration acting on the drop-test mass.
    pub gravity: Acceleration,

    /// Drop-test accelerations below this are flagged as too weak to trust.
    pub low_signal_threshold: Acceleration,

    /// Speed at which power and horsepower are evaluated.
    pub operating_speed: OperatingSpeed,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            low_signal_threshold: Acceleration::new::<meter_per_second_squared>(0.01),
            operating_speed: OperatingSpeed::Start,
        }
    }
}
