//! # Rotor Loss Models
//!
//! Moment of inertia and frictional loss models for rotating assemblies,
//! built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Two manual tests characterize an assembly: a falling-mass drop test gives
//! its moment of inertia, and an unpowered coast-down gives its friction
//! torque. Together they yield the power lost to friction and a multiplier
//! that corrects dyno-measured horsepower for it.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! Calculations log through the [`log`] facade: requests at `debug`,
//! intermediate test results at `trace`, and unreliable drop tests at `warn`.
//! No logger is installed by this crate.

pub mod models;
pub mod support;
