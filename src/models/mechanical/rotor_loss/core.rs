//! Moment of inertia and friction loss from a drop test and a coast-down.
//!
//! A calculation runs in three one-way stages:
//!
//! 1. [`normalize`] converts a [`RawMeasurement`] to SI.
//! 2. [`compute`] evaluates the drop test, the coast-down, and the combined
//!    power and loss figures into a [`PhysicsResult`].
//! 3. [`format`] expresses that result in the user's unit system.
//!
//! Every stage is a pure function of its inputs.

mod coast_down;
mod compute;
mod config;
mod display;
mod error;
mod input;
mod results;

#[cfg(test)]
pub(crate) mod test_support;

pub use compute::{compute, correction_factor};
pub use config::{EngineConfig, OperatingSpeed};
pub use display::{DisplayResult, DisplayValue, format};
pub use error::{CalcError, Measurement, ParseError};
pub use input::{
    NormalizedMeasurement, RawMeasurement, TimeEntry, TimeFormat, normalize, parse_time,
};
pub use results::PhysicsResult;
