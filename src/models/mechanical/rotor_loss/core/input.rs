//! Input types for rotor loss calculations.

mod normalized;
mod raw;
mod time;

pub use normalized::{NormalizedMeasurement, normalize};
pub use raw::RawMeasurement;
pub use time::{TimeEntry, TimeFormat, parse_time};
