//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`units`]: Imperial and SI conversions and display labels.

pub mod constraint;
pub mod units;
