//! Mechanical systems models.
//!
//! This module contains models for rotating machinery and drivetrain testing.

pub mod rotor_loss;
