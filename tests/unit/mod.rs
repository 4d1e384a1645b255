//! Unit test harness for phase-stepper.
//!
//! This module organizes tests for the configuration surface.

mod config_parsing;
mod config_validation;
