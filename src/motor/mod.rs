//! Motor module for phase-stepper.
//!
//! Provides the stepper motor driver, its builder, and the built-in variants.

mod builder;
mod driver;
mod position;
pub mod variant;

pub use builder::StepperMotorBuilder;
pub use driver::{StepperMotor, DEFAULT_WAIT_POLL_US};
pub use position::Position;
pub use variant::{MotorSpec, MotorVariant};
