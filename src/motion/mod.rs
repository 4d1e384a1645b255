//! Motion module for phase-stepper.
//!
//! Provides direction handling, target arithmetic on the circular position
//! space, and the asynchronous motion state driven by timer ticks.

mod direction;
mod executor;
mod strategy;
pub mod target;

pub use direction::Direction;
pub use executor::{AsyncMotion, TickOutcome};
pub use strategy::Strategy;
pub use target::{angle_to_target, normalize_target, resolve_direction, steps_between};
