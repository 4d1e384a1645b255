//! # phase-stepper
//!
//! Phase-table driver for 4-wire stepper motors (28BYJ-48 class) with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Full-step and half-step**: built-in excitation tables and motor variants
//! - **Circular position**: absolute position tracked modulo one revolution
//! - **Shortest path**: target moves pick the shorter way round unless told otherwise
//! - **Two execution strategies**: blocking with step timing compensation, or
//!   timer-driven with start/stop/wait
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use phase_stepper::{MotorVariant, StepperMotor, Degrees};
//!
//! let mut motor = StepperMotor::builder()
//!     .variant(MotorVariant::HalfStep)
//!     .outputs([in1, in2, in3, in4])
//!     .delay(delay)
//!     .timer(timer)
//!     .clock(clock)
//!     .build()?;
//!
//! // Blocking: half a turn backwards
//! motor.step(-2048)?;
//!
//! // Timer driven: shortest way to 90 degrees
//! motor.run_to_angle(Degrees(90.0), None)?;
//! motor.wait()?;
//! ```
//!
//! In an interrupt-driven setup, keep the motor where the timer interrupt
//! handler can reach it and call [`StepperMotor::on_tick`] from there.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and host timer/clock/delay
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod motion;
pub mod motor;
pub mod phase;

#[cfg(feature = "std")]
pub mod std_support;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, SystemConfig};
pub use error::{Error, Result};
pub use hal::{Clock, PeriodicTimer, PhaseOutputs};
pub use motion::{Direction, Strategy, TickOutcome};
pub use motor::{MotorVariant, StepperMotor, StepperMotorBuilder};
pub use phase::{PhaseSequencer, PhaseTable, PhaseVector};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::Degrees;
