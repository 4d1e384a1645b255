//! Phase module for phase-stepper.
//!
//! Provides the excitation tables and the sequencer that cycles through them.

mod sequencer;
mod table;

pub use sequencer::{next_index, PhaseSequencer, PhaseStep};
pub use table::{PhaseTable, PhaseVector};
