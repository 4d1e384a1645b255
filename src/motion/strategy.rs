//! Execution strategy selection.

use serde::Deserialize;

/// How a motion command is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Step in the caller's context with compensated delays; returns when done.
    Blocking,
    /// Arm the periodic timer and step on each tick; returns immediately.
    #[default]
    Async,
}
