//! Position tracking on one revolution.

use crate::config::units::Degrees;
use crate::motion::Direction;

/// Motor position tracker.
///
/// Position is kept in `[0, steps_per_revolution)` and wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Current position in steps (from origin)
    steps: u32,
    /// Steps in one full revolution
    steps_per_revolution: u32,
}

impl Position {
    /// Create a position tracker at the origin.
    #[inline]
    pub fn new(steps_per_revolution: u32) -> Self {
        Self {
            steps: 0,
            steps_per_revolution,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Get current position in degrees.
    #[inline]
    pub fn degrees(&self) -> Degrees {
        Degrees::from_steps(self.steps, self.steps_per_revolution)
    }

    /// Get steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Move one step in `direction`, wrapping around the revolution.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        let next = (i64::from(self.steps) + direction.sign())
            .rem_euclid(i64::from(self.steps_per_revolution));
        self.steps = next as u32;
    }

    /// Set current position as the new origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.steps = 0;
    }
}
