//! Unit types for physical quantities.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angular position in degrees.
///
/// Used for the user-facing API. Internally converted to steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Angle of `steps` on a motor with `steps_per_revolution` steps per turn.
    #[inline]
    pub fn from_steps(steps: u32, steps_per_revolution: u32) -> Self {
        Self(steps as f32 * 360.0 / steps_per_revolution as f32)
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
}

impl UnitExt for f32 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_from_steps() {
        assert_eq!(Degrees::from_steps(1024, 2048).value(), 180.0);
        assert_eq!(Degrees::from_steps(0, 4096).value(), 0.0);
        assert!((Degrees::from_steps(1, 4096).value() - 0.087_890_625).abs() < 1e-6);
    }

    #[test]
    fn test_unit_ext() {
        assert_eq!(90.0_f32.degrees() + 45.0_f32.degrees(), Degrees(135.0));
        assert_eq!(90.0_f32.degrees() - 45.0_f32.degrees(), Degrees(45.0));
    }
}
