//! Motor variants as named configuration constants.

use core::fmt;

use serde::Deserialize;

use crate::phase::PhaseTable;

/// Fixed parameters of a motor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorSpec {
    /// Excitation table cycled by the sequencer.
    pub table: PhaseTable,
    /// Steps per output revolution.
    pub steps_per_revolution: u32,
    /// Default minimum time between phase changes.
    pub step_period_ms: u32,
}

/// 28BYJ-48 driven with two coils per step.
pub const FULL_STEP: MotorSpec = MotorSpec {
    table: PhaseTable::FULL_STEP,
    steps_per_revolution: 2048,
    step_period_ms: 7,
};

/// 28BYJ-48 driven with alternating one and two coils.
pub const HALF_STEP: MotorSpec = MotorSpec {
    table: PhaseTable::HALF_STEP,
    steps_per_revolution: 4096,
    step_period_ms: 5,
};

/// Built-in motor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorVariant {
    /// See [`FULL_STEP`].
    #[default]
    FullStep,
    /// See [`HALF_STEP`].
    HalfStep,
}

impl MotorVariant {
    /// Parameters of this variant.
    #[inline]
    pub fn spec(self) -> &'static MotorSpec {
        match self {
            MotorVariant::FullStep => &FULL_STEP,
            MotorVariant::HalfStep => &HALF_STEP,
        }
    }

    /// Variant name.
    pub fn name(self) -> &'static str {
        match self {
            MotorVariant::FullStep => "FullStepMotor",
            MotorVariant::HalfStep => "HalfStepMotor",
        }
    }
}

impl fmt::Display for MotorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_constants() {
        let full = MotorVariant::FullStep.spec();
        assert_eq!(full.table.len(), 4);
        assert_eq!(full.steps_per_revolution, 2048);

        let half = MotorVariant::HalfStep.spec();
        assert_eq!(half.table.len(), 8);
        assert_eq!(half.steps_per_revolution, 4096);
        assert!(half.step_period_ms < full.step_period_ms);
    }
}
