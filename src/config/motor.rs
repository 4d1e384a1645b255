//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::motion::Strategy;
use crate::motor::MotorVariant;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Excitation variant (`full_step` or `half_step`).
    pub variant: MotorVariant,

    /// Minimum time between phase changes, overriding the variant default.
    #[serde(default)]
    pub step_period_ms: Option<u32>,

    /// Steps per output revolution, overriding the variant default (gearing).
    #[serde(default)]
    pub steps_per_revolution: Option<u32>,

    /// Strategy used by `step_until` and `step_until_angle`.
    #[serde(default)]
    pub until_strategy: Strategy,

    /// Sleep between checks while waiting for an asynchronous motion.
    #[serde(default)]
    pub wait_poll_us: Option<u32>,
}

impl MotorConfig {
    /// Create a configuration using the variant defaults.
    pub fn new(name: &str, variant: MotorVariant) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            variant,
            step_period_ms: None,
            steps_per_revolution: None,
            until_strategy: Strategy::default(),
            wait_poll_us: None,
        }
    }

    /// Effective step period in milliseconds.
    pub fn effective_step_period_ms(&self) -> u32 {
        self.step_period_ms
            .unwrap_or(self.variant.spec().step_period_ms)
    }

    /// Effective steps per output revolution.
    pub fn effective_steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
            .unwrap_or(self.variant.spec().steps_per_revolution)
    }
}
