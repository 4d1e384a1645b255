//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;

use crate::config::{validate_motor, MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::hal::{Clock, PeriodicTimer, PhaseOutputs};
use crate::motion::Strategy;

use super::driver::{StepperMotor, DEFAULT_WAIT_POLL_US};
use super::variant::MotorVariant;

/// Builder for creating StepperMotor instances.
pub struct StepperMotorBuilder<OUT, DELAY, TIMER, CLOCK>
where
    OUT: PhaseOutputs,
    DELAY: DelayNs,
    TIMER: PeriodicTimer,
    CLOCK: Clock,
{
    outputs: Option<OUT>,
    delay: Option<DELAY>,
    timer: Option<TIMER>,
    clock: Option<CLOCK>,
    name: Option<heapless::String<32>>,
    variant: MotorVariant,
    step_period_ms: Option<u32>,
    steps_per_revolution: Option<u32>,
    until_strategy: Strategy,
    wait_poll_us: Option<u32>,
}

impl<OUT, DELAY, TIMER, CLOCK> Default for StepperMotorBuilder<OUT, DELAY, TIMER, CLOCK>
where
    OUT: PhaseOutputs,
    DELAY: DelayNs,
    TIMER: PeriodicTimer,
    CLOCK: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<OUT, DELAY, TIMER, CLOCK> StepperMotorBuilder<OUT, DELAY, TIMER, CLOCK>
where
    OUT: PhaseOutputs,
    DELAY: DelayNs,
    TIMER: PeriodicTimer,
    CLOCK: Clock,
{
    /// Create a new builder for a full-step motor.
    pub fn new() -> Self {
        Self {
            outputs: None,
            delay: None,
            timer: None,
            clock: None,
            name: None,
            variant: MotorVariant::FullStep,
            step_period_ms: None,
            steps_per_revolution: None,
            until_strategy: Strategy::Async,
            wait_poll_us: None,
        }
    }

    /// Set the four coil outputs, e.g. `[in1, in2, in3, in4]`.
    pub fn outputs(mut self, outputs: OUT) -> Self {
        self.outputs = Some(outputs);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the periodic timer.
    pub fn timer(mut self, timer: TIMER) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Set the clock.
    pub fn clock(mut self, clock: CLOCK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the motor variant.
    pub fn variant(mut self, variant: MotorVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Override the variant's step period.
    pub fn step_period_ms(mut self, period: u32) -> Self {
        self.step_period_ms = Some(period);
        self
    }

    /// Override the variant's steps per revolution (for other gearing).
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set the strategy used by `step_until`.
    pub fn until_strategy(mut self, strategy: Strategy) -> Self {
        self.until_strategy = strategy;
        self
    }

    /// Set the sleep between checks in `wait`.
    pub fn wait_poll_us(mut self, poll: u32) -> Self {
        self.wait_poll_us = Some(poll);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.variant = config.variant;
        self.step_period_ms = config.step_period_ms;
        self.steps_per_revolution = config.steps_per_revolution;
        self.until_strategy = config.until_strategy;
        self.wait_poll_us = config.wait_poll_us;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the StepperMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if a hardware component is missing or an override is zero.
    pub fn build(self) -> Result<StepperMotor<OUT, DELAY, TIMER, CLOCK>> {
        let outputs = self
            .outputs
            .ok_or(ConfigError::MissingComponent("outputs"))?;
        let delay = self.delay.ok_or(ConfigError::MissingComponent("delay"))?;
        let timer = self.timer.ok_or(ConfigError::MissingComponent("timer"))?;
        let clock = self.clock.ok_or(ConfigError::MissingComponent("clock"))?;

        let name = match self.name {
            Some(name) => name,
            None => heapless::String::try_from(self.variant.name()).unwrap_or_default(),
        };

        let config = MotorConfig {
            name,
            variant: self.variant,
            step_period_ms: self.step_period_ms,
            steps_per_revolution: self.steps_per_revolution,
            until_strategy: self.until_strategy,
            wait_poll_us: self.wait_poll_us,
        };
        validate_motor(&config)?;

        let step_period_us = config.effective_step_period_ms().saturating_mul(1000);

        Ok(StepperMotor::new(
            outputs,
            delay,
            timer,
            clock,
            config.name.clone(),
            config.variant,
            config.effective_steps_per_revolution(),
            step_period_us,
            config.until_strategy,
            config.wait_poll_us.unwrap_or(DEFAULT_WAIT_POLL_US),
        ))
    }
}
