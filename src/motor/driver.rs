//! Stepper motor driver.
//!
//! Generic over the four coil outputs, an embedded-hal 1.0 delay provider,
//! a periodic timer, and a monotonic clock.

use embedded_hal::delay::DelayNs;

use crate::config::units::Degrees;
use crate::error::{MotionError, MotorError, Result};
use crate::hal::{Clock, PeriodicTimer, PhaseOutputs};
use crate::motion::{
    angle_to_target, normalize_target, resolve_direction, steps_between, AsyncMotion, Direction,
    Strategy, TickOutcome,
};
use crate::phase::PhaseSequencer;

use super::builder::StepperMotorBuilder;
use super::position::Position;
use super::variant::MotorVariant;

/// Default sleep between checks in [`StepperMotor::wait`], in microseconds.
pub const DEFAULT_WAIT_POLL_US: u32 = 500;

/// Stepper motor driver for 4-wire phase-table motors.
///
/// Generic over:
/// - `OUT`: the four coil outputs (must implement `PhaseOutputs`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `TIMER`: Periodic timer for asynchronous motion (must implement `PeriodicTimer`)
/// - `CLOCK`: Time source for step timing compensation (must implement `Clock`)
///
/// At most one motion runs at a time, whichever strategy started it.
pub struct StepperMotor<OUT, DELAY, TIMER, CLOCK>
where
    OUT: PhaseOutputs,
    DELAY: DelayNs,
    TIMER: PeriodicTimer,
    CLOCK: Clock,
{
    /// Coil outputs.
    outputs: OUT,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Timer driving asynchronous motion.
    timer: TIMER,

    /// Time source for blocking-mode compensation.
    clock: CLOCK,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Variant this motor was built from.
    variant: MotorVariant,

    /// Current phase of the excitation table.
    sequencer: PhaseSequencer,

    /// Current absolute position.
    position: Position,

    /// Last used direction.
    direction: Direction,

    /// Armed asynchronous motion, if any.
    motion: Option<AsyncMotion>,

    /// Minimum time between phase changes.
    step_period_us: u32,

    /// Strategy used by `step_until`.
    until_strategy: Strategy,

    /// Sleep between checks in `wait`.
    wait_poll_us: u32,
}

impl<OUT, DELAY, TIMER, CLOCK> StepperMotor<OUT, DELAY, TIMER, CLOCK>
where
    OUT: PhaseOutputs,
    DELAY: DelayNs,
    TIMER: PeriodicTimer,
    CLOCK: Clock,
{
    /// Start building a motor.
    pub fn builder() -> StepperMotorBuilder<OUT, DELAY, TIMER, CLOCK> {
        StepperMotorBuilder::new()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        outputs: OUT,
        delay: DELAY,
        timer: TIMER,
        clock: CLOCK,
        name: heapless::String<32>,
        variant: MotorVariant,
        steps_per_revolution: u32,
        step_period_us: u32,
        until_strategy: Strategy,
        wait_poll_us: u32,
    ) -> Self {
        Self {
            outputs,
            delay,
            timer,
            clock,
            name,
            variant,
            sequencer: PhaseSequencer::new(variant.spec().table),
            position: Position::new(steps_per_revolution),
            direction: Direction::Clockwise,
            motion: None,
            step_period_us,
            until_strategy,
            wait_poll_us,
        }
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the variant this motor was built from.
    #[inline]
    pub fn variant(&self) -> MotorVariant {
        self.variant
    }

    /// Get current position in steps, in `[0, steps_per_revolution)`.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position.steps()
    }

    /// Get current position in degrees.
    #[inline]
    pub fn position_degrees(&self) -> Degrees {
        self.position.degrees()
    }

    /// Get steps per output revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.position.steps_per_revolution()
    }

    /// Get the minimum time between phase changes.
    #[inline]
    pub fn step_period_us(&self) -> u32 {
        self.step_period_us
    }

    /// Get the current index into the phase table.
    #[inline]
    pub fn phase_index(&self) -> usize {
        self.sequencer.index()
    }

    /// Get the last used direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the target of the running target-seeking motion.
    #[inline]
    pub fn target(&self) -> Option<u32> {
        self.motion.and_then(|m| m.target())
    }

    /// Get the steps left in the running count-bounded motion.
    #[inline]
    pub fn remaining_steps(&self) -> Option<u32> {
        self.motion.and_then(|m| m.remaining_steps())
    }

    /// Check if an asynchronous motion is armed.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.motion.is_some()
    }

    /// Get the strategy used by [`step_until`](Self::step_until).
    #[inline]
    pub fn until_strategy(&self) -> Strategy {
        self.until_strategy
    }

    /// Declare the current physical position as the origin.
    ///
    /// Does not move the motor, and leaves the phase and any running motion alone.
    pub fn zero(&mut self) {
        self.position.set_origin();
    }

    /// Take a single step, in `direction` or else the last used direction.
    pub fn step_once(&mut self, direction: Option<Direction>) -> Result<()> {
        self.ensure_idle()?;
        let direction = direction.unwrap_or(self.direction);
        self.direction = direction;
        self.apply_step(direction)
    }

    /// Step `steps` times (negative goes counter-clockwise), blocking until done.
    pub fn step(&mut self, steps: i64) -> Result<()> {
        self.run_blocking(steps.unsigned_abs(), Direction::from_steps(steps))
    }

    /// Step `count` times in `direction` with compensated timing, blocking until done.
    pub fn run_blocking(&mut self, count: u64, direction: Direction) -> Result<()> {
        self.ensure_idle()?;
        debug!("blocking run: {} steps, direction {}", count, direction.sign());

        self.direction = direction;
        for _ in 0..count {
            self.compensated_step(direction)?;
        }
        Ok(())
    }

    /// Move to `target` using the configured until-strategy.
    ///
    /// Takes the shortest way round unless `direction` is given.
    pub fn step_until(&mut self, target: i64, direction: Option<Direction>) -> Result<()> {
        self.step_until_with(self.until_strategy, target, direction)
    }

    /// Move to `target` using `strategy`.
    pub fn step_until_with(
        &mut self,
        strategy: Strategy,
        target: i64,
        direction: Option<Direction>,
    ) -> Result<()> {
        match strategy {
            Strategy::Blocking => self.step_until_blocking(target, direction),
            Strategy::Async => self.run_to_target(target, direction),
        }
    }

    /// Move to `angle` using the configured until-strategy.
    pub fn step_until_angle(&mut self, angle: Degrees, direction: Option<Direction>) -> Result<()> {
        self.ensure_idle()?;
        let target = angle_to_target(angle, self.steps_per_revolution())?;
        self.step_until(i64::from(target), direction)
    }

    /// Start a count-bounded motion of `count` steps (negative goes counter-clockwise).
    ///
    /// Returns immediately; the timer drives the motion.
    pub fn run_steps(&mut self, count: i64) -> Result<()> {
        self.ensure_idle()?;
        let remaining = u32::try_from(count.unsigned_abs()).unwrap_or(u32::MAX);
        self.start(AsyncMotion::Count(remaining), Direction::from_steps(count))
    }

    /// Start a target-seeking motion toward `target`.
    ///
    /// Takes the shortest way round unless `direction` is given. Returns
    /// immediately; the timer drives the motion.
    pub fn run_to_target(&mut self, target: i64, direction: Option<Direction>) -> Result<()> {
        self.ensure_idle()?;
        let max = self.steps_per_revolution();
        let target = normalize_target(target, max)?;
        let direction =
            direction.unwrap_or_else(|| resolve_direction(self.position(), target, max));
        self.start(AsyncMotion::ToTarget(target), direction)
    }

    /// Start a target-seeking motion toward `angle`.
    pub fn run_to_angle(&mut self, angle: Degrees, direction: Option<Direction>) -> Result<()> {
        self.ensure_idle()?;
        let target = angle_to_target(angle, self.steps_per_revolution())?;
        self.run_to_target(i64::from(target), direction)
    }

    /// Stop any asynchronous motion. Safe to call at any time.
    pub fn stop(&mut self) -> Result<()> {
        if self.motion.take().is_none() {
            return Ok(());
        }
        debug!("stopped at {}", self.position());
        self.timer.cancel().map_err(|_| MotorError::TimerError)?;
        Ok(())
    }

    /// Handle one timer expiry.
    ///
    /// Call from the timer interrupt, or let [`poll`](Self::poll) call it.
    /// Stops the motion if its stop condition holds, otherwise takes one step.
    pub fn on_tick(&mut self) -> Result<TickOutcome> {
        let Some(motion) = self.motion else {
            return Ok(TickOutcome::Idle);
        };

        if motion.is_complete(self.position()) {
            self.stop()?;
            return Ok(TickOutcome::Finished);
        }

        if let Err(e) = self.apply_step(self.direction) {
            warn!("step failed during tick at {}", self.position());
            let _ = self.stop();
            return Err(e);
        }
        self.motion = Some(motion.advanced());
        Ok(TickOutcome::Stepped)
    }

    /// Deliver a pending timer expiry, if there is one.
    pub fn poll(&mut self) -> Result<TickOutcome> {
        if self.is_running() && self.timer.take_expired() {
            self.on_tick()
        } else {
            Ok(TickOutcome::Idle)
        }
    }

    /// Block until the asynchronous motion finishes.
    ///
    /// Sleeps for the wait-poll interval whenever no expiry is pending.
    /// Returns immediately if nothing is running.
    pub fn wait(&mut self) -> Result<()> {
        while self.is_running() {
            if self.poll()? == TickOutcome::Idle {
                self.delay.delay_us(self.wait_poll_us);
            }
        }
        Ok(())
    }

    /// Release the hardware collaborators.
    pub fn release(self) -> (OUT, DELAY, TIMER, CLOCK) {
        (self.outputs, self.delay, self.timer, self.clock)
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_running() {
            warn!("command rejected: motor already running");
            return Err(MotionError::AlreadyRunning.into());
        }
        Ok(())
    }

    fn step_until_blocking(&mut self, target: i64, direction: Option<Direction>) -> Result<()> {
        self.ensure_idle()?;
        let max = self.steps_per_revolution();
        let target = normalize_target(target, max)?;
        let direction =
            direction.unwrap_or_else(|| resolve_direction(self.position(), target, max));
        debug!(
            "blocking move to {}: {} steps, direction {}",
            target,
            steps_between(self.position(), target, direction, max),
            direction.sign()
        );

        self.direction = direction;
        while self.position() != target {
            self.compensated_step(direction)?;
        }
        Ok(())
    }

    fn start(&mut self, motion: AsyncMotion, direction: Direction) -> Result<()> {
        self.timer
            .start_periodic(self.step_period_us)
            .map_err(|_| MotorError::TimerError)?;
        match motion {
            AsyncMotion::ToTarget(target) => {
                debug!("async run to {}, direction {}", target, direction.sign())
            }
            AsyncMotion::Count(count) => {
                debug!("async run of {} steps, direction {}", count, direction.sign())
            }
        }

        self.direction = direction;
        self.motion = Some(motion);
        Ok(())
    }

    fn compensated_step(&mut self, direction: Direction) -> Result<()> {
        let started = self.clock.now_us();
        self.apply_step(direction)?;
        let elapsed = self.clock.now_us().saturating_sub(started);

        let remaining = u64::from(self.step_period_us).saturating_sub(elapsed);
        if remaining > 0 {
            self.delay.delay_us(remaining as u32);
        }
        Ok(())
    }

    // Outputs first, so a failed write leaves position and phase untouched.
    fn apply_step(&mut self, direction: Direction) -> Result<()> {
        let step = self.sequencer.advance(direction);
        self.outputs
            .set_levels(step.levels)
            .map_err(|_| MotorError::PinError)?;
        self.sequencer.commit(step);
        self.position.advance(direction);
        trace!("step to {} (phase {})", self.position(), step.next_index);
        Ok(())
    }
}
