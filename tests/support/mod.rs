//! Recording doubles for the hardware collaborators.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use phase_stepper::{
    Clock, MotorVariant, PeriodicTimer, PhaseOutputs, PhaseVector, StepperMotor, Strategy,
};

/// Records every phase vector written; can be told to fail.
#[derive(Clone, Default)]
pub struct TestOutputs {
    pub writes: Rc<RefCell<Vec<PhaseVector>>>,
    pub fail: Rc<Cell<bool>>,
}

impl PhaseOutputs for TestOutputs {
    type Error = ();

    fn set_levels(&mut self, levels: PhaseVector) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(());
        }
        self.writes.borrow_mut().push(levels);
        Ok(())
    }
}

/// Records every requested delay in nanoseconds.
#[derive(Clone, Default)]
pub struct TestDelay {
    pub ns: Rc<RefCell<Vec<u32>>>,
}

impl DelayNs for TestDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.borrow_mut().push(ns);
    }
}

/// Timer that reports an expiry on every `every`-th check while armed.
#[derive(Clone)]
pub struct TestTimer {
    pub armed: Rc<Cell<Option<u32>>>,
    pub starts: Rc<Cell<u32>>,
    pub cancels: Rc<Cell<u32>>,
    pub fail_start: Rc<Cell<bool>>,
    pub every: Rc<Cell<u32>>,
    checks: Rc<Cell<u32>>,
}

impl Default for TestTimer {
    fn default() -> Self {
        Self {
            armed: Rc::default(),
            starts: Rc::default(),
            cancels: Rc::default(),
            fail_start: Rc::default(),
            every: Rc::new(Cell::new(1)),
            checks: Rc::default(),
        }
    }
}

impl PeriodicTimer for TestTimer {
    type Error = ();

    fn start_periodic(&mut self, period_us: u32) -> Result<(), Self::Error> {
        if self.fail_start.get() {
            return Err(());
        }
        self.armed.set(Some(period_us));
        self.starts.set(self.starts.get() + 1);
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), Self::Error> {
        self.armed.set(None);
        self.cancels.set(self.cancels.get() + 1);
        Ok(())
    }

    fn take_expired(&mut self) -> bool {
        if self.armed.get().is_none() {
            return false;
        }
        let checks = self.checks.get() + 1;
        self.checks.set(checks);
        checks % self.every.get() == 0
    }
}

/// Clock that moves forward by a fixed amount on every read.
#[derive(Clone, Default)]
pub struct TestClock {
    pub now: Rc<Cell<u64>>,
    pub per_read_us: u64,
}

impl Clock for TestClock {
    fn now_us(&mut self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.per_read_us);
        now
    }
}

pub type TestMotor = StepperMotor<TestOutputs, TestDelay, TestTimer, TestClock>;

/// A motor plus handles onto its doubles.
pub struct Rig {
    pub motor: TestMotor,
    pub outputs: TestOutputs,
    pub delay: TestDelay,
    pub timer: TestTimer,
}

impl Rig {
    pub fn new(variant: MotorVariant) -> Self {
        Self::build(variant, 0, Strategy::Async)
    }

    /// `step_until` runs in the caller's context.
    pub fn blocking(variant: MotorVariant) -> Self {
        Self::build(variant, 0, Strategy::Blocking)
    }

    /// Each step appears to take `overhead_us` of processing time.
    pub fn with_overhead(variant: MotorVariant, overhead_us: u64) -> Self {
        Self::build(variant, overhead_us, Strategy::Async)
    }

    fn build(variant: MotorVariant, overhead_us: u64, until_strategy: Strategy) -> Self {
        let outputs = TestOutputs::default();
        let delay = TestDelay::default();
        let timer = TestTimer::default();
        let clock = TestClock {
            per_read_us: overhead_us,
            ..TestClock::default()
        };

        let motor = StepperMotor::builder()
            .variant(variant)
            .until_strategy(until_strategy)
            .outputs(outputs.clone())
            .delay(delay.clone())
            .timer(timer.clone())
            .clock(clock)
            .build()
            .expect("motor should build");

        Self {
            motor,
            outputs,
            delay,
            timer,
        }
    }

    pub fn writes(&self) -> usize {
        self.outputs.writes.borrow().len()
    }
}
