//! Host implementations of the hardware collaborators (std only).
//!
//! Useful for demos and for driving USB GPIO adapters from a desktop.

use std::thread;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;

use crate::hal::{Clock, PeriodicTimer};

/// Delay provider backed by `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

/// Clock backed by `Instant`, counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    /// Create a clock starting at zero now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_us(&mut self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}

/// Software periodic timer.
///
/// Tracks the next deadline; [`take_expired`](PeriodicTimer::take_expired)
/// reports one expiry per elapsed period.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTimer {
    schedule: Option<(Duration, Instant)>,
}

impl StdTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the timer is armed.
    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }
}

impl PeriodicTimer for StdTimer {
    type Error = core::convert::Infallible;

    fn start_periodic(&mut self, period_us: u32) -> Result<(), Self::Error> {
        let period = Duration::from_micros(u64::from(period_us));
        self.schedule = Some((period, Instant::now() + period));
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), Self::Error> {
        self.schedule = None;
        Ok(())
    }

    fn take_expired(&mut self) -> bool {
        match self.schedule.as_mut() {
            Some((period, deadline)) if Instant::now() >= *deadline => {
                *deadline += *period;
                true
            }
            _ => false,
        }
    }
}
