//! Hardware collaborators.
//!
//! The motor drives four digital outputs, arms one periodic timer, and reads
//! a monotonic clock for step timing compensation. Delays use embedded-hal's
//! `DelayNs` directly.

use core::fmt::Debug;

use embedded_hal::digital::{Error as _, ErrorKind, OutputPin, PinState};

use crate::phase::PhaseVector;

/// The four coil outputs of a motor, in fixed order.
pub trait PhaseOutputs {
    /// Error raised by a failed write.
    type Error: Debug;

    /// Drive all four outputs to `levels`, first output first.
    fn set_levels(&mut self, levels: PhaseVector) -> Result<(), Self::Error>;
}

impl<P: OutputPin> PhaseOutputs for [P; 4] {
    type Error = P::Error;

    fn set_levels(&mut self, levels: PhaseVector) -> Result<(), Self::Error> {
        for (pin, level) in self.iter_mut().zip(levels) {
            pin.set_state(PinState::from(level))?;
        }
        Ok(())
    }
}

impl<A, B, C, D> PhaseOutputs for (A, B, C, D)
where
    A: OutputPin,
    B: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    type Error = ErrorKind;

    fn set_levels(&mut self, levels: PhaseVector) -> Result<(), Self::Error> {
        let [a, b, c, d] = levels;
        self.0.set_state(PinState::from(a)).map_err(|e| e.kind())?;
        self.1.set_state(PinState::from(b)).map_err(|e| e.kind())?;
        self.2.set_state(PinState::from(c)).map_err(|e| e.kind())?;
        self.3.set_state(PinState::from(d)).map_err(|e| e.kind())?;
        Ok(())
    }
}

/// A recurring hardware timer.
///
/// Expiries are not delivered through a callback. Either the interrupt
/// handler calls [`StepperMotor::on_tick`](crate::StepperMotor::on_tick)
/// directly, or the timer latches each expiry and
/// [`take_expired`](Self::take_expired) reports it to
/// [`StepperMotor::poll`](crate::StepperMotor::poll).
pub trait PeriodicTimer {
    /// Error raised when the timer cannot be armed or cancelled.
    type Error: Debug;

    /// Start firing every `period_us` microseconds.
    fn start_periodic(&mut self, period_us: u32) -> Result<(), Self::Error>;

    /// Stop firing. Must be harmless if not armed.
    fn cancel(&mut self) -> Result<(), Self::Error>;

    /// Return `true` once for each expiry since the last call.
    fn take_expired(&mut self) -> bool;
}

/// Monotonic time source.
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&mut self) -> u64;
}
