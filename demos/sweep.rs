//! Sweep demo.
//!
//! Drives a half-step motor through a few moves with host collaborators.
//! Pins are simulated and print the coil pattern on every change.

use phase_stepper::std_support::{StdClock, StdDelay, StdTimer};
use phase_stepper::{Degrees, Direction, MotorVariant, PhaseOutputs, PhaseVector, StepperMotor};

/// Coil outputs that print instead of driving GPIO.
struct ConsoleCoils;

impl PhaseOutputs for ConsoleCoils {
    type Error = core::convert::Infallible;

    fn set_levels(&mut self, levels: PhaseVector) -> Result<(), Self::Error> {
        let pattern: String = levels.iter().map(|on| if *on { '#' } else { '.' }).collect();
        println!("  {}", pattern);
        Ok(())
    }
}

fn main() -> phase_stepper::Result<()> {
    let mut motor = StepperMotor::builder()
        .variant(MotorVariant::HalfStep)
        .step_period_ms(2)
        .steps_per_revolution(16)
        .outputs(ConsoleCoils)
        .delay(StdDelay)
        .timer(StdTimer::new())
        .clock(StdClock::new())
        .build()?;

    println!("=== {} ({} steps/rev) ===", motor.variant(), motor.steps_per_revolution());

    println!("\nBlocking: 4 steps forward");
    motor.step(4)?;
    println!("position {}", motor.position());

    println!("\nTimer driven: shortest way to 270 degrees");
    motor.run_to_angle(Degrees(270.0), None)?;
    motor.wait()?;
    println!("position {} ({} degrees)", motor.position(), motor.position_degrees().value());

    println!("\nTimer driven: the long way back to 0");
    motor.run_to_target(0, Some(Direction::CounterClockwise))?;
    motor.wait()?;
    println!("position {}", motor.position());

    Ok(())
}
