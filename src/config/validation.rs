//! Configuration validation.

use crate::error::{ConfigError, Result};

use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks every motor:
/// - Step period override is greater than zero
/// - Steps per revolution override is greater than zero
/// - Wait poll interval is greater than zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        validate_motor(motor)?;
    }
    Ok(())
}

/// Validate a single motor configuration.
pub fn validate_motor(config: &MotorConfig) -> Result<()> {
    if let Some(period) = config.step_period_ms {
        if period == 0 {
            return Err(ConfigError::InvalidStepPeriod(period).into());
        }
    }

    if let Some(steps) = config.steps_per_revolution {
        if steps == 0 {
            return Err(ConfigError::InvalidStepsPerRevolution(steps).into());
        }
    }

    if let Some(poll) = config.wait_poll_us {
        if poll == 0 {
            return Err(ConfigError::InvalidWaitPoll(poll).into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::motor::MotorVariant;

    #[test]
    fn test_zero_step_period() {
        let config = MotorConfig {
            step_period_ms: Some(0),
            ..MotorConfig::new("test", MotorVariant::FullStep)
        };

        assert!(matches!(
            validate_motor(&config),
            Err(Error::Config(ConfigError::InvalidStepPeriod(0)))
        ));
    }

    #[test]
    fn test_zero_steps_per_revolution() {
        let config = MotorConfig {
            steps_per_revolution: Some(0),
            ..MotorConfig::new("test", MotorVariant::HalfStep)
        };

        assert!(matches!(
            validate_motor(&config),
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_motor(&MotorConfig::new("a", MotorVariant::FullStep)).is_ok());
        assert!(validate_motor(&MotorConfig::new("b", MotorVariant::HalfStep)).is_ok());
    }
}
