//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use phase_stepper::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(truncated(e.message())))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// Long messages are cut at a char boundary rather than dropped.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Strategy;
    use crate::motor::MotorVariant;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.dial]
name = "Dial"
variant = "full_step"
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("dial").unwrap();
        assert_eq!(motor.variant, MotorVariant::FullStep);
        assert_eq!(motor.effective_steps_per_revolution(), 2048);
        assert_eq!(motor.until_strategy, Strategy::Async);
    }

    #[test]
    fn test_parse_overrides() {
        let toml = r#"
[motors.geared]
name = "Geared"
variant = "half_step"
step_period_ms = 3
steps_per_revolution = 4076
until_strategy = "blocking"
wait_poll_us = 250
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("geared").unwrap();
        assert_eq!(motor.effective_step_period_ms(), 3);
        assert_eq!(motor.effective_steps_per_revolution(), 4076);
        assert_eq!(motor.until_strategy, Strategy::Blocking);
        assert_eq!(motor.wait_poll_us, Some(250));
    }

    #[test]
    fn test_unknown_variant_is_parse_error() {
        let toml = r#"
[motors.bad]
name = "Bad"
variant = "quarter_step"
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let toml = r#"
[motors.bad]
name = "Bad"
variant = "full_step"
step_period_ms = 0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidStepPeriod(0)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/motors.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }

    #[test]
    fn test_truncated_keeps_prefix() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
        assert_eq!(truncated("short").as_str(), "short");
    }
}
