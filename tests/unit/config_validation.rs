//! Unit tests for configuration validation.

use phase_stepper::config::{parse_config, validate_config, SystemConfig};
use phase_stepper::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[motors.m1]
name = "Motor"
variant = "full_step"
step_period_ms = 8
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero steps-per-revolution override.
#[test]
fn test_zero_steps_per_revolution() {
    let toml_str = r#"
[motors.m1]
name = "Motor"
variant = "half_step"
steps_per_revolution = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));
}

/// Test validation fails for a zero wait poll interval.
#[test]
fn test_zero_wait_poll() {
    let toml_str = r#"
[motors.m1]
name = "Motor"
variant = "full_step"
wait_poll_us = 0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidWaitPoll(0)))
    ));
}
