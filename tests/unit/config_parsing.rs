//! Unit tests for TOML configuration parsing.

use phase_stepper::config::{parse_config, SystemConfig};
use phase_stepper::{MotorVariant, Strategy};

const TWO_MOTORS: &str = r#"
[motors.dial]
name = "Dial"
variant = "half_step"

[motors.pointer]
name = "Pointer"
variant = "full_step"
step_period_ms = 10
steps_per_revolution = 2038
until_strategy = "blocking"
"#;

/// Test parsing a config with several motors.
#[test]
fn test_parse_two_motors() {
    let config: SystemConfig = parse_config(TWO_MOTORS).expect("Failed to parse TOML");

    let dial = config.motor("dial").expect("Motor not found");
    assert_eq!(dial.name.as_str(), "Dial");
    assert_eq!(dial.variant, MotorVariant::HalfStep);
    assert_eq!(dial.step_period_ms, None);
    assert_eq!(dial.effective_step_period_ms(), 5);

    let pointer = config.motor("pointer").expect("Motor not found");
    assert_eq!(pointer.effective_steps_per_revolution(), 2038);
    assert_eq!(pointer.effective_step_period_ms(), 10);
    assert_eq!(pointer.until_strategy, Strategy::Blocking);
}

/// Test motor names are listed in declaration order.
#[test]
fn test_motor_names() {
    let config = parse_config(TWO_MOTORS).unwrap();
    let names: Vec<_> = config.motor_names().collect();
    assert_eq!(names, ["dial", "pointer"]);
    assert!(config.motor("nonexistent").is_none());
}

/// Test that a missing variant is a parse error.
#[test]
fn test_missing_variant() {
    let toml_str = r#"
[motors.m1]
name = "Motor"
"#;

    assert!(parse_config(toml_str).is_err());
}
