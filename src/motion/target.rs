//! Target arithmetic on the circular position space.
//!
//! Positions live in `[0, steps_per_revolution)`. A target equal to
//! `steps_per_revolution` is the same physical position as `0`.

use libm::floorf;

use crate::config::units::Degrees;
use crate::error::{MotionError, Result};

use super::direction::Direction;

/// Validate a raw target and fold it into `[0, steps_per_revolution)`.
///
/// # Errors
///
/// Returns `MotionError::InvalidTarget` if `target` is outside `[0, steps_per_revolution]`.
pub fn normalize_target(target: i64, steps_per_revolution: u32) -> Result<u32> {
    if target < 0 || target > i64::from(steps_per_revolution) {
        return Err(MotionError::InvalidTarget {
            target,
            max: steps_per_revolution,
        }
        .into());
    }
    Ok((target % i64::from(steps_per_revolution)) as u32)
}

/// Pick the direction with the shorter path from `current` to `target`.
///
/// Goes toward the target numerically, then flips when that path is longer
/// than half a revolution. At exactly half a revolution the numeric
/// direction is kept, so `0 -> 1024` on a 2048-step motor goes clockwise.
pub fn resolve_direction(current: u32, target: u32, steps_per_revolution: u32) -> Direction {
    let direction = if target > current {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    };

    if current.abs_diff(target) > steps_per_revolution / 2 {
        direction.reversed()
    } else {
        direction
    }
}

/// Convert an angle to a target step, `floor(angle / 360 * steps_per_revolution)`.
///
/// `360` maps to `steps_per_revolution` itself; [`normalize_target`] folds it to `0`.
///
/// # Errors
///
/// Returns `MotionError::InvalidAngle` if `angle` is outside `[0, 360]` or NaN.
pub fn angle_to_target(angle: Degrees, steps_per_revolution: u32) -> Result<u32> {
    let value = angle.value();
    if !(0.0..=360.0).contains(&value) {
        return Err(MotionError::InvalidAngle(value).into());
    }
    let target = floorf(value / 360.0 * steps_per_revolution as f32) as u32;
    Ok(target.min(steps_per_revolution))
}

/// Number of steps from `current` to `target` travelling in `direction`.
pub fn steps_between(
    current: u32,
    target: u32,
    direction: Direction,
    steps_per_revolution: u32,
) -> u32 {
    let max = i64::from(steps_per_revolution);
    let delta = (i64::from(target) - i64::from(current)) * direction.sign();
    delta.rem_euclid(max) as u32
}
