//! Asynchronous motion state - advanced one timer tick at a time.

/// An armed asynchronous motion and its stop condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncMotion {
    /// Run until the absolute position equals the target.
    ToTarget(u32),
    /// Run until the remaining step counter reaches zero.
    Count(u32),
}

impl AsyncMotion {
    /// Check whether the stop condition holds at `position`.
    #[inline]
    pub fn is_complete(&self, position: u32) -> bool {
        match *self {
            AsyncMotion::ToTarget(target) => position == target,
            AsyncMotion::Count(remaining) => remaining == 0,
        }
    }

    /// State after one step has been taken.
    #[inline]
    pub fn advanced(self) -> Self {
        match self {
            AsyncMotion::ToTarget(target) => AsyncMotion::ToTarget(target),
            AsyncMotion::Count(remaining) => AsyncMotion::Count(remaining.saturating_sub(1)),
        }
    }

    /// Target position, for target-seeking motions.
    #[inline]
    pub fn target(&self) -> Option<u32> {
        match *self {
            AsyncMotion::ToTarget(target) => Some(target),
            AsyncMotion::Count(_) => None,
        }
    }

    /// Steps left, for count-bounded motions.
    #[inline]
    pub fn remaining_steps(&self) -> Option<u32> {
        match *self {
            AsyncMotion::ToTarget(_) => None,
            AsyncMotion::Count(remaining) => Some(remaining),
        }
    }
}

/// What a single timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No motion was armed; nothing happened.
    Idle,
    /// One step was taken.
    Stepped,
    /// The stop condition held; the motion was stopped without stepping.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_runs_down() {
        let mut motion = AsyncMotion::Count(3);
        let mut steps = 0;
        while !motion.is_complete(0) {
            motion = motion.advanced();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(motion.remaining_steps(), Some(0));
        assert_eq!(motion.target(), None);
    }

    #[test]
    fn test_zero_count_is_complete() {
        assert!(AsyncMotion::Count(0).is_complete(123));
    }

    #[test]
    fn test_target_completion_depends_on_position() {
        let motion = AsyncMotion::ToTarget(42);
        assert!(!motion.is_complete(41));
        assert!(motion.is_complete(42));
        assert_eq!(motion.advanced(), motion);
        assert_eq!(motion.target(), Some(42));
        assert_eq!(motion.remaining_steps(), None);
    }
}
