//! Excitation tables.

use crate::error::{ConfigError, Result};

/// Output levels for one excitation state, in fixed pin order.
pub type PhaseVector = [bool; 4];

const FULL_STEP_PHASES: [PhaseVector; 4] = [
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
    [true, false, false, true],
];

const HALF_STEP_PHASES: [PhaseVector; 8] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// Ordered cycle of phase vectors.
///
/// Never empty. Index arithmetic over a table is always modulo [`len`](Self::len).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTable {
    phases: &'static [PhaseVector],
}

impl PhaseTable {
    /// Two coils energized per step (4 phases).
    pub const FULL_STEP: Self = Self {
        phases: &FULL_STEP_PHASES,
    };

    /// Alternating one and two coils energized (8 phases).
    pub const HALF_STEP: Self = Self {
        phases: &HALF_STEP_PHASES,
    };

    /// Create a table from a custom phase cycle.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyPhaseTable` if `phases` is empty.
    pub fn new(phases: &'static [PhaseVector]) -> Result<Self> {
        if phases.is_empty() {
            return Err(ConfigError::EmptyPhaseTable.into());
        }
        Ok(Self { phases })
    }

    /// Number of phases in the cycle.
    #[inline]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether the table has no phases. Never true for a constructed table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Phase vector at `index`, wrapping around the cycle.
    #[inline]
    pub fn get(&self, index: usize) -> PhaseVector {
        self.phases[index % self.phases.len()]
    }

    /// All phase vectors in order.
    #[inline]
    pub fn phases(&self) -> &'static [PhaseVector] {
        self.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_sizes() {
        assert_eq!(PhaseTable::FULL_STEP.len(), 4);
        assert_eq!(PhaseTable::HALF_STEP.len(), 8);
    }

    #[test]
    fn test_full_step_rows_are_half_step_odd_rows() {
        for (i, row) in PhaseTable::FULL_STEP.phases().iter().enumerate() {
            assert_eq!(*row, PhaseTable::HALF_STEP.get(2 * i + 1));
        }
    }

    #[test]
    fn test_full_step_energizes_two_coils() {
        for row in PhaseTable::FULL_STEP.phases() {
            assert_eq!(row.iter().filter(|on| **on).count(), 2);
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            PhaseTable::new(&[]),
            Err(crate::Error::Config(ConfigError::EmptyPhaseTable))
        ));
    }

    #[test]
    fn test_get_wraps() {
        let table = PhaseTable::FULL_STEP;
        assert_eq!(table.get(4), table.get(0));
        assert_eq!(table.get(7), table.get(3));
    }
}
