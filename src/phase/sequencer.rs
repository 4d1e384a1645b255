//! Phase sequencing - cycles through a phase table.

use crate::motion::Direction;

use super::table::{PhaseTable, PhaseVector};

/// Index reached from `index` after one step of `sign` (+1 or -1) in a table of `len` phases.
///
/// Always in `[0, len)`, including for negative intermediate values.
#[inline]
pub fn next_index(index: usize, len: usize, sign: i64) -> usize {
    (index as i64 + sign).rem_euclid(len as i64) as usize
}

/// Result of advancing the sequencer by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    /// Phase index after the step.
    pub next_index: usize,
    /// Levels to drive onto the outputs (the row at the pre-advance index).
    pub levels: PhaseVector,
}

/// Tracks the current phase of a phase table.
///
/// Holds no hardware. [`advance`](Self::advance) only computes the step;
/// [`commit`](Self::commit) stores it once the outputs have been written.
#[derive(Debug, Clone, Copy)]
pub struct PhaseSequencer {
    table: PhaseTable,
    index: usize,
}

impl PhaseSequencer {
    /// Create a sequencer at phase 0.
    pub fn new(table: PhaseTable) -> Self {
        Self { table, index: 0 }
    }

    /// The phase table being cycled.
    #[inline]
    pub fn table(&self) -> &PhaseTable {
        &self.table
    }

    /// Current phase index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compute the next step in `direction`.
    #[inline]
    pub fn advance(&self, direction: Direction) -> PhaseStep {
        PhaseStep {
            next_index: next_index(self.index, self.table.len(), direction.sign()),
            levels: self.table.get(self.index),
        }
    }

    /// Store the index produced by [`advance`](Self::advance).
    #[inline]
    pub fn commit(&mut self, step: PhaseStep) {
        self.index = step.next_index;
    }
}
