//! Per-slot status store over a reference buffer's index range.
//!
//! Every slot always carries exactly one status (a total function over
//! `[0, len)`). Only the guided state machine mutates the table; rendering
//! and the CLI read snapshots of it.

use serde::Serialize;

/// Status of one character slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// Not yet reached since the last reset.
    Untouched,
    /// Confirmed correctly typed and not since retreated past.
    Revealed,
    /// Most recent attempt at this slot did not match.
    Incorrect,
}

/// Total mapping from slot index to [`SlotStatus`].
#[derive(Debug, Clone)]
pub struct AnnotationTable {
    slots: Vec<SlotStatus>,
}

impl AnnotationTable {
    /// Fresh table with every slot `Untouched`.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![SlotStatus::Untouched; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SlotStatus> {
        self.slots.get(index).copied()
    }

    /// Out-of-range writes are rejected by construction; the state machine
    /// only writes at indices its preconditions have already bounds-checked.
    pub fn set(&mut self, index: usize, status: SlotStatus) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = status;
        }
    }

    /// Reset every slot to `Untouched`, resizing to `len`.
    pub fn reset(&mut self, len: usize) {
        self.slots.clear();
        self.slots.resize(len, SlotStatus::Untouched);
    }

    pub fn statuses(&self) -> &[SlotStatus] {
        &self.slots
    }

    /// Standing invariant from the progress cursor's contract: every slot
    /// below `progress` is `Revealed`, and no slot at or above it is.
    pub fn upholds_progress_invariant(&self, progress: usize) -> bool {
        self.slots.iter().enumerate().all(|(i, &s)| {
            if i < progress {
                s == SlotStatus::Revealed
            } else {
                s != SlotStatus::Revealed
            }
        })
    }
}
