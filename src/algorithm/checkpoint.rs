//! Checkpoint schedule and the hand-off of canvas snapshots

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Canvas;
use std::collections::BTreeMap;

/// Fixed mapping from placement index to checkpoint id
///
/// Checkpoint `k` of `amount` fires after placement `(k + 1) * total / amount - 1`,
/// so the last one always coincides with the final placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointSchedule {
    by_index: BTreeMap<usize, usize>,
}

impl CheckpointSchedule {
    /// Precompute checkpoint indices for `amount` checkpoints over `total` placements
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` exceeds `total`, which would map two
    /// checkpoints onto one placement
    pub fn new(total: usize, amount: usize) -> Result<Self> {
        if amount > total {
            return Err(invalid_parameter(
                "image.amount",
                &amount,
                &format!("cannot exceed the {total} placements"),
            ));
        }

        let by_index = (0..amount)
            .map(|k| ((k + 1) * total / amount - 1, k))
            .collect();
        Ok(Self { by_index })
    }

    /// Checkpoint id due after placement `index`, if any
    pub fn checkpoint_at(&self, index: usize) -> Option<usize> {
        self.by_index.get(&index).copied()
    }

    /// Number of scheduled checkpoints
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    /// True when no checkpoint is scheduled
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// `(placement index, checkpoint id)` pairs in firing order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> {
        self.by_index.iter().map(|(&index, &id)| (index, id))
    }
}

/// Frozen canvas state handed to the exporter
#[derive(Debug, Clone)]
pub struct Checkpoint {
    /// Checkpoint id, `0..amount`
    pub id: usize,
    /// Placement index after which the snapshot was taken
    pub index: usize,
    /// Deep copy of the canvas at that moment
    pub snapshot: Canvas,
}

impl Checkpoint {
    /// Completed share of the run in whole percent
    pub fn progress_percent(&self) -> usize {
        let total = self.snapshot.len();
        if total == 0 {
            return 100;
        }
        (self.index + 1) * 100 / total
    }
}

/// Receiver of checkpoint snapshots
///
/// Implementations must not block the caller on encoding or disk I/O.
pub trait CheckpointSink {
    /// Accept a snapshot
    fn accept(&mut self, checkpoint: Checkpoint);
}

/// Discards every checkpoint
impl CheckpointSink for () {
    fn accept(&mut self, _checkpoint: Checkpoint) {}
}

/// Collects checkpoints in memory
impl CheckpointSink for Vec<Checkpoint> {
    fn accept(&mut self, checkpoint: Checkpoint) {
        self.push(checkpoint);
    }
}
