use crate::domain::{PointId, PointSet};
use std::collections::BTreeSet;
use thiserror::Error;

/// Tracks which points of a point set have been completed.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    total: usize,
    completed: BTreeSet<PointId>,
}

impl ProgressTracker {
    pub fn new(points: &PointSet) -> Self {
        ProgressTracker {
            total: points.len(),
            completed: BTreeSet::new(),
        }
    }

    /// Marks a point as completed, returns `true` if it was not completed before.
    pub fn mark_complete(&mut self, id: PointId) -> Result<bool, ProgressError> {
        if id.0 >= self.total {
            return Err(ProgressError::UnknownPoint(id));
        }
        Ok(self.completed.insert(id))
    }

    pub fn is_complete(&self, id: PointId) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total - self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn all_complete(&self) -> bool {
        self.remaining_count() == 0
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum ProgressError {
    #[error("unknown point {0}")]
    UnknownPoint(PointId),
}
