use crate::domain::{Coordinate, PointId, PointSet};
use crate::progress::{ProgressError, ProgressTracker};
use crate::quiz::QuizState;

/// All mutable state of one loaded point set.
#[derive(Debug)]
pub struct GameSession {
    pub(super) points: PointSet,
    pub(super) progress: ProgressTracker,
    pub(super) current_target_id: Option<PointId>,
    pub(super) last_known_player_position: Option<Coordinate>,
    pub(super) last_measured_distance_km: Option<f64>,
    /// An open quiz, or one dismissed after an incorrect answer. Always belongs to the current target.
    pub(super) active_quiz: Option<QuizState>,
    /// Set once the quiz of the current target was triggered, cleared when the player leaves the threshold.
    pub(super) within_range: bool,
}

impl GameSession {
    pub fn new(points: PointSet) -> Self {
        let progress = ProgressTracker::new(&points);
        GameSession {
            points,
            progress,
            current_target_id: None,
            last_known_player_position: None,
            last_measured_distance_km: None,
            active_quiz: None,
            within_range: false,
        }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn current_target_id(&self) -> Option<PointId> {
        self.current_target_id
    }

    pub fn last_known_player_position(&self) -> Option<Coordinate> {
        self.last_known_player_position
    }

    pub fn active_quiz(&self) -> Option<&QuizState> {
        self.active_quiz.as_ref()
    }

    /// Marks `id` complete and releases it as target. Returns `true` if it was newly completed.
    pub(super) fn complete(&mut self, id: PointId) -> Result<bool, ProgressError> {
        let newly_completed = self.progress.mark_complete(id)?;

        if self.current_target_id == Some(id) {
            self.current_target_id = None;
            self.last_measured_distance_km = None;
            self.within_range = false;
        }
        if self.active_quiz.as_ref().is_some_and(|quiz| quiz.point_id() == id) {
            self.active_quiz = None;
        }

        Ok(newly_completed)
    }
}
