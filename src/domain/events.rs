use crate::domain::{Grade, PointId, PointOfInterest};
use crate::proximity::DistanceTrend;
use crate::quiz::QuizState;
use std::time::Duration;

/// Events emitted by the game for the presentation layer.
#[derive(Clone, PartialEq, Debug)]
pub enum GameEvent {
    Loaded { name: String, total: usize },
    LoadFailed(String),
    TargetChanged { point: PointOfInterest, distance_km: f64 },
    DistanceUpdated { distance_km: f64, trend: DistanceTrend },
    QuizOpened(QuizState),
    QuizGraded(Grade),
    PointCompleted { id: PointId, completed: usize, remaining: usize },
    AllComplete,
    PositionUnavailable(String),
    PositionOverdue { waited: Duration },
    InputRejected(String),
}
