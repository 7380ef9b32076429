use crate::domain::{Coordinate, PointId, PointOfInterest, PointSet};
use crate::geo::distance_km;
use crate::progress::ProgressTracker;
use ordered_float::OrderedFloat;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Resolution {
    pub target_id: PointId,
    pub distance_km: f64,
    /// Whether the target differs from the previously resolved one.
    pub changed: bool,
}

/// Returns the incomplete point closest to `player` and its distance, or `None` if all points are completed.
///
/// Points at the exact same distance resolve to the lowest id.
pub fn nearest<'a>(player: Coordinate, points: &'a PointSet, progress: &ProgressTracker) -> Option<(&'a PointOfInterest, f64)> {
    points
        .iter()
        .filter(|point| !progress.is_complete(point.id))
        .map(|point| (point, distance_km(player, point.coordinate)))
        .min_by_key(|(point, distance)| (OrderedFloat(*distance), point.id))
}

pub fn resolve(player: Coordinate, points: &PointSet, progress: &ProgressTracker, previous_target: Option<PointId>) -> Option<Resolution> {
    nearest(player, points, progress).map(|(target, distance_km)| Resolution {
        target_id: target.id,
        distance_km,
        changed: previous_target != Some(target.id),
    })
}
