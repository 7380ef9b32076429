use crate::domain::{Coordinate, PointId, PointOfInterest, PointSet, Question};

pub const PLAZA: Coordinate = Coordinate::new(38.7895, 0.1667);

/// Returns a coordinate `meters` north of `origin`.
pub fn north_of(origin: Coordinate, meters: f64) -> Coordinate {
    Coordinate::new(origin.lat + meters / 1000.0 / 111.19492664455873, origin.lng)
}

/// Returns a coordinate `meters` east of `origin`, only accurate close to the equator.
pub fn east_of(origin: Coordinate, meters: f64) -> Coordinate {
    Coordinate::new(origin.lat, origin.lng + meters / 1000.0 / 111.19492664455873)
}

pub fn question(prompt: &str, correct: &str, wrong: &[&str]) -> Question {
    Question {
        prompt: prompt.to_string(),
        correct_answer: correct.to_string(),
        wrong_answers: wrong.iter().map(|w| w.to_string()).collect(),
    }
}

pub fn point(id: usize, title: &str, coordinate: Coordinate, questions: Vec<Question>) -> PointOfInterest {
    PointOfInterest {
        id: PointId(id),
        title: title.to_string(),
        coordinate,
        questions,
    }
}

pub fn point_set(points: Vec<PointOfInterest>) -> PointSet {
    PointSet::new("fixture".to_string(), points)
}
