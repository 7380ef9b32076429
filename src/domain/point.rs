use crate::domain::Coordinate;
use std::fmt::{Display, Formatter};

/// Stable identifier of a point: its position in the loaded point document.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PointId(pub usize);

impl Display for PointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub wrong_answers: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PointOfInterest {
    pub id: PointId,
    pub title: String,
    pub coordinate: Coordinate,
    pub questions: Vec<Question>,
}

/// The immutable set of points for one game session.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct PointSet {
    name: String,
    points: Vec<PointOfInterest>,
}

impl PointSet {
    pub fn new(name: String, points: Vec<PointOfInterest>) -> Self {
        PointSet { name, points }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: PointId) -> Option<&PointOfInterest> {
        // Ids are indices, see the point loader
        self.points.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.points.iter()
    }
}
