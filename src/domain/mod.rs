mod answer;
pub mod commands;
mod coordinate;
pub mod events;
mod point;

pub use answer::{AnswerOption, Grade};
pub use coordinate::Coordinate;
pub use point::{PointId, PointOfInterest, PointSet, Question};
