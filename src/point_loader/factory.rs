use crate::domain::{Coordinate, PointId, PointOfInterest, PointSet, Question};
use crate::point_loader::serialized_point_set::{SerializedMarker, SerializedPointSet, SerializedQuestion};
use thiserror::Error;

pub fn from_json(json: &str) -> Result<PointSet, MalformedDataError> {
    let point_set = serde_json::from_str::<SerializedPointSet>(json)?;
    to_point_set(point_set)
}

pub fn from_value(value: serde_json::Value) -> Result<PointSet, MalformedDataError> {
    let point_set = serde_json::from_value::<SerializedPointSet>(value)?;
    to_point_set(point_set)
}

fn to_point_set(point_set: SerializedPointSet) -> Result<PointSet, MalformedDataError> {
    let points = point_set
        .markers
        .into_iter()
        .enumerate()
        .map(|(index, marker)| to_point(index, marker))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PointSet::new(point_set.name, points))
}

// The id is the position in the document so points sharing a coordinate stay distinct
fn to_point(index: usize, marker: SerializedMarker) -> Result<PointOfInterest, MalformedDataError> {
    let coordinate = Coordinate::new(marker.lat, marker.lng);
    if !coordinate.is_valid() {
        return Err(if coordinate.has_valid_latitude() {
            MalformedDataError::InvalidLongitude { index, value: coordinate.lng }
        } else {
            MalformedDataError::InvalidLatitude { index, value: coordinate.lat }
        });
    }

    let questions = marker
        .questions
        .into_iter()
        .map(|question| to_question(index, question))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PointOfInterest {
        id: PointId(index),
        title: marker.title,
        coordinate,
        questions,
    })
}

fn to_question(index: usize, question: SerializedQuestion) -> Result<Question, MalformedDataError> {
    let mut wrong_answers: Vec<String> = Vec::with_capacity(question.wrong_answers.len());
    for answer in question.wrong_answers {
        if !wrong_answers.contains(&answer) {
            wrong_answers.push(answer);
        }
    }

    if wrong_answers.is_empty() {
        return Err(MalformedDataError::MissingWrongAnswers {
            index,
            question: question.question,
        });
    }

    Ok(Question {
        prompt: question.question,
        correct_answer: question.correct_answer,
        wrong_answers,
    })
}

#[derive(Error, Debug)]
pub enum MalformedDataError {
    #[error("json deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("invalid latitude {value} for marker {index}, must be between -90 and 90")]
    InvalidLatitude { index: usize, value: f64 },
    #[error("invalid longitude {value} for marker {index}, must be between -180 and 180")]
    InvalidLongitude { index: usize, value: f64 },
    #[error("question '{question}' of marker {index} has no wrong answers")]
    MissingWrongAnswers { index: usize, question: String },
}
