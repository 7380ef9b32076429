use crate::domain::{AnswerOption, Grade, PointId, PointOfInterest, Question};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// A quiz for a single point, with an answer order that is fixed for the lifetime of the quiz.
#[derive(Clone, PartialEq, Debug)]
pub struct QuizState {
    point_id: PointId,
    question: Question,
    shuffled_answers: Vec<AnswerOption>,
    selected_index: Option<usize>,
}

impl QuizState {
    /// Starts a quiz with the first question of `point`, or returns `None` if the point has no questions.
    pub fn begin<R>(point: &PointOfInterest, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let question = point.questions.first()?.clone();

        let mut shuffled_answers = Vec::with_capacity(question.wrong_answers.len() + 1);
        shuffled_answers.push(AnswerOption::correct(&question.correct_answer));
        shuffled_answers.extend(question.wrong_answers.iter().map(AnswerOption::wrong));
        shuffled_answers.shuffle(rng);

        Some(QuizState {
            point_id: point.id,
            question,
            shuffled_answers,
            selected_index: None,
        })
    }

    pub fn point_id(&self) -> PointId {
        self.point_id
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn shuffled_answers(&self) -> &[AnswerOption] {
        &self.shuffled_answers
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn select(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.shuffled_answers.len() {
            return Err(QuizError::AnswerOutOfRange {
                index,
                len: self.shuffled_answers.len(),
            });
        }
        self.selected_index = Some(index);
        Ok(())
    }

    /// Grades the selected answer. An incorrect answer clears the selection so the player can retry.
    pub fn submit(&mut self) -> Result<Grade, QuizError> {
        let index = self.selected_index.ok_or(QuizError::NoSelection)?;

        if self.shuffled_answers[index].is_correct {
            Ok(Grade::Correct)
        } else {
            self.selected_index = None;
            Ok(Grade::Incorrect)
        }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum QuizError {
    #[error("no answer selected")]
    NoSelection,
    #[error("answer {index} does not exist, there are {len} answers")]
    AnswerOutOfRange { index: usize, len: usize },
}
