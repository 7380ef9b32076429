#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn correct(text: impl Into<String>) -> Self {
        AnswerOption {
            text: text.into(),
            is_correct: true,
        }
    }

    pub fn wrong(text: impl Into<String>) -> Self {
        AnswerOption {
            text: text.into(),
            is_correct: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Grade {
    Correct,
    Incorrect,
}
