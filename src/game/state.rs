use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    /// No point set loaded.
    Idle,
    Loading,
    /// Loaded, waiting for the first position sample.
    Tracking,
    Targeting,
    Quizzing,
    AllComplete,
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Idle => "idle",
            GameState::Loading => "loading",
            GameState::Tracking => "tracking",
            GameState::Targeting => "targeting",
            GameState::Quizzing => "quizzing",
            GameState::AllComplete => "all complete",
        };
        write!(f, "{}", name)
    }
}
