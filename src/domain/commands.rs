use std::str::FromStr;
use thiserror::Error;

/// Input from the player, typed on the console.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerCommand {
    /// Selects the answer at the given zero-based index.
    Select(usize),
    Submit,
    Reload,
    Quit,
}

impl FromStr for PlayerCommand {
    type Err = CommandParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Err(CommandParseError::Empty);
        };

        let command = match keyword.to_lowercase().as_str() {
            "select" | "s" => {
                let raw = parts.next().ok_or(CommandParseError::MissingAnswerNumber)?;
                // Answers are shown 1-based
                match raw.parse::<usize>() {
                    Ok(number) if number > 0 => PlayerCommand::Select(number - 1),
                    _ => return Err(CommandParseError::InvalidAnswerNumber(raw.to_string())),
                }
            }
            "submit" => PlayerCommand::Submit,
            "reload" => PlayerCommand::Reload,
            "quit" | "exit" => PlayerCommand::Quit,
            other => return Err(CommandParseError::Unknown(other.to_string())),
        };

        if let Some(extra) = parts.next() {
            return Err(CommandParseError::UnexpectedArgument(extra.to_string()));
        }

        Ok(command)
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', expected select <n>, submit, reload or quit")]
    Unknown(String),
    #[error("missing answer number, usage: select <n>")]
    MissingAnswerNumber,
    #[error("invalid answer number '{0}', answers start at 1")]
    InvalidAnswerNumber(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}
