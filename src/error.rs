use std::fmt::{self, Display};

/// Problems with a line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty,
    UnknownCommand,
    InvalidAmount,
    InvalidCategory,
    InvalidDifficulty,
    TooManyArguments,
    /// An answer number outside the listed options.
    UnknownChoice,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "Please enter a command.",
            Self::UnknownCommand => "Unknown command. Type `help` to list the commands.",
            Self::InvalidAmount => "The number of questions must be between 1 and 50.",
            Self::InvalidCategory => "Category must be `any` or a numeric identifier from `categories`.",
            Self::InvalidDifficulty => "Difficulty must be `any`, `easy`, `medium`, or `hard`.",
            Self::TooManyArguments => "Too many arguments. Usage: `start [amount] [category] [difficulty]`.",
            Self::UnknownChoice => "That is not one of the listed answers.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
