use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Lowercase spelling accepted by the question bank.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name one of the three difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDifficulty;

impl Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Difficulty must be one of easy, medium, or hard.")
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        [Self::Easy, Self::Medium, Self::Hard]
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(text))
            .ok_or(UnknownDifficulty)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

/// A category as listed by the question bank.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    /// Display name. May contain HTML entities.
    pub name: String,
}

/// Envelope returned by the category listing endpoint.
#[derive(Deserialize, Serialize, Debug)]
pub struct CategoryList {
    pub trivia_categories: Vec<Category>,
}

/// A question exactly as the question bank sends it. All text fields are
/// still HTML-entity encoded.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// Envelope returned by the question endpoint. The bank reports its own
/// status in `response_code`, where zero means success.
#[derive(Deserialize, Serialize, Debug)]
pub struct QuestionBatch {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<Question>,
}
