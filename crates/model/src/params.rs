use crate::quiz::Difficulty;
use core::{
    fmt::{self, Display},
    num::NonZeroU8,
    str::FromStr,
};

/// Optional category restriction. `Any` means the filter is left out of
/// the request entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Any,
    Only(u32),
}

impl CategoryFilter {
    pub const fn id(self) -> Option<u32> {
        if let Self::Only(id) = self {
            Some(id)
        } else {
            None
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

/// Raised when text is neither `any` nor a numeric category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCategory;

impl Display for InvalidCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Category must be `any` or a numeric identifier.")
    }
}

impl FromStr for CategoryFilter {
    type Err = InvalidCategory;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        text.parse().map(Self::Only).map_err(|_| InvalidCategory)
    }
}

/// User-selected settings for one quiz. Fixed once a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizParameters {
    pub amount: NonZeroU8,
    pub category: CategoryFilter,
    pub difficulty: Option<Difficulty>,
}

impl QuizParameters {
    /// Largest batch the question bank serves in one request.
    pub const MAX_AMOUNT: u8 = 50;

    /// Returns `None` unless `amount` lies within `1..=MAX_AMOUNT`.
    pub fn new(amount: u8, category: CategoryFilter, difficulty: Option<Difficulty>) -> Option<Self> {
        if amount > Self::MAX_AMOUNT {
            return None;
        }
        let amount = NonZeroU8::new(amount)?;
        Some(Self { amount, category, difficulty })
    }

    pub fn amount(&self) -> usize {
        usize::from(self.amount.get())
    }
}
