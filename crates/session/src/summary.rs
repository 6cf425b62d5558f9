use core::fmt::{self, Display};

/// Message band for a final percentage. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 80% and above.
    Master,
    /// 60% up to 80%.
    Solid,
    /// Below 60%.
    Novice,
}

impl Tier {
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Master,
            60.. => Self::Solid,
            _ => Self::Novice,
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Master => "A perfect score! You're a trivia master!",
            Self::Solid => "Great job! You know your stuff.",
            Self::Novice => "Good effort! Time to hit the books for the next round.",
        })
    }
}

/// Final result of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

impl Summary {
    pub const fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    /// Rounded percentage of correct answers. An empty quiz scores zero.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let score = self.score.min(self.total) as u64;
        let total = self.total as u64;
        // Round half up.
        ((200 * score + total) / (2 * total)) as u8
    }

    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }
}
