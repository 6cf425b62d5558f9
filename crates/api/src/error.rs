use core::fmt::{self, Display};

/// Failure codes embedded in a question batch's `response_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not enough questions exist for the requested filters.
    NoResults,
    /// The bank refused one of the query parameters.
    InvalidParameter,
    TokenNotFound,
    TokenEmpty,
    Unknown(i64),
}

impl Rejection {
    /// Returns `None` for the success code and for the bank's own rate limit
    /// code, which is handled like an HTTP 429.
    pub const fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 | 5 => return None,
            1 => Self::NoResults,
            2 => Self::InvalidParameter,
            3 => Self::TokenNotFound,
            4 => Self::TokenEmpty,
            other => Self::Unknown(other),
        })
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoResults => "The question bank does not have enough questions for your selection.",
            Self::InvalidParameter => "The question bank rejected one of the quiz parameters.",
            Self::TokenNotFound => "The question bank does not recognize the session token.",
            Self::TokenEmpty => "The question bank has no more questions for this session token.",
            Self::Unknown(_) => "The question bank reported an unknown error.",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Categories could not be fetched or parsed.
    SourceUnavailable,
    /// The retry budget ran out while the bank kept rate limiting us.
    RateLimited,
    /// The bank answered but reported a failure of its own.
    UpstreamRejected(Rejection),
    /// Connection failure, non-success HTTP status, or malformed payload.
    Transport,
}

impl From<hyper::Error> for Error {
    fn from(_: hyper::Error) -> Self {
        Self::Transport
    }
}

impl From<hyper_util::client::legacy::Error> for Error {
    fn from(_: hyper_util::client::legacy::Error) -> Self {
        Self::Transport
    }
}

impl From<hyper::http::uri::InvalidUri> for Error {
    fn from(_: hyper::http::uri::InvalidUri) -> Self {
        Self::Transport
    }
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Self::Transport
    }
}

impl From<Rejection> for Error {
    fn from(reason: Rejection) -> Self {
        Self::UpstreamRejected(reason)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable => f.write_str("Failed to fetch the trivia categories."),
            Self::RateLimited => f.write_str("The question bank is busy. Please wait a moment and try again."),
            Self::UpstreamRejected(reason) => reason.fmt(f),
            Self::Transport => f.write_str("Failed to fetch quiz questions. Check your network connection."),
        }
    }
}

impl std::error::Error for Error {}

/// Raised when the configured base URL is not an absolute URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBaseUrl;

impl Display for InvalidBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The question bank URL must be an absolute URI such as `https://opentdb.com`.")
    }
}

impl std::error::Error for InvalidBaseUrl {}

pub type Result<T> = core::result::Result<T, Error>;
