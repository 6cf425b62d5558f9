use model::QuizParameters;

const DEFAULT_API_URL: &str = "https://opentdb.com";
const DEFAULT_AMOUNT: u8 = 10;

/// Startup settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the question bank.
    pub api_url: Box<str>,
    /// Question count used when `start` is given no amount.
    pub amount: u8,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = var("TRIVIA_API_URL").map_or_else(|| DEFAULT_API_URL.into(), String::into_boxed_str);
        let amount = match var("TRIVIA_AMOUNT") {
            Some(amount) => amount.parse()?,
            None => DEFAULT_AMOUNT,
        };
        anyhow::ensure!(
            (1..=QuizParameters::MAX_AMOUNT).contains(&amount),
            "TRIVIA_AMOUNT must be between 1 and {}",
            QuizParameters::MAX_AMOUNT
        );
        Ok(Self { api_url, amount })
    }
}
