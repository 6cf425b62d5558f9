use crate::{
    error::{Error, InvalidBaseUrl, Rejection, Result},
    retry::RetryPolicy,
    transport::{Reply, Transport},
};
use core::fmt::Write;
use hyper::{StatusCode, Uri};
use model::{Category, CategoryList, Question, QuestionBatch, QuizParameters};

/// Embedded code the bank uses for its own rate limiting.
const RATE_LIMIT_CODE: i64 = 5;

/// Client for the question bank.
pub struct QuestionSource<T> {
    transport: T,
    base: Box<str>,
    policy: RetryPolicy,
}

impl<T: Transport> QuestionSource<T> {
    /// Validates that `base` is an absolute URI before accepting it.
    pub fn new(transport: T, base: &str) -> core::result::Result<Self, InvalidBaseUrl> {
        let base = base.trim_end_matches('/');
        let uri: Uri = base.parse().map_err(|_| InvalidBaseUrl)?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(InvalidBaseUrl);
        }
        Ok(Self { transport, base: base.into(), policy: RetryPolicy::default() })
    }

    /// Replaces the default backoff of 2, 4 and 8 seconds.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists every category the bank knows about. Not retried.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let uri: Uri = [self.base.as_ref(), "/api_category.php"].concat().parse().map_err(|_| Error::SourceUnavailable)?;
        log::debug!("Fetching categories from {uri}.");

        let Reply { status, body } = self.transport.get(uri).await.map_err(|err| {
            log::error!("Category request failed: {err:?}.");
            Error::SourceUnavailable
        })?;
        if !status.is_success() {
            log::error!("Category request answered with HTTP {status}.");
            return Err(Error::SourceUnavailable);
        }

        let CategoryList { trivia_categories } = serde_json::from_slice(&body).map_err(|err| {
            log::error!("Malformed category list: {err}.");
            Error::SourceUnavailable
        })?;
        Ok(trivia_categories)
    }

    /// Fetches a batch of questions, retrying with backoff while rate limited.
    /// The returned questions are still entity-encoded and unshuffled.
    pub async fn fetch_questions(&self, params: &QuizParameters) -> Result<Vec<Question>> {
        let uri: Uri = self.question_uri(params).parse()?;
        log::info!("Fetching questions from {uri}.");

        let mut retries = 0;
        loop {
            match self.try_fetch_questions(uri.clone(), params.amount()).await {
                Err(Error::RateLimited) if self.policy.should_retry(retries) => {
                    retries += 1;
                    let delay = self.policy.delay(retries);
                    log::warn!("Rate limited by the question bank. Retry {retries} in {delay:?}.");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    log::error!("Question request failed after {retries} retries: {err:?}.");
                    return Err(err);
                }
                Ok(questions) => return Ok(questions),
            }
        }
    }

    async fn try_fetch_questions(&self, uri: Uri, amount: usize) -> Result<Vec<Question>> {
        let Reply { status, body } = self.transport.get(uri).await?;
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited);
        }
        if !status.is_success() {
            log::error!("Question request answered with HTTP {status}.");
            return Err(Error::Transport);
        }

        let QuestionBatch { response_code, results } = serde_json::from_slice(&body)?;
        if response_code == RATE_LIMIT_CODE {
            return Err(Error::RateLimited);
        }
        if let Some(reason) = Rejection::from_code(response_code) {
            return Err(reason.into());
        }
        if results.len() != amount {
            log::warn!("Requested {amount} questions but received {}.", results.len());
            return Err(Rejection::NoResults.into());
        }
        Ok(results)
    }

    /// Builds the question URI. Filters set to "any" are left out because the
    /// bank rejects them when sent explicitly.
    pub fn question_uri(&self, params: &QuizParameters) -> String {
        let mut uri = format!("{}/api.php?amount={}&type=multiple", self.base, params.amount);
        if let Some(id) = params.category.id() {
            // Writing into a `String` never fails.
            let _ = write!(uri, "&category={id}");
        }
        if let Some(difficulty) = params.difficulty {
            let _ = write!(uri, "&difficulty={difficulty}");
        }
        uri
    }
}
