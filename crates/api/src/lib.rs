mod client;
mod retry;

pub mod error;
pub mod transport;

pub use client::QuestionSource;
pub use error::{Error, InvalidBaseUrl, Rejection, Result};
pub use retry::RetryPolicy;
pub use transport::{HyperTransport, Reply, Transport};
