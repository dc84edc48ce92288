//! Errors raised by creature data sources.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no creature named or numbered {0:?}")]
    NotFound(String),

    #[error("upstream rate limit reached")]
    RateLimited,

    #[error("upstream server error (HTTP {0})")]
    Server(u16),

    #[error("unexpected upstream response (HTTP {0})")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed upstream data: {0}")]
    Malformed(String),

    #[error("{0} is not supported by this source")]
    Unsupported(&'static str),

    #[error("the data source has no creatures")]
    Empty,

    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<SourceError>,
    },
}

impl SourceError {
    /// Failures worth retrying when drawing a random answer.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::RateLimited | Self::Server(_))
    }
}
