use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Slack throttled the call, via HTTP 429 or an `ok: false`
    /// envelope with the `ratelimited` code. `retry_after` is the
    /// advisory wait in seconds from the `Retry-After` header, when
    /// the response carried one.
    #[error("rate limited by slack")]
    RateLimited { retry_after: Option<u64> },

    #[error("slack api call {method} failed: {code}")]
    Api { method: &'static str, code: String },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }
}
