use thiserror::Error;

/// Failure reaching or parsing the backend.
///
/// The session layer maps every variant uniformly to a fallback bot
/// message; the variants exist so the log can say what actually went
/// wrong.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}
