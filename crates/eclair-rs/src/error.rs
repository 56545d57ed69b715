use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, timeout or body read failure
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Node answered with a non-success status
    #[error("`{method}` failed with {status}: {body}")]
    Status {
        method: String,
        status: StatusCode,
        body: String,
    },
    #[error("{0}")]
    Custom(String),
}
