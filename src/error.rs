// error.rs - Crate error types
//
// `Error` covers bootstrapping; `RelayError` is the one failure the page
// reports to the visitor.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),

    #[error("invalid config: {0} must be finite and non-negative")]
    Negative(&'static str),

    #[error("no project is configured for container `{0}`")]
    UnknownProject(String),

    #[error("container has no area ({0}x{1})")]
    EmptyViewport(u32, u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Network(String),

    #[error("relay rejected submission ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("a submission is already in flight")]
    Busy,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
