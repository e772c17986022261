use thiserror::Error;

/// Failures surfaced by the decode components. Parsing is fail-fast: a
/// malformed instruction aborts the whole call before any state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognised direction {0:?}")]
    InvalidDirection(String),

    #[error("invalid distance {0:?}")]
    InvalidDistance(String),

    #[error("no position was visited twice")]
    NoRevisit,

    #[error("unrecognised screen operation {0:?}")]
    InvalidOperation(String),
}
