//! Session error types.

use thiserror::Error;

use crate::core::PlayerId;
use crate::rules::RulesError;

/// Errors raised while running or handing off a match.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SessionError {
    /// A rule rejected the request
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// A seat has no roster id, so the match can't be recorded
    #[error("{0} has no roster id")]
    MissingPlayerIdentity(PlayerId),

    /// Only matches with a winner are recorded
    #[error("match has no winner")]
    NoWinner,

    /// The store refused the record
    #[error("store error: {0}")]
    Store(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
