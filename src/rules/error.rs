//! Rules error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Action, GamePhase};

/// Errors raised while validating or applying an action.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum RulesError {
    /// The action is not available in the current phase.
    #[error("can't {action} during {phase}")]
    InvalidActionForPhase { action: Action, phase: GamePhase },

    /// The target score was already frozen by play.
    #[error("target score is locked once play has started")]
    TargetLocked,

    /// Target scores must be positive.
    #[error("invalid target score: {0}")]
    InvalidTargetScore(i32),

    /// Configuration could not be parsed or is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
