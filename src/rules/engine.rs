//! Rules engine trait.
//!
//! A rules implementation decides:
//! - What actions are legal in a state
//! - How an action transforms the state
//! - Whether the match has a winner

use smallvec::SmallVec;

use super::error::{RulesError, RulesResult};
use crate::core::{Action, GameState, MatchConfig, PlayerId, PlayerMap};

/// Outcome of a match that has a winner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,

    /// Scores at the time of the query.
    pub scores: PlayerMap<i32>,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Actions legal in a state. Never more than six at once.
pub type LegalActions = SmallVec<[Action; 6]>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must leave `state` untouched when it returns an error
/// - `apply_action` must be deterministic: same state and action, same result
/// - `is_terminal` returns `None` while nobody has won
pub trait RulesEngine {
    /// Get the match configuration.
    fn config(&self) -> &MatchConfig;

    /// Apply an action to the state in place.
    fn apply_action(&self, state: &mut GameState, action: Action) -> RulesResult<()>;

    /// Check if the match has been won.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate the actions legal in the current phase.
    fn legal_actions(&self, state: &GameState) -> LegalActions {
        Action::ALL
            .into_iter()
            .filter(|action| action.allowed_in(state.phase))
            .collect()
    }

    /// Reject an action that does not fit the current phase.
    fn validate(&self, state: &GameState, action: Action) -> RulesResult<()> {
        if action.allowed_in(state.phase) {
            Ok(())
        } else {
            Err(RulesError::InvalidActionForPhase {
                action,
                phase: state.phase,
            })
        }
    }

    /// Pure form of `apply_action`: returns the next state, leaving `state` as is.
    fn next_state(&self, state: &GameState, action: Action) -> RulesResult<GameState> {
        let mut next = state.clone();
        self.apply_action(&mut next, action)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult {
            winner: PlayerId::B,
            scores: PlayerMap::from_pair(98, 125),
        };

        assert!(!result.is_winner(PlayerId::A));
        assert!(result.is_winner(PlayerId::B));
    }
}
