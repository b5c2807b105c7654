//! High run: the most balls pocketed in a single turn.
//!
//! Computed from the inning log only, so any turn still in progress must be
//! flushed with `GameState::finalize_turn_if_needed` first.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, InningEntry, PlayerId, PlayerMap};

/// Largest single-turn ball count across all entries, 0 for an empty log.
pub fn high_run<'a>(entries: impl IntoIterator<Item = &'a InningEntry>) -> u32 {
    entries.into_iter().map(|e| e.balls).max().unwrap_or(0)
}

/// Largest single-turn ball count for one player, `None` if they have no entries.
pub fn high_run_for<'a>(
    entries: impl IntoIterator<Item = &'a InningEntry>,
    player: PlayerId,
) -> Option<u32> {
    entries
        .into_iter()
        .filter(|e| e.player == player)
        .map(|e| e.balls)
        .max()
}

/// High runs for a whole match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighRuns {
    pub overall: u32,
    pub by_player: PlayerMap<Option<u32>>,
}

impl HighRuns {
    /// Compute from a state's log.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            overall: high_run(&state.log),
            by_player: PlayerMap::new(|p| high_run_for(&state.log, p)),
        }
    }
}
