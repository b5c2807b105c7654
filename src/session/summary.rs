//! What a finished match leaves behind.
//!
//! - `MatchSummary`: display line appended to the in-memory results list
//! - `MatchRecord`: the row handed to the roster/match store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, PlayerMap};
use crate::stats::HighRuns;

/// Results-list line for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub week_key: Option<String>,
    pub week_label: Option<String>,
    pub names: PlayerMap<String>,
    pub scores: PlayerMap<i32>,

    /// `None` if the match ended without anyone reaching the target.
    pub winner_name: Option<String>,

    /// Best single turn by either player.
    pub high_run: u32,
}

impl MatchSummary {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            week_key: state.session.week_key.clone(),
            week_label: state.session.week_label.clone(),
            names: state.players.map(|p| p.name().to_string()),
            scores: state.scores(),
            winner_name: state.winner.map(|w| state.player(w).name().to_string()),
            high_run: HighRuns::from_state(state).overall,
        }
    }
}

/// A finished match as the store records it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub timestamp: DateTime<Utc>,

    /// Digits of the session week key, if any.
    pub week: Option<u32>,

    pub roster_a: u32,
    pub roster_b: u32,
    pub score_a: i32,
    pub score_b: i32,
    pub high_run_a: Option<u32>,
    pub high_run_b: Option<u32>,
    pub innings: u32,

    /// Always false from the engine; the store's owner decides.
    pub counts_for_standings: bool,

    pub note: Option<String>,
}

impl MatchRecord {
    /// Build a record from a finished state and resolved roster ids.
    #[must_use]
    pub fn new(
        state: &GameState,
        roster_ids: (u32, u32),
        timestamp: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        let high_runs = HighRuns::from_state(state);
        Self {
            timestamp,
            week: state.session.week_number(),
            roster_a: roster_ids.0,
            roster_b: roster_ids.1,
            score_a: state.player(PlayerId::A).score,
            score_b: state.player(PlayerId::B).score,
            high_run_a: high_runs.by_player[PlayerId::A],
            high_run_b: high_runs.by_player[PlayerId::B],
            innings: state.innings,
            counts_for_standings: false,
            note,
        }
    }
}

/// In-memory list of summaries, most recent last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResults {
    entries: Vec<MatchSummary>,
}

impl MatchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: MatchSummary) {
        self.entries.push(summary);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchSummary> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MatchSummary> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
