//! The live match.
//!
//! A `MatchSession` owns the current `GameState`, the rules, and the undo
//! history. It is created by `start`, mutated only through `apply`,
//! `set_target_score`, `finalize_turn_if_needed` and `undo`, and ends by
//! being consumed: `finish` turns it into a `FinishedMatch`, `discard`
//! drops it.
//!
//! Every mutating call takes `&mut self`, so actions are applied strictly
//! one at a time. Callers that share a session across threads wrap it in a
//! lock.
//!
//! ## Undo
//!
//! Each successful mutation pushes the previous state onto the history.
//! Rejected actions push nothing. `undo` pops one snapshot; there is no
//! redo.

use chrono::Utc;
use log::{debug, info};

use super::error::{SessionError, SessionResult};
use super::store::MatchStore;
use super::summary::{MatchRecord, MatchResults, MatchSummary};
use crate::core::{Action, GameState, MatchConfig, PlayerId, PlayerIdentity, SessionInfo};
use crate::games::straight_pool::{StraightPool, StraightPoolBuilder};
use crate::rules::{GameResult, LegalActions, RulesEngine, RulesResult};
use crate::stats::{high_run, high_run_for, HighRuns};

/// A match in progress.
#[derive(Clone, Debug)]
pub struct MatchSession {
    rules: StraightPool,
    state: GameState,
    history: Vec<GameState>,
}

impl MatchSession {
    /// Start a match with default rules, seat A breaking.
    pub fn start(
        target_score: i32,
        a: PlayerIdentity,
        b: PlayerIdentity,
        session: Option<SessionInfo>,
    ) -> SessionResult<Self> {
        Self::start_with_config(MatchConfig::default().with_target_score(target_score), a, b, session)
    }

    /// Start a match with custom rules, seat A breaking.
    pub fn start_with_config(
        config: MatchConfig,
        a: PlayerIdentity,
        b: PlayerIdentity,
        session: Option<SessionInfo>,
    ) -> SessionResult<Self> {
        Self::from_builder(
            StraightPoolBuilder::new()
                .config(config)
                .players(a, b)
                .session(session.unwrap_or_default()),
        )
    }

    /// Start a match from a fully configured builder.
    pub fn from_builder(builder: StraightPoolBuilder) -> SessionResult<Self> {
        let (rules, state) = builder.build()?;
        Ok(Self {
            rules,
            state,
            history: Vec::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &StraightPool {
        &self.rules
    }

    #[must_use]
    pub fn legal_actions(&self) -> LegalActions {
        self.rules.legal_actions(&self.state)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Best logged turn by either player.
    #[must_use]
    pub fn high_run(&self) -> u32 {
        high_run(&self.state.log)
    }

    /// Best logged turn by one player.
    #[must_use]
    pub fn high_run_for(&self, player: PlayerId) -> Option<u32> {
        high_run_for(&self.state.log, player)
    }

    #[must_use]
    pub fn high_runs(&self) -> HighRuns {
        HighRuns::from_state(&self.state)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    // === Mutation ===

    /// Apply one action and publish the new state.
    ///
    /// On error the state and the undo history are unchanged.
    pub fn apply(&mut self, action: Action) -> RulesResult<&GameState> {
        let next = self.rules.next_state(&self.state, action)?;
        self.commit(next);
        Ok(&self.state)
    }

    /// Change the target score while it is still unlocked.
    pub fn set_target_score(&mut self, target: i32) -> RulesResult<&GameState> {
        let mut next = self.state.clone();
        self.rules.set_target_score(&mut next, target)?;
        self.commit(next);
        Ok(&self.state)
    }

    /// Flush an in-progress turn into the log.
    ///
    /// Does nothing (and records no undo step) when the turn has no activity.
    pub fn finalize_turn_if_needed(&mut self) -> &GameState {
        let mut next = self.state.clone();
        if next.finalize_turn_if_needed() {
            debug!("Flushed turn in progress for {}", self.state.at_table);
            self.commit(next);
        }
        &self.state
    }

    /// Restore the state before the last mutation. No-op with empty history.
    pub fn undo(&mut self) -> &GameState {
        if let Some(previous) = self.history.pop() {
            debug!("Undo ({} steps left)", self.history.len());
            self.state = previous;
        }
        &self.state
    }

    fn commit(&mut self, next: GameState) {
        self.history.push(std::mem::replace(&mut self.state, next));
    }

    // === Lifecycle ===

    /// End the match: flush the current turn, append the summary to
    /// `results`, and hand back the finished match for recording.
    pub fn finish(mut self, results: &mut MatchResults) -> FinishedMatch {
        self.finalize_turn_if_needed();

        let summary = MatchSummary::from_state(&self.state);
        info!(
            "Match finished: {} {} - {} {}, winner {}, high run {}",
            summary.names[PlayerId::A],
            summary.scores[PlayerId::A],
            summary.scores[PlayerId::B],
            summary.names[PlayerId::B],
            summary.winner_name.as_deref().unwrap_or("-"),
            summary.high_run,
        );
        results.push(summary.clone());

        FinishedMatch {
            state: self.state,
            summary,
        }
    }

    /// Abandon the match without recording anything.
    pub fn discard(self) {
        info!(
            "Match discarded: {} vs {}",
            self.state.player(PlayerId::A).name(),
            self.state.player(PlayerId::B).name()
        );
    }
}

/// A match that has been finished and can be handed to a store.
#[derive(Clone, Debug)]
pub struct FinishedMatch {
    state: GameState,
    summary: MatchSummary,
}

impl FinishedMatch {
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn summary(&self) -> &MatchSummary {
        &self.summary
    }

    /// Build the store record.
    ///
    /// Requires a winner and roster ids on both seats.
    pub fn to_record(&self, note: Option<String>) -> SessionResult<MatchRecord> {
        if self.state.winner.is_none() {
            return Err(SessionError::NoWinner);
        }
        let roster_id = |seat: PlayerId| {
            self.state
                .player(seat)
                .identity
                .id
                .ok_or(SessionError::MissingPlayerIdentity(seat))
        };
        let ids = (roster_id(PlayerId::A)?, roster_id(PlayerId::B)?);

        Ok(MatchRecord::new(&self.state, ids, Utc::now(), note))
    }

    /// Build the record and append it to `store`.
    pub fn save_to<S: MatchStore>(
        &self,
        store: &mut S,
        note: Option<String>,
    ) -> SessionResult<MatchRecord> {
        let record = self.to_record(note)?;
        store.append(record.clone())?;
        info!(
            "Saved match {} vs {} (week {:?})",
            record.roster_a, record.roster_b, record.week
        );
        Ok(record)
    }
}
