//! Match state: the aggregate every action transforms.
//!
//! ## GameState
//!
//! - Target score and whether it is locked
//! - Innings, the seat at the table, the two players
//! - Phase and the seat that took the opening break
//! - Rack bookkeeping (`RackState`)
//! - Per-turn accumulators (`TurnTally`)
//! - The append-only inning log
//! - Session metadata, winner and post-win flag
//!
//! The log is an `im::Vector`, so cloning a state for the undo history shares
//! the log's structure instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::InningEntry;
use super::config::{RACK_SIZE, ROLLOVER_AT};
use super::player::{Player, PlayerId, PlayerIdentity, PlayerMap};

/// Where the match is relative to the opening break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the opening break.
    Opening,
    /// A breaking foul was called; the opponent chooses to accept the table
    /// or to have it re-racked.
    AwaitChoiceAfterBreakFoul,
    /// Normal play for the rest of the match.
    Scoring,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Opening => write!(f, "opening"),
            GamePhase::AwaitChoiceAfterBreakFoul => write!(f, "awaiting choice after break foul"),
            GamePhase::Scoring => write!(f, "scoring"),
        }
    }
}

/// How the balls currently on the table were racked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RackMode {
    /// Full 15-ball rack.
    Opening,
    /// 14 balls racked with the 15th left in play as the break ball.
    Continuous,
}

/// Rack bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RackState {
    /// Starts at 1 and only ever increases.
    pub rack_number: u32,

    /// Balls pocketed from the current rack, always below `ROLLOVER_AT`.
    pub balls_down: u32,

    pub mode: RackMode,
}

impl Default for RackState {
    fn default() -> Self {
        Self::new()
    }
}

impl RackState {
    /// The opening rack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rack_number: 1,
            balls_down: 0,
            mode: RackMode::Opening,
        }
    }

    /// Balls still on the table.
    ///
    /// Right after a rollover this reports 15: the 14 re-racked balls plus
    /// the break ball.
    #[must_use]
    pub fn balls_remaining(&self) -> u32 {
        RACK_SIZE - self.balls_down
    }

    /// True when the table shows 14 racked balls and a break ball.
    #[must_use]
    pub fn is_fresh_continuous(&self) -> bool {
        self.rack_number >= 2 && self.mode == RackMode::Continuous && self.balls_down == 0
    }

    /// Scoreboard label for the rack.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_fresh_continuous() {
            "14 racked + 1 break ball".to_string()
        } else {
            format!("{} balls remaining", self.balls_remaining())
        }
    }

    /// Record one pocketed ball. Returns true if this ball ended the rack.
    pub fn pocket(&mut self) -> bool {
        self.balls_down += 1;
        if self.balls_down >= ROLLOVER_AT {
            self.rack_number += 1;
            self.balls_down = 0;
            self.mode = RackMode::Continuous;
            true
        } else {
            false
        }
    }

    /// Put all 15 balls back for another break of the same rack.
    pub fn rerack(&mut self) {
        self.balls_down = 0;
    }

    /// Start a new full 15-ball rack.
    pub fn fresh_rack(&mut self) {
        self.rack_number += 1;
        self.balls_down = 0;
        self.mode = RackMode::Opening;
    }
}

/// Per-turn accumulators, reset whenever a turn ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnTally {
    pub balls: u32,
    pub fouls: u32,
    pub break_fouls: u32,
}

impl TurnTally {
    /// Anything worth logging happened this turn.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.balls + self.fouls + self.break_fouls > 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Week/session the match belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Key used by the store, e.g. `"week-7"`.
    pub week_key: Option<String>,

    /// Human-readable label, e.g. `"Week 7 (Oct 14)"`.
    pub week_label: Option<String>,
}

impl SessionInfo {
    #[must_use]
    pub fn new(week_key: impl Into<String>, week_label: impl Into<String>) -> Self {
        Self {
            week_key: Some(week_key.into()),
            week_label: Some(week_label.into()),
        }
    }

    /// Week number formed by the digits of the week key.
    ///
    /// ```
    /// use rust_straight_pool::core::SessionInfo;
    ///
    /// assert_eq!(SessionInfo::new("Week 7", "").week_number(), Some(7));
    /// assert_eq!(SessionInfo::new("preseason", "").week_number(), None);
    /// ```
    #[must_use]
    pub fn week_number(&self) -> Option<u32> {
        let key = self.week_key.as_deref()?;
        let digits: String = key.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok()
    }
}

/// The complete state of a match.
///
/// Cloning is cheap enough to keep one snapshot per applied action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Target ===
    pub target_score: i32,

    /// Set on the first real activity; the target cannot change afterwards.
    pub target_locked: bool,

    // === Table ===
    /// Starts at 1, incremented each time seat B's turn ends.
    pub innings: u32,

    /// Seat currently shooting.
    pub at_table: PlayerId,

    pub players: PlayerMap<Player>,

    // === Opening / phase ===
    pub phase: GamePhase,

    /// Seat that took the opening break.
    pub breaker: PlayerId,

    // === Rack ===
    pub rack: RackState,

    // === Turn and log ===
    pub turn: TurnTally,

    /// Sequence number of the last log entry.
    pub inning_counter: u32,

    pub log: Vector<InningEntry>,

    // === Session and result ===
    pub session: SessionInfo,

    /// Set once, never cleared.
    pub winner: Option<PlayerId>,

    /// Play continues after the winner reached the target; pocketed balls
    /// are still logged but no longer score.
    pub post_win: bool,
}

impl GameState {
    /// A fresh match waiting for the opening break.
    #[must_use]
    pub fn new(
        target_score: i32,
        a: PlayerIdentity,
        b: PlayerIdentity,
        breaker: PlayerId,
        session: SessionInfo,
    ) -> Self {
        Self {
            target_score,
            target_locked: false,
            innings: 1,
            at_table: breaker,
            players: PlayerMap::from_pair(Player::new(a), Player::new(b)),
            phase: GamePhase::Opening,
            breaker,
            rack: RackState::new(),
            turn: TurnTally::default(),
            inning_counter: 0,
            log: Vector::new(),
            session,
            winner: None,
            post_win: false,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Player currently at the table.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.at_table]
    }

    pub fn active_mut(&mut self) -> &mut Player {
        &mut self.players[self.at_table]
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.players.map(|p| p.score)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }

    // === Transitions shared by the rules ===

    /// Freeze the target score.
    pub fn lock_target(&mut self) {
        self.target_locked = true;
    }

    /// Write the turn's tally to the log if it had activity, then reset it.
    ///
    /// Neither the table nor the innings counter move.
    pub fn log_turn(&mut self) {
        if self.turn.has_activity() {
            self.inning_counter += 1;
            self.log
                .push_back(InningEntry::from_tally(self.inning_counter, self.at_table, &self.turn));
        }
        self.turn.reset();
    }

    /// End the current turn.
    ///
    /// Logs the turn, counts an inning when seat B's turn ends and passes
    /// the table.
    pub fn end_turn(&mut self) {
        self.log_turn();
        if self.at_table == PlayerId::B {
            self.innings += 1;
        }
        self.at_table = self.at_table.opponent();
    }

    /// End the turn if it has unlogged activity. Returns true if it did.
    pub fn finalize_turn_if_needed(&mut self) -> bool {
        if self.turn.has_activity() {
            self.end_turn();
            true
        } else {
            false
        }
    }

    /// Declare the player at the table the winner if they reached the target.
    ///
    /// Does nothing once a winner exists. Returns the newly declared winner.
    pub fn check_winner(&mut self) -> Option<PlayerId> {
        if self.winner.is_some() {
            return None;
        }
        if self.active().score >= self.target_score {
            self.winner = Some(self.at_table);
            self.post_win = true;
            return self.winner;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            125,
            PlayerIdentity::new(1, "Alice"),
            PlayerIdentity::new(2, "Bob"),
            PlayerId::A,
            SessionInfo::default(),
        )
    }

    #[test]
    fn test_new_state() {
        let state = state();

        assert_eq!(state.phase, GamePhase::Opening);
        assert_eq!(state.at_table, PlayerId::A);
        assert_eq!(state.breaker, PlayerId::A);
        assert_eq!(state.innings, 1);
        assert_eq!(state.rack, RackState::new());
        assert_eq!(state.rack.balls_remaining(), 15);
        assert!(state.log.is_empty());
        assert!(!state.target_locked);
        assert!(!state.is_won());
    }

    #[test]
    fn test_rack_rollover_at_fourteen() {
        let mut rack = RackState::new();

        for _ in 0..13 {
            assert!(!rack.pocket());
        }
        assert_eq!(rack.balls_down, 13);
        assert_eq!(rack.balls_remaining(), 2);

        assert!(rack.pocket());
        assert_eq!(rack.rack_number, 2);
        assert_eq!(rack.balls_down, 0);
        assert_eq!(rack.mode, RackMode::Continuous);
        assert_eq!(rack.balls_remaining(), 15);
    }

    #[test]
    fn test_rack_label() {
        let mut rack = RackState::new();
        assert_eq!(rack.label(), "15 balls remaining");

        for _ in 0..14 {
            rack.pocket();
        }
        assert_eq!(rack.label(), "14 racked + 1 break ball");

        rack.pocket();
        assert_eq!(rack.label(), "14 balls remaining");
    }

    #[test]
    fn test_rerack_and_fresh_rack() {
        let mut rack = RackState::new();
        rack.pocket();
        rack.rerack();
        assert_eq!(rack.rack_number, 1);
        assert_eq!(rack.balls_down, 0);

        for _ in 0..14 {
            rack.pocket();
        }
        rack.fresh_rack();
        assert_eq!(rack.rack_number, 3);
        assert_eq!(rack.mode, RackMode::Opening);
    }

    #[test]
    fn test_end_turn_without_activity_writes_nothing() {
        let mut state = state();

        state.end_turn();

        assert!(state.log.is_empty());
        assert_eq!(state.at_table, PlayerId::B);
        assert_eq!(state.innings, 1);
    }

    #[test]
    fn test_end_turn_logs_and_counts_innings() {
        let mut state = state();
        state.turn.balls = 3;
        state.end_turn();

        state.turn.fouls = 1;
        state.end_turn();

        assert_eq!(state.log.len(), 2);
        assert_eq!(state.log[0], InningEntry::new(1, PlayerId::A, 3, 0, 0));
        assert_eq!(state.log[1], InningEntry::new(2, PlayerId::B, 0, 1, 0));
        assert_eq!(state.innings, 2);
        assert_eq!(state.at_table, PlayerId::A);
        assert_eq!(state.turn, TurnTally::default());
    }

    #[test]
    fn test_log_turn_keeps_table_and_innings() {
        let mut state = state();
        state.at_table = PlayerId::B;
        state.turn.break_fouls = 1;

        state.log_turn();

        assert_eq!(state.log[0], InningEntry::new(1, PlayerId::B, 0, 0, 1));
        assert_eq!(state.at_table, PlayerId::B);
        assert_eq!(state.innings, 1);
        assert!(!state.turn.has_activity());
    }

    #[test]
    fn test_finalize_turn_if_needed() {
        let mut state = state();
        assert!(!state.finalize_turn_if_needed());
        assert_eq!(state.at_table, PlayerId::A);

        state.turn.balls = 1;
        assert!(state.finalize_turn_if_needed());
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_check_winner_only_once() {
        let mut state = state();
        state.players[PlayerId::A].score = 125;

        assert_eq!(state.check_winner(), Some(PlayerId::A));
        assert!(state.post_win);

        state.at_table = PlayerId::B;
        state.players[PlayerId::B].score = 200;
        assert_eq!(state.check_winner(), None);
        assert_eq!(state.winner, Some(PlayerId::A));
    }

    #[test]
    fn test_week_number() {
        assert_eq!(SessionInfo::new("w12", "Week 12").week_number(), Some(12));
        assert_eq!(SessionInfo::default().week_number(), None);
        assert_eq!(SessionInfo::new("", "").week_number(), None);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = state();
        state.turn.balls = 2;
        state.end_turn();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
