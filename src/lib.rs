//! # rust-straight-pool
//!
//! Rules engine for live scorekeeping of a two-player straight-pool
//! (14.1 continuous) match.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation in place**: every action maps one
//!    `GameState` to the next. The undo history is a stack of prior states.
//!
//! 2. **Closed action set**: `Action` is an enum dispatched through an
//!    exhaustive `match`; adding an action without a rule does not compile.
//!
//! 3. **Explicit ownership**: the live match is a `MatchSession` value owned
//!    by the caller, consumed when the match is finished or discarded.
//!
//! ## Architecture
//!
//! - **Opening**: legal break, break with a called ball, breaking fouls and
//!   the opponent's choice afterwards.
//!
//! - **Scoring**: pocketed balls, fouls with the three-foul rule, safeties,
//!   rack rollover at 14 balls, win detection and post-win play.
//!
//! - **Persistent Data Structures**: the inning log is an `im::Vector`, so
//!   snapshots share it instead of copying it.
//!
//! ## Modules
//!
//! - `core`: Seats, players, actions, state, RNG, configuration
//! - `rules`: `RulesEngine` trait and rule errors
//! - `games`: The straight-pool rules
//! - `stats`: High run from the inning log
//! - `session`: Live match, undo, finishing and store hand-off
//!
//! ## Example
//!
//! ```
//! use rust_straight_pool::{Action, GamePhase, MatchSession, PlayerId, PlayerIdentity};
//!
//! let mut session = MatchSession::start(
//!     125,
//!     PlayerIdentity::new(1, "Alice"),
//!     PlayerIdentity::new(2, "Bob"),
//!     None,
//! )
//! .unwrap();
//!
//! let state = session.apply(Action::LegalBreak).unwrap();
//! assert_eq!(state.phase, GamePhase::Scoring);
//! assert_eq!(state.at_table, PlayerId::B);
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod stats;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, InningEntry,
    GameRng,
    GamePhase, GameState, RackMode, RackState, SessionInfo, TurnTally,
    MatchConfig, DEFAULT_TARGET_SCORE, RACK_SIZE, ROLLOVER_AT,
    Player, PlayerId, PlayerIdentity, PlayerMap,
};

pub use crate::rules::{GameResult, LegalActions, RulesEngine, RulesError, RulesResult};

pub use crate::games::straight_pool::{StraightPool, StraightPoolBuilder};

pub use crate::stats::{high_run, high_run_for, HighRuns};

pub use crate::session::{
    FinishedMatch, MatchSession,
    InMemoryStore, MatchStore,
    MatchRecord, MatchResults, MatchSummary,
    SessionError, SessionResult,
};
