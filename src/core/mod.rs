//! Core match types: seats, players, actions, state, RNG, configuration.
//!
//! These are plain data. The rules that move a `GameState` from one
//! snapshot to the next live in `games::straight_pool`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerIdentity, PlayerMap};
pub use rng::GameRng;
pub use config::{MatchConfig, DEFAULT_TARGET_SCORE, RACK_SIZE, ROLLOVER_AT};
pub use action::{Action, InningEntry};
pub use state::{GamePhase, GameState, RackMode, RackState, SessionInfo, TurnTally};
