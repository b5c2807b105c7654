//! Match sessions: undo history, finishing, and hand-off to the store.
//!
//! - `MatchSession`: the explicitly owned live match
//! - `FinishedMatch`: a match that has been ended and can be recorded
//! - `MatchSummary` / `MatchResults`: in-memory results list
//! - `MatchRecord` / `MatchStore`: what the roster/match store receives

pub mod error;
pub mod match_session;
pub mod store;
pub mod summary;

pub use error::{SessionError, SessionResult};
pub use match_session::{FinishedMatch, MatchSession};
pub use store::{InMemoryStore, MatchStore};
pub use summary::{MatchRecord, MatchResults, MatchSummary};
