//! Rules engine trait and rule errors.
//!
//! Rule implementations implement `RulesEngine` to define:
//! - Legal actions for each phase
//! - How actions modify state
//! - Win detection
//!
//! Sessions call into `RulesEngine` and never interpret scoring rules
//! directly.

pub mod engine;
pub mod error;

pub use engine::{GameResult, LegalActions, RulesEngine};
pub use error::{RulesError, RulesResult};
