//! Straight pool (14.1 continuous).
//!
//! - Two players race to a target score, one point per pocketed ball
//! - Fouls cost 1 point (16 if deliberate); the third consecutive foul
//!   costs a flat 15 and forces a fresh 15-ball rack
//! - When 14 balls of a rack are down they are re-racked around the
//!   remaining break ball and play continues
//! - The opening break has its own foul and choice rules
//!
//! After someone reaches the target the match may continue so the shooter
//! can extend their run. Pocketed balls no longer score but still count
//! towards high run; fouls still cost points. The winner never changes.

mod game;

pub use game::{StraightPool, StraightPoolBuilder};
