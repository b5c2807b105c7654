//! Match configuration.
//!
//! Rack geometry is fixed by the game and lives in constants. Target score
//! and foul penalties are league settings and live in `MatchConfig`, which
//! can be built in code or loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::rules::{RulesError, RulesResult};

/// Balls in a full rack (opening rack, or after a re-rack).
pub const RACK_SIZE: u32 = 15;

/// Balls pocketed in a rack before the 14 are re-racked around the break ball.
pub const ROLLOVER_AT: u32 = 14;

/// Default race for a league match.
pub const DEFAULT_TARGET_SCORE: i32 = 125;

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Points needed to win.
    pub target_score: i32,

    /// Penalty for an accidental foul (also used for a ball dropped off the table).
    pub foul_penalty: i32,

    /// Penalty for a deliberate foul.
    pub deliberate_foul_penalty: i32,

    /// Penalty for each of the first two consecutive breaking fouls.
    pub breaking_foul_penalty: i32,

    /// Flat penalty for the third consecutive foul. Replaces the foul's own penalty.
    pub three_foul_penalty: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            foul_penalty: 1,
            deliberate_foul_penalty: 16,
            breaking_foul_penalty: 2,
            three_foul_penalty: 15,
        }
    }
}

impl MatchConfig {
    /// Create a new config with a custom target score.
    pub fn with_target_score(mut self, target: i32) -> Self {
        self.target_score = target;
        self
    }

    /// Create a new config with a custom accidental foul penalty.
    pub fn with_foul_penalty(mut self, penalty: i32) -> Self {
        self.foul_penalty = penalty;
        self
    }

    /// Create a new config with a custom deliberate foul penalty.
    pub fn with_deliberate_foul_penalty(mut self, penalty: i32) -> Self {
        self.deliberate_foul_penalty = penalty;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RulesError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a playable match.
    pub fn validate(&self) -> RulesResult<()> {
        if self.target_score <= 0 {
            return Err(RulesError::InvalidTargetScore(self.target_score));
        }

        let penalties = [
            ("foul_penalty", self.foul_penalty),
            ("deliberate_foul_penalty", self.deliberate_foul_penalty),
            ("breaking_foul_penalty", self.breaking_foul_penalty),
            ("three_foul_penalty", self.three_foul_penalty),
        ];
        if let Some((name, value)) = penalties.iter().find(|(_, v)| *v < 0) {
            return Err(RulesError::InvalidConfig(format!(
                "{name} must not be negative, got {value}"
            )));
        }

        Ok(())
    }
}
