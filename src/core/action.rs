//! Actions and the inning log.
//!
//! `Action` is the closed set of things the presentation layer can ask the
//! engine to do. Opening actions adjudicate the first break of the match;
//! table-play actions cover everything after it. Each action is valid in
//! exactly the phases `Action::allowed_in` names, and rule implementations
//! dispatch on it with an exhaustive `match`.
//!
//! `InningEntry` is one line of the append-only inning log written when a
//! turn with activity ends.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::{GamePhase, TurnTally};

/// A request from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // === Opening ===
    /// Legal break, nothing pocketed. The opponent comes to the table.
    LegalBreak,
    /// Legal break with the called ball made. The breaker continues.
    LegalBreakWithBall,
    /// Breaking foul (−2, or the three-foul penalty on the third in a row).
    BreakingFoul,
    /// After a breaking foul, the opponent accepts the table as it lies.
    AcceptTable,
    /// After a breaking foul, the opponent makes the breaker break again.
    ForceRerack,

    // === Table play ===
    /// One ball pocketed. The turn continues.
    PocketBall,
    /// Accidental foul (−1).
    Foul,
    /// Foul where a ball left the table (−1).
    FoulBallDropped,
    /// Deliberate foul (−16).
    DeliberateFoul,
    /// Safety played; the turn ends.
    Safety,
    /// Miss or voluntary end of turn.
    EndTurn,
}

impl Action {
    /// Every action, opening actions first.
    pub const ALL: [Action; 11] = [
        Action::LegalBreak,
        Action::LegalBreakWithBall,
        Action::BreakingFoul,
        Action::AcceptTable,
        Action::ForceRerack,
        Action::PocketBall,
        Action::Foul,
        Action::FoulBallDropped,
        Action::DeliberateFoul,
        Action::Safety,
        Action::EndTurn,
    ];

    /// Whether this action may be applied while the match is in `phase`.
    #[must_use]
    pub const fn allowed_in(self, phase: GamePhase) -> bool {
        match self {
            Action::LegalBreak | Action::LegalBreakWithBall | Action::BreakingFoul => {
                matches!(phase, GamePhase::Opening)
            }
            Action::AcceptTable | Action::ForceRerack => {
                matches!(phase, GamePhase::AwaitChoiceAfterBreakFoul)
            }
            Action::PocketBall
            | Action::Foul
            | Action::FoulBallDropped
            | Action::DeliberateFoul
            | Action::Safety
            | Action::EndTurn => matches!(phase, GamePhase::Scoring),
        }
    }

    /// True for the five opening-break actions.
    #[must_use]
    pub const fn is_opening(self) -> bool {
        matches!(
            self,
            Action::LegalBreak
                | Action::LegalBreakWithBall
                | Action::BreakingFoul
                | Action::AcceptTable
                | Action::ForceRerack
        )
    }

    /// True for the three table-play fouls that go through the streak rule.
    #[must_use]
    pub const fn is_table_foul(self) -> bool {
        matches!(
            self,
            Action::Foul | Action::FoulBallDropped | Action::DeliberateFoul
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::LegalBreak => "legal break",
            Action::LegalBreakWithBall => "legal break, called ball made",
            Action::BreakingFoul => "breaking foul",
            Action::AcceptTable => "accept table",
            Action::ForceRerack => "force re-rack",
            Action::PocketBall => "pocket ball",
            Action::Foul => "foul",
            Action::FoulBallDropped => "foul, ball dropped",
            Action::DeliberateFoul => "deliberate foul",
            Action::Safety => "safety",
            Action::EndTurn => "end turn",
        };
        f.write_str(name)
    }
}

/// One completed turn in the inning log.
///
/// Entries are immutable once written; the log only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InningEntry {
    /// 1-based sequence number across the whole match.
    pub number: u32,

    /// Who was at the table.
    pub player: PlayerId,

    /// Balls pocketed during the turn.
    pub balls: u32,

    /// Table-play fouls during the turn.
    pub fouls: u32,

    /// Breaking fouls during the turn.
    pub break_fouls: u32,

    /// `balls − fouls − 2 × break_fouls`.
    pub points_delta: i32,
}

impl InningEntry {
    /// Create an entry, deriving `points_delta` from the counts.
    #[must_use]
    pub fn new(number: u32, player: PlayerId, balls: u32, fouls: u32, break_fouls: u32) -> Self {
        Self {
            number,
            player,
            balls,
            fouls,
            break_fouls,
            points_delta: balls as i32 - fouls as i32 - 2 * break_fouls as i32,
        }
    }

    /// Create an entry from the turn's accumulators.
    #[must_use]
    pub fn from_tally(number: u32, player: PlayerId, tally: &TurnTally) -> Self {
        Self::new(number, player, tally.balls, tally.fouls, tally.break_fouls)
    }
}
