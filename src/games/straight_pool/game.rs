//! Straight-pool rules implementation.

use log::{debug, info, warn};

use crate::core::{
    Action, GameRng, GamePhase, GameState, MatchConfig, PlayerId, PlayerIdentity, PlayerMap,
    SessionInfo,
};
use crate::rules::{GameResult, RulesEngine, RulesError, RulesResult};

/// Straight-pool (14.1 continuous) rules.
#[derive(Clone, Debug, Default)]
pub struct StraightPool {
    config: MatchConfig,
}

/// Builder for creating a StraightPool match.
pub struct StraightPoolBuilder {
    config: MatchConfig,
    players: PlayerMap<PlayerIdentity>,
    breaker: PlayerId,
    session: SessionInfo,
}

impl Default for StraightPoolBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            players: PlayerMap::from_pair(
                PlayerIdentity::guest("Player A"),
                PlayerIdentity::guest("Player B"),
            ),
            breaker: PlayerId::A,
            session: SessionInfo::default(),
        }
    }
}

impl StraightPoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn target_score(mut self, target: i32) -> Self {
        self.config.target_score = target;
        self
    }

    pub fn players(mut self, a: PlayerIdentity, b: PlayerIdentity) -> Self {
        self.players = PlayerMap::from_pair(a, b);
        self
    }

    /// Seat that takes the opening break. Defaults to seat A.
    pub fn breaker(mut self, breaker: PlayerId) -> Self {
        self.breaker = breaker;
        self
    }

    /// Pick the breaker with a seeded coin toss.
    pub fn breaker_by_coin_toss(mut self, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        self.breaker = rng.coin_toss();
        debug!("Coin toss (seed {}): {} breaks", rng.seed(), self.breaker);
        self
    }

    pub fn session(mut self, session: SessionInfo) -> Self {
        self.session = session;
        self
    }

    /// Build the rules and the initial state.
    pub fn build(self) -> RulesResult<(StraightPool, GameState)> {
        self.config.validate()?;

        let (a, b) = self.players.into_pair();
        let state = GameState::new(self.config.target_score, a, b, self.breaker, self.session);

        info!(
            "Match started: {} vs {}, race to {}, {} breaks",
            state.player(PlayerId::A).name(),
            state.player(PlayerId::B).name(),
            state.target_score,
            state.breaker,
        );

        Ok((StraightPool::new(self.config), state))
    }
}

impl StraightPool {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Change the target before any real activity.
    pub fn set_target_score(&self, state: &mut GameState, target: i32) -> RulesResult<()> {
        if state.target_locked {
            return Err(RulesError::TargetLocked);
        }
        if target <= 0 {
            return Err(RulesError::InvalidTargetScore(target));
        }
        state.target_score = target;
        Ok(())
    }

    // === Opening ===

    fn legal_break(&self, state: &mut GameState, called_ball_made: bool) {
        state.phase = GamePhase::Scoring;
        state.at_table = if called_ball_made {
            state.breaker
        } else {
            state.breaker.opponent()
        };
        state.turn.reset();
        state.lock_target();
    }

    fn breaking_foul(&self, state: &mut GameState) {
        let breaker = state.breaker;
        state.at_table = breaker;
        let player = &mut state.players[breaker];

        if player.fouls_in_a_row >= 2 {
            player.score -= self.config.three_foul_penalty;
            player.fouls_in_a_row = 0;
            info!("{breaker}: third consecutive breaking foul, re-rack");

            state.phase = GamePhase::Opening;
            state.rack.rerack();
            state.turn.reset();
        } else {
            player.score -= self.config.breaking_foul_penalty;
            player.fouls_in_a_row += 1;

            state.phase = GamePhase::AwaitChoiceAfterBreakFoul;
            state.turn.break_fouls += 1;
        }
        state.lock_target();
    }

    /// The break foul goes on the log against the breaker. Like a legal
    /// break, handing the table over does not count an inning.
    fn accept_table(&self, state: &mut GameState) {
        state.at_table = state.breaker;
        state.log_turn();
        state.at_table = state.breaker.opponent();
        state.phase = GamePhase::Scoring;
        state.lock_target();
    }

    fn force_rerack(&self, state: &mut GameState) {
        state.phase = GamePhase::Opening;
        state.at_table = state.breaker;
        state.rack.rerack();
        state.turn.reset();
    }

    // === Table play ===

    /// Post-win balls are counted for the run but do not score.
    fn pocket_ball(&self, state: &mut GameState) {
        let frozen = state.is_won() || state.post_win;

        let player = state.active_mut();
        if !frozen {
            player.score += 1;
        }
        player.clear_fouls();

        if state.rack.pocket() {
            info!("Rack {} started (14 racked + break ball)", state.rack.rack_number);
        }
        state.turn.balls += 1;
        state.lock_target();
    }

    /// Shared rule for the three table-play fouls.
    fn foul(&self, state: &mut GameState, base_penalty: i32) {
        let seat = state.at_table;
        let player = state.active_mut();

        if player.fouls_in_a_row >= 2 {
            player.score -= self.config.three_foul_penalty;
            player.fouls_in_a_row = 0;
            info!("{seat}: three fouls in a row, fresh rack");

            state.rack.fresh_rack();
            state.turn.reset();
        } else {
            player.score -= base_penalty;
            player.fouls_in_a_row += 1;

            state.turn.fouls += 1;
            state.end_turn();
        }
        state.lock_target();
    }

    fn safety(&self, state: &mut GameState) {
        state.active_mut().clear_fouls();
        state.end_turn();
        state.lock_target();
    }

    fn end_turn(&self, state: &mut GameState) {
        if state.turn.has_activity() {
            state.lock_target();
        }
        state.end_turn();
    }
}

impl RulesEngine for StraightPool {
    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn apply_action(&self, state: &mut GameState, action: Action) -> RulesResult<()> {
        if let Err(e) = self.validate(state, action) {
            warn!("Rejected action: {e}");
            return Err(e);
        }

        let seat = state.at_table;
        match action {
            Action::LegalBreak => self.legal_break(state, false),
            Action::LegalBreakWithBall => self.legal_break(state, true),
            Action::BreakingFoul => self.breaking_foul(state),
            Action::AcceptTable => self.accept_table(state),
            Action::ForceRerack => self.force_rerack(state),
            Action::PocketBall => self.pocket_ball(state),
            Action::Foul | Action::FoulBallDropped => self.foul(state, self.config.foul_penalty),
            Action::DeliberateFoul => self.foul(state, self.config.deliberate_foul_penalty),
            Action::Safety => self.safety(state),
            Action::EndTurn => self.end_turn(state),
        }

        if let Some(winner) = state.check_winner() {
            info!(
                "{} wins with {} (race to {})",
                state.player(winner).name(),
                state.player(winner).score,
                state.target_score
            );
        }

        debug!(
            "{seat}: {action} -> {} to shoot, scores {}-{}, rack {} ({} down)",
            state.at_table,
            state.players[PlayerId::A].score,
            state.players[PlayerId::B].score,
            state.rack.rack_number,
            state.rack.balls_down,
        );
        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner.map(|winner| GameResult {
            winner,
            scores: state.scores(),
        })
    }
}
