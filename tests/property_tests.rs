//! Property-based tests for the match rules using proptest
//!
//! Random action sequences are played through a session; at every step the
//! invariants that must hold for any legal play are checked.
use proptest::prelude::*;
use rust_straight_pool::{
    high_run, high_run_for, Action, GamePhase, GameState, InningEntry, MatchSession, PlayerId,
    PlayerIdentity, ROLLOVER_AT,
};

// Strategy to pick an action index; mapped onto the legal actions of the moment
fn choice_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..400)
}

// Table-play strategy weighted towards pocketing balls, as in real matches
fn table_action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => Just(Action::PocketBall),
        1 => Just(Action::Foul),
        1 => Just(Action::FoulBallDropped),
        1 => Just(Action::DeliberateFoul),
        1 => Just(Action::Safety),
        2 => Just(Action::EndTurn),
    ]
}

fn start(target: i32) -> MatchSession {
    MatchSession::start(
        target,
        PlayerIdentity::new(1, "Alice"),
        PlayerIdentity::new(2, "Bob"),
        None,
    )
    .unwrap()
}

// Play the choices, always picking among the legal actions
fn play(
    session: &mut MatchSession,
    choices: &[usize],
    mut check: impl FnMut(&GameState, &GameState, Action),
) {
    for &choice in choices {
        let legal = session.legal_actions();
        let action = legal[choice % legal.len()];
        let before = session.state().clone();
        let after = session.apply(action).unwrap().clone();
        check(&before, &after, action);
    }
}

fn inning_entry_strategy() -> impl Strategy<Value = InningEntry> {
    (1u32..1000, 0u8..=1, 0u32..150, 0u32..3, 0u32..3).prop_map(|(n, seat, balls, fouls, bf)| {
        let player = PlayerId::new(seat).unwrap();
        InningEntry::new(n, player, balls, fouls, bf)
    })
}

proptest! {
    #[test]
    fn test_foul_streak_never_reaches_three(choices in choice_strategy()) {
        let mut session = start(125);

        play(&mut session, &choices, |_, after, _| {
            for (_, player) in after.players.iter() {
                assert!(player.fouls_in_a_row <= 2);
            }
        });
    }

    #[test]
    fn test_third_foul_always_flat_penalty(actions in prop::collection::vec(table_action_strategy(), 0..300)) {
        let mut session = start(1000);
        session.apply(Action::LegalBreak).unwrap();

        for action in actions {
            let before = session.state().clone();
            let seat = before.at_table;
            let after = session.apply(action).unwrap().clone();

            if action.is_table_foul() && before.player(seat).fouls_in_a_row == 2 {
                prop_assert_eq!(after.player(seat).score, before.player(seat).score - 15);
                prop_assert_eq!(after.player(seat).fouls_in_a_row, 0);
                prop_assert_eq!(after.rack.rack_number, before.rack.rack_number + 1);
                prop_assert_eq!(after.rack.balls_remaining(), 15);
                prop_assert_eq!(after.at_table, seat);
            }
        }
    }

    #[test]
    fn test_rack_bounds_and_single_rollover(choices in choice_strategy()) {
        let mut session = start(125);

        play(&mut session, &choices, |before, after, action| {
            assert!(after.rack.balls_down < ROLLOVER_AT);
            assert!(after.rack.rack_number >= before.rack.rack_number);

            if action == Action::PocketBall && before.rack.balls_down == ROLLOVER_AT - 1 {
                assert_eq!(after.rack.rack_number, before.rack.rack_number + 1);
                assert_eq!(after.rack.balls_down, 0);
            }
        });
    }

    #[test]
    fn test_winner_is_permanent_and_scores_freeze(choices in choice_strategy()) {
        let mut session = start(15);

        play(&mut session, &choices, |before, after, action| {
            if let Some(winner) = before.winner {
                assert_eq!(after.winner, Some(winner));
                if action == Action::PocketBall {
                    assert_eq!(after.scores(), before.scores());
                    assert_eq!(after.turn.balls, before.turn.balls + 1);
                }
            }
        });
    }

    #[test]
    fn test_winner_leads_when_declared(choices in choice_strategy()) {
        let mut session = start(20);

        play(&mut session, &choices, |before, after, _| {
            if before.winner.is_none() {
                if let Some(winner) = after.winner {
                    assert!(after.player(winner).score >= after.target_score);
                    assert!(after.player(winner.opponent()).score < after.target_score);
                }
            }
        });
    }

    #[test]
    fn test_log_only_grows(choices in choice_strategy()) {
        let mut session = start(125);

        play(&mut session, &choices, |before, after, _| {
            assert!(after.log.len() >= before.log.len());
            for (old, new) in before.log.iter().zip(after.log.iter()) {
                assert_eq!(old, new);
            }
        });
    }

    #[test]
    fn test_undo_restores_previous_state(choices in choice_strategy()) {
        let mut session = start(125);

        for choice in choices {
            let legal = session.legal_actions();
            let action = legal[choice % legal.len()];
            let before = session.state().clone();

            session.apply(action).unwrap();
            session.undo();
            prop_assert_eq!(session.state(), &before);

            session.apply(action).unwrap();
        }
    }

    #[test]
    fn test_high_run_after_finalize_matches_log(choices in choice_strategy()) {
        let mut session = start(125);
        play(&mut session, &choices, |_, _, _| {});

        session.finalize_turn_if_needed();
        let state = session.state();
        let expected = state.log.iter().map(|e| e.balls).max().unwrap_or(0);

        prop_assert_eq!(session.high_run(), expected);
        prop_assert!(!state.turn.has_activity());
    }

    #[test]
    fn test_high_run_of_fixture_log(log in prop::collection::vec(inning_entry_strategy(), 0..50)) {
        let expected = log.iter().map(|e| e.balls).max().unwrap_or(0);
        prop_assert_eq!(high_run(&log), expected);

        for seat in PlayerId::all() {
            let per_player = high_run_for(&log, seat);
            let expected = log.iter().filter(|e| e.player == seat).map(|e| e.balls).max();
            prop_assert_eq!(per_player, expected);
            prop_assert!(per_player.unwrap_or(0) <= high_run(&log));
        }
    }

    #[test]
    fn test_rejected_actions_change_nothing(choices in choice_strategy(), pick in 0usize..11) {
        let mut session = start(125);
        play(&mut session, &choices, |_, _, _| {});

        let action = Action::ALL[pick];
        let phase = session.state().phase;
        if !action.allowed_in(phase) {
            let before = session.state().clone();
            let depth = session.undo_depth();

            prop_assert!(session.apply(action).is_err());
            prop_assert_eq!(session.state(), &before);
            prop_assert_eq!(session.undo_depth(), depth);
        } else {
            prop_assert!(session.legal_actions().contains(&action));
        }
    }

    #[test]
    fn test_opening_phases_never_return(choices in choice_strategy()) {
        let mut session = start(125);

        play(&mut session, &choices, |before, after, _| {
            if before.phase == GamePhase::Scoring {
                assert_eq!(after.phase, GamePhase::Scoring);
            }
        });
    }
}
