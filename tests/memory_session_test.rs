//! Scenario tests for the memory challenge state machine.

use strictly_memory::{
    Action, CellStatus, Effect, GameConfig, GameStatus, InvariantSet, Session, SessionInvariants,
};

const CHALLENGE: [usize; 6] = [3, 8, 12, 17, 21, 24];
const MISSES: [usize; 3] = [0, 1, 2];

/// Grid of 25 cells, 6 to memorize, 3 wrong picks allowed, 10 seconds.
fn config() -> GameConfig {
    GameConfig::new(5, 6, 3, 10, 3).expect("valid config")
}

fn playing_session() -> Session {
    let mut session = Session::new(1, config(), CHALLENGE.to_vec());
    session.apply(Action::Start);
    let token = session.challenge_timer().expect("challenge delay scheduled");
    session.apply(Action::ChallengeElapsed(token));
    assert_eq!(session.status(), GameStatus::Playing);
    session
}

fn tick(session: &mut Session) -> Vec<Effect> {
    let token = session.countdown_timer().expect("countdown running");
    session.apply(Action::Tick(token))
}

#[test]
fn test_six_correct_picks_win_in_any_order() {
    let orders: [[usize; 6]; 3] = [
        CHALLENGE,
        [24, 21, 17, 12, 8, 3],
        [12, 3, 24, 8, 21, 17],
    ];
    for order in orders {
        let mut session = playing_session();
        for (i, cell) in order.iter().enumerate() {
            assert_eq!(session.status(), GameStatus::Playing, "ended early at pick {}", i);
            session.apply(Action::Pick(*cell));
        }
        assert_eq!(session.status(), GameStatus::Won);
        assert!(session.countdown() > 0);
        assert_eq!(session.correct_picks(), 6);
    }
}

#[test]
fn test_mixed_picks_still_win_below_wrong_limit() {
    let mut session = playing_session();
    session.apply(Action::Pick(MISSES[0]));
    session.apply(Action::Pick(MISSES[1]));
    for cell in CHALLENGE {
        session.apply(Action::Pick(cell));
    }
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.wrong_picks(), 2);
}

#[test]
fn test_third_wrong_pick_loses_immediately() {
    let mut session = playing_session();
    session.apply(Action::Pick(MISSES[0]));
    session.apply(Action::Pick(MISSES[1]));
    assert_eq!(session.status(), GameStatus::Playing);

    let countdown = session.countdown_timer().unwrap();
    let effects = session.apply(Action::Pick(MISSES[2]));

    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.countdown(), 10);
    assert_eq!(effects, vec![Effect::Cancel(countdown)]);
}

#[test]
fn test_countdown_expiry_loses() {
    let mut session = playing_session();
    for remaining in (1..10).rev() {
        assert!(tick(&mut session).is_empty());
        assert_eq!(session.countdown(), remaining);
        assert_eq!(session.status(), GameStatus::Playing);
    }

    let countdown = session.countdown_timer().unwrap();
    let effects = tick(&mut session);

    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.countdown(), 0);
    assert_eq!(effects, vec![Effect::Cancel(countdown)]);
    assert!(session.countdown_timer().is_none());
}

#[test]
fn test_ticks_after_loss_change_nothing() {
    let mut session = playing_session();
    let countdown = session.countdown_timer().unwrap();
    for _ in 0..10 {
        session.apply(Action::Tick(countdown));
    }
    let lost = session.clone();
    assert!(session.apply(Action::Tick(countdown)).is_empty());
    assert_eq!(session, lost);
}

#[test]
fn test_repick_is_a_no_op() {
    let mut session = playing_session();
    session.apply(Action::Pick(MISSES[0]));
    session.apply(Action::Pick(MISSES[1]));
    let before = session.clone();

    for _ in 0..5 {
        assert!(session.apply(Action::Pick(MISSES[1])).is_empty());
    }

    assert_eq!(session, before);
    assert_eq!(session.picked().len(), 2);
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn test_out_of_grid_pick_is_ignored() {
    let mut session = playing_session();
    session.apply(Action::Pick(25));
    session.apply(Action::Pick(usize::MAX));
    assert!(session.picked().is_empty());
}

#[test]
fn test_picks_after_win_are_ignored() {
    let mut session = playing_session();
    for cell in CHALLENGE {
        session.apply(Action::Pick(cell));
    }
    session.apply(Action::Pick(MISSES[0]));
    assert_eq!(session.picked().len(), 6);
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_stale_challenge_token_does_not_skip_phase() {
    let mut session = Session::new(1, config(), CHALLENGE.to_vec());
    session.apply(Action::Start);
    let mut token = session.challenge_timer().unwrap();
    token.generation += 1;
    session.apply(Action::ChallengeElapsed(token));
    assert_eq!(session.status(), GameStatus::Challenge);
}

#[test]
fn test_oversized_challenge_requires_whole_grid() {
    let config = GameConfig::new(2, 10, 1, 10, 3).unwrap();
    let mut session = Session::new(1, config, vec![2, 0, 3, 1]);
    session.apply(Action::Start);
    let token = session.challenge_timer().unwrap();
    session.apply(Action::ChallengeElapsed(token));

    for cell in [0, 1, 2] {
        session.apply(Action::Pick(cell));
        assert_eq!(session.status(), GameStatus::Playing);
    }
    session.apply(Action::Pick(3));
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_cell_classification_through_a_loss() {
    let mut session = Session::new(1, config(), CHALLENGE.to_vec());
    assert!(session.cell_statuses().all(|(_, s)| s == CellStatus::Normal));

    session.apply(Action::Start);
    assert_eq!(session.cell_status(3), Some(CellStatus::Highlight));
    assert_eq!(session.cell_status(0), Some(CellStatus::Normal));

    let token = session.challenge_timer().unwrap();
    session.apply(Action::ChallengeElapsed(token));
    assert_eq!(session.cell_status(3), Some(CellStatus::Normal));

    session.apply(Action::Pick(3));
    session.apply(Action::Pick(0));
    assert_eq!(session.cell_status(3), Some(CellStatus::Correct));
    assert_eq!(session.cell_status(0), Some(CellStatus::Wrong));

    session.apply(Action::Pick(1));
    session.apply(Action::Pick(2));
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.cell_status(8), Some(CellStatus::Highlight));
    assert_eq!(session.cell_status(3), Some(CellStatus::Correct));
}

#[test]
fn test_invariants_hold_through_a_full_game() {
    let mut session = Session::new(1, config(), CHALLENGE.to_vec());
    assert!(SessionInvariants::check_all(&session).is_ok());

    session.apply(Action::Start);
    assert!(SessionInvariants::check_all(&session).is_ok());

    let token = session.challenge_timer().unwrap();
    session.apply(Action::ChallengeElapsed(token));
    tick(&mut session);
    session.apply(Action::Pick(CHALLENGE[0]));
    session.apply(Action::Pick(MISSES[0]));
    assert!(SessionInvariants::check_all(&session).is_ok());

    for cell in CHALLENGE {
        session.apply(Action::Pick(cell));
    }
    assert_eq!(session.status(), GameStatus::Won);
    assert!(SessionInvariants::check_all(&session).is_ok());
}
