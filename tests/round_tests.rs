//! Round rule tests against the pure API: profiles, extension, judging.

use rust_genius::rules::{judge, submit};
use rust_genius::sequence::extend;
use rust_genius::{
    expected_order, resolve, Difficulty, DifficultyProfile, GameRng, GameState, Phase,
    RoundOutcome, Sequence, Signal,
};

// =============================================================================
// Profiles
// =============================================================================

#[test]
fn test_resolve_table() {
    let table: Vec<_> = Difficulty::ALL.iter().map(|d| (d.name(), resolve(*d))).collect();

    assert_eq!(
        table,
        vec![
            ("easy", DifficultyProfile { interval_ms: 800, alphabet_size: 6, reversed_expected: false }),
            ("medium", DifficultyProfile { interval_ms: 600, alphabet_size: 9, reversed_expected: false }),
            ("hard", DifficultyProfile { interval_ms: 400, alphabet_size: 9, reversed_expected: true }),
        ]
    );
}

#[test]
#[should_panic(expected = "Unknown difficulty selector")]
fn test_invalid_selector_fails_fast() {
    let _ = Difficulty::named("insane");
}

// =============================================================================
// Example scenarios
// =============================================================================

/// Easy: clear [green], grow to two, then miss on the second position.
#[test]
fn test_easy_scenario() {
    let state = GameState::awaiting_input(Difficulty::Easy, [Signal::Green]);
    let cleared = submit(&state, Signal::Green).unwrap();
    assert_eq!(cleared.outcome, RoundOutcome::RoundComplete);

    let mut rng = GameRng::new(42);
    let grown = extend(cleared.state.sequence(), &Difficulty::Easy.profile(), &mut rng);
    assert_eq!(grown.len(), 2);
    assert_eq!(grown[0], Signal::Green);

    let state = GameState::awaiting_input(Difficulty::Easy, [Signal::Green, Signal::Red]);
    let first = submit(&state, Signal::Green).unwrap();
    assert_eq!(first.outcome, RoundOutcome::Continue);

    let second = submit(&first.state, Signal::Blue).unwrap();
    assert_eq!(second.outcome, RoundOutcome::GameOver { level: 2 });
    assert!(!second.state.is_running());
}

/// Hard: [blue, red] is answered red, blue.
#[test]
fn test_hard_scenario() {
    let state = GameState::awaiting_input(Difficulty::Hard, [Signal::Blue, Signal::Red]);

    let first = submit(&state, Signal::Red).unwrap();
    assert_eq!(first.outcome, RoundOutcome::Continue);

    let second = submit(&first.state, Signal::Blue).unwrap();
    assert_eq!(second.outcome, RoundOutcome::RoundComplete);
    assert_eq!(second.state.phase(), Phase::Preparing);
}

/// Hard: the forward order is wrong unless the sequence is a palindrome.
#[test]
fn test_hard_rejects_forward_order() {
    let state = GameState::awaiting_input(Difficulty::Hard, [Signal::Blue, Signal::Red]);
    let first = submit(&state, Signal::Blue).unwrap();

    assert_eq!(first.outcome, RoundOutcome::GameOver { level: 2 });
}

/// A palindrome reads the same both ways.
#[test]
fn test_palindrome_under_reversal() {
    let sequence: Sequence = vec![Signal::Teal, Signal::Lime, Signal::Teal].into();
    let hard = Difficulty::Hard.profile();

    assert_eq!(expected_order(&sequence, &hard), sequence);
}

/// Signals outside the active alphabet are simply wrong.
#[test]
fn test_out_of_alphabet_press_is_a_miss() {
    let state = GameState::awaiting_input(Difficulty::Easy, [Signal::Green]);
    let result = submit(&state, Signal::Lime).unwrap();

    assert_eq!(result.outcome, RoundOutcome::GameOver { level: 1 });
}

#[test]
fn test_judge_only_latest_entry() {
    let expected: Sequence = vec![Signal::Red, Signal::Red, Signal::Blue].into();
    let progress: Sequence = vec![Signal::Red, Signal::Red].into();

    assert_eq!(judge(&expected, &progress), RoundOutcome::Continue);
}

#[test]
#[should_panic(expected = "Submitted 2 signals for a sequence of 1")]
fn test_judge_overlong_progress() {
    let expected: Sequence = vec![Signal::Red].into();
    let progress: Sequence = vec![Signal::Red, Signal::Red].into();
    let _ = judge(&expected, &progress);
}
