//! Property tests for generation and validation.

use proptest::prelude::*;

use rust_genius::rules::submit;
use rust_genius::sequence::extend;
use rust_genius::{
    expected_order, Difficulty, GameConfig, GameRng, GameState, GeniusSession, RoundOutcome,
    Sequence, Signal,
};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// A difficulty plus a non-empty sequence drawn from its alphabet.
fn game(max_len: usize) -> impl Strategy<Value = (Difficulty, Vec<Signal>)> {
    difficulty().prop_flat_map(move |d| {
        let size = d.profile().alphabet_size;
        (
            Just(d),
            prop::collection::vec((0..size).prop_map(Signal::from_index), 1..max_len),
        )
    })
}

proptest! {
    #[test]
    fn extend_adds_one_signal_from_alphabet(
        d in difficulty(),
        seed in any::<u64>(),
        base_len in 0usize..30,
    ) {
        let profile = d.profile();
        let mut rng = GameRng::new(seed);
        let mut sequence = Sequence::new();
        for _ in 0..base_len {
            sequence = extend(&sequence, &profile, &mut rng);
        }

        let extended = extend(&sequence, &profile, &mut rng);

        prop_assert_eq!(extended.len(), sequence.len() + 1);
        prop_assert!(extended.iter().all(|s| profile.allows(*s)));
        prop_assert_eq!(extended.clone().slice(..sequence.len()), sequence);
    }

    #[test]
    fn correct_answer_completes_round((d, signals) in game(25)) {
        let mut state = GameState::awaiting_input(d, signals.iter().copied());
        let answer = expected_order(state.sequence(), &d.profile());

        for (i, signal) in answer.iter().enumerate() {
            let result = submit(&state, *signal).unwrap();
            let want = if i + 1 == answer.len() {
                RoundOutcome::RoundComplete
            } else {
                RoundOutcome::Continue
            };
            prop_assert_eq!(result.outcome, want);
            state = result.state;
        }
    }

    #[test]
    fn first_deviation_ends_game(
        (d, signals) in game(25),
        position_seed in any::<usize>(),
        offset_seed in any::<usize>(),
    ) {
        let size = d.profile().alphabet_size;
        let mut state = GameState::awaiting_input(d, signals.iter().copied());
        let answer = expected_order(state.sequence(), &d.profile());
        let position = position_seed % answer.len();
        let wrong = Signal::from_index((answer[position].index() + 1 + offset_seed % (size - 1)) % size);

        for signal in answer.iter().take(position) {
            state = submit(&state, *signal).unwrap().state;
        }
        let result = submit(&state, wrong).unwrap();

        prop_assert_eq!(result.outcome, RoundOutcome::GameOver { level: signals.len() });
        prop_assert!(!result.state.is_running());
        prop_assert!(submit(&result.state, answer[position]).is_none());
    }

    #[test]
    fn submissions_ignored_during_playback(
        d in difficulty(),
        seed in any::<u64>(),
        into_playback in 0u64..500,
        signal_index in 0usize..9,
    ) {
        let config = GameConfig::new().with_difficulty(d).with_seed(seed);
        let mut session = GeniusSession::headless(config).unwrap();
        session.start_game();
        session.advance_ms(1000 + into_playback);
        prop_assert!(session.is_playback_in_progress());

        let before = session.state().clone();
        prop_assert!(session.submit_signal(Signal::from_index(signal_index)).is_none());
        prop_assert_eq!(session.state(), &before);
    }
}
