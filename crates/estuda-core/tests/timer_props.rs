//! Property tests: structural invariants hold under arbitrary intent
//! sequences.

use chrono::Utc;
use estuda_core::{AppState, Curriculum, Intent, SessionStatus, TimerKind};
use proptest::prelude::*;

fn arb_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        (1u32..=120).prop_map(|estimated_minutes| Intent::StartSession {
            disciplina_id: "direito-civil".into(),
            theme_id: "contratos".into(),
            estimated_minutes,
            subtema: None,
        }),
        Just(Intent::EndSession),
        Just(Intent::PauseSession),
        Just(Intent::ResumeSession),
        (1u32..=90).prop_map(|duration_minutes| Intent::StartTimer {
            duration_minutes,
            kind: TimerKind::Work,
        }),
        Just(Intent::PauseTimer),
        Just(Intent::ResumeTimer),
        Just(Intent::StopTimer),
        Just(Intent::TickTimer),
        ".{0,12}".prop_map(|text| Intent::AddDistraction { text }),
    ]
}

proptest! {
    /// `time_left` never leaves `[0, total_time]`, whatever the caller
    /// throws at the reducer.
    #[test]
    fn time_left_stays_within_bounds(intents in proptest::collection::vec(arb_intent(), 0..200)) {
        let mut state = AppState::new(Curriculum::builtin());
        let now = Utc::now();
        for intent in intents {
            // Precondition failures are expected; the invariant must hold
            // either way.
            let _ = state.apply(intent, now);
            prop_assert!(state.timer.time_left_secs <= state.timer.total_time_secs);
        }
    }

    /// At most one session is ever active or paused, and completed
    /// sessions only accumulate.
    #[test]
    fn single_current_session_and_append_only_history(
        intents in proptest::collection::vec(arb_intent(), 0..200)
    ) {
        let mut state = AppState::new(Curriculum::builtin());
        let now = Utc::now();
        let mut history_len = 0usize;
        for intent in intents {
            let _ = state.apply(intent, now);
            let non_completed = state
                .sessions
                .iter()
                .filter(|s| s.status != SessionStatus::Completed)
                .count();
            prop_assert_eq!(non_completed, 0);
            prop_assert!(state.sessions.len() >= history_len);
            history_len = state.sessions.len();
        }
    }
}
