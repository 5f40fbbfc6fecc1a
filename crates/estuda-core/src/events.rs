use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerKind;

/// Every meaningful state change produces an Event.
/// The CLI prints them; a GUI shell would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        session_id: String,
        disciplina_id: String,
        theme_id: String,
        estimated_minutes: u32,
        at: DateTime<Utc>,
    },
    SessionEnded {
        session_id: String,
        actual_minutes: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        session_id: String,
        at: DateTime<Utc>,
    },
    SessionResumed {
        session_id: String,
        at: DateTime<Utc>,
    },
    TimerStarted {
        duration_secs: u32,
        kind: TimerKind,
        at: DateTime<Utc>,
    },
    TimerPaused {
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    TimerResumed {
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    TimerStopped {
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and deactivated itself. The session, if
    /// any, stays open until the user ends it explicitly.
    TimerFinished {
        kind: TimerKind,
        at: DateTime<Utc>,
    },
    DistractionCaptured {
        distraction_id: String,
        at: DateTime<Utc>,
    },
    DistractionResolved {
        distraction_id: String,
        at: DateTime<Utc>,
    },
    DataLoaded {
        session_count: usize,
        at: DateTime<Utc>,
    },
}
