//! Analytics over the session history.
//!
//! Read-only derivations: per-discipline progress, suggested next
//! sessions, achievement unlocks and weekly aggregates. Everything is
//! recomputed from scratch on demand -- no analyzer keeps state, and
//! lookups through dangling discipline/theme ids degrade to "absent".

mod achievements;
mod progress;
mod suggestions;
mod weekly;

pub use achievements::{achievements, Achievement};
pub use progress::{discipline_progress, DisciplineProgress};
pub use suggestions::{suggested_sessions, SuggestedSession};
pub use weekly::{weekly_report, WeekStats};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::session::StudySession;

/// Aggregate totals over the whole history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_sessions: usize,
    pub total_minutes: u32,
    pub days_studied: usize,
    pub today_sessions: usize,
    pub avg_sessions_per_day: f64,
    pub avg_minutes_per_day: f64,
}

pub fn overview(sessions: &[StudySession], today: NaiveDate) -> Overview {
    let total_sessions = sessions.len();
    let total_minutes: u32 = sessions.iter().map(|s| s.actual_minutes).sum();
    let days: BTreeSet<NaiveDate> = sessions.iter().map(|s| s.created_at.date_naive()).collect();
    let days_studied = days.len();
    let today_sessions = sessions
        .iter()
        .filter(|s| s.created_at.date_naive() == today)
        .count();
    let (avg_sessions_per_day, avg_minutes_per_day) = if days_studied > 0 {
        (
            total_sessions as f64 / days_studied as f64,
            f64::from(total_minutes) / days_studied as f64,
        )
    } else {
        (0.0, 0.0)
    };
    Overview {
        total_sessions,
        total_minutes,
        days_studied,
        today_sessions,
        avg_sessions_per_day,
        avg_minutes_per_day,
    }
}
