//! Study sessions and distraction capture records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timer::TimerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Paused,
    Completed,
}

/// An intrusive thought captured mid-session so it can be dealt with later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distraction {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub resolved: bool,
}

impl Distraction {
    pub fn new(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            timestamp: now,
            resolved: false,
        }
    }
}

/// One timed block of study work against a specific theme.
///
/// Exactly one session may be active or paused at a time. Once completed,
/// a session is appended to the history and never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub disciplina_id: String,
    pub theme_id: String,
    #[serde(default)]
    pub subtema: Option<String>,
    /// Planned duration in minutes.
    pub estimated_minutes: u32,
    pub status: SessionStatus,
    #[serde(default)]
    pub notes: String,
    /// Snapshot of distractions captured while this session ran. Frozen at
    /// capture time: resolving an entry in the global log does not reach
    /// back into this copy.
    #[serde(default)]
    pub distractions: Vec<Distraction>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Minutes actually studied. Only meaningful once `status` is
    /// `Completed`; derived from the timer at completion.
    #[serde(default)]
    pub actual_minutes: u32,
}

impl StudySession {
    pub fn start(
        disciplina_id: impl Into<String>,
        theme_id: impl Into<String>,
        estimated_minutes: u32,
        subtema: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            disciplina_id: disciplina_id.into(),
            theme_id: theme_id.into(),
            subtema,
            estimated_minutes,
            status: SessionStatus::Active,
            notes: String::new(),
            distractions: Vec::new(),
            created_at: now,
            completed_at: None,
            actual_minutes: 0,
        }
    }

    /// Seal the session: compute the actual time from the timer and mark
    /// it completed. `actual = round((total - left) / 60)`.
    pub fn complete(&mut self, timer: &TimerState, now: DateTime<Utc>) {
        let elapsed_secs = timer.total_time_secs.saturating_sub(timer.time_left_secs);
        self.actual_minutes = ((elapsed_secs as f64) / 60.0).round() as u32;
        self.status = SessionStatus::Completed;
        self.completed_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerKind;

    #[test]
    fn new_session_starts_active_and_empty() {
        let now = Utc::now();
        let s = StudySession::start("direito-civil", "contratos", 50, None, now);
        assert_eq!(s.status, SessionStatus::Active);
        assert!(s.notes.is_empty());
        assert!(s.distractions.is_empty());
        assert_eq!(s.created_at, now);
        assert_eq!(s.actual_minutes, 0);
    }

    #[test]
    fn complete_rounds_elapsed_to_minutes() {
        let now = Utc::now();
        let mut s = StudySession::start("direito-civil", "contratos", 25, None, now);
        let mut timer = TimerState::default();
        timer.arm(25 * 60, TimerKind::Work);
        // 10 minutes and 40 seconds elapsed -> rounds to 11.
        timer.time_left_secs = 25 * 60 - (10 * 60 + 40);
        s.complete(&timer, now);
        assert_eq!(s.status, SessionStatus::Completed);
        assert_eq!(s.actual_minutes, 11);
        assert_eq!(s.completed_at, Some(now));
    }

    #[test]
    fn session_serialization_roundtrip() {
        let s = StudySession::start("processo-penal", "provas", 45, Some("Cadeia de custódia".into()), Utc::now());
        let json = serde_json::to_string(&s).unwrap();
        let decoded: StudySession = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, s.id);
        assert_eq!(decoded.subtema.as_deref(), Some("Cadeia de custódia"));
    }
}
