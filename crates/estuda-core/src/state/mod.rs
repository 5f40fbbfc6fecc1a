//! The application state machine.
//!
//! One reducer over one state tree: every mutation is an [`Intent`]
//! applied through [`AppState::apply`]. Transitions are synchronous pure
//! functions of (state, intent, now) -- no I/O happens here; persistence
//! observes the state afterwards.
//!
//! Intents are a closed sum type and the reducer matches them
//! exhaustively, so adding an intent without handling it is a compile
//! error. Unmet preconditions return a [`TransitionError`] instead of
//! silently corrupting state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::Curriculum;
use crate::error::TransitionError;
use crate::events::Event;
use crate::session::{Distraction, SessionStatus, StudySession};
use crate::settings::{Settings, SettingsPatch};
use crate::storage::Snapshot;
use crate::timer::{TimerKind, TimerState};
use crate::ui::{UiState, View};

/// Every way the state tree can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    StartSession {
        disciplina_id: String,
        theme_id: String,
        estimated_minutes: u32,
        subtema: Option<String>,
    },
    EndSession,
    PauseSession,
    ResumeSession,
    UpdateSessionNotes {
        notes: String,
    },
    StartTimer {
        duration_minutes: u32,
        kind: TimerKind,
    },
    PauseTimer,
    ResumeTimer,
    StopTimer,
    /// The only intent driven by a periodic trigger rather than a user.
    TickTimer,
    AddDistraction {
        text: String,
    },
    ResolveDistraction {
        id: String,
    },
    UpdateSettings {
        patch: SettingsPatch,
    },
    SetCurrentView {
        view: View,
    },
    ToggleSidebar,
    SelectDisciplina {
        id: Option<String>,
    },
    SelectTheme {
        id: Option<String>,
    },
    LoadData {
        snapshot: Snapshot,
    },
}

/// The whole application state tree. Explicitly constructed and
/// exclusively owned by whoever dispatches intents -- there is no global
/// instance.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only curriculum tree, loaded once.
    pub curriculum: Curriculum,
    /// The singleton current session, if one is active or paused.
    pub current_session: Option<StudySession>,
    /// Append-only history of completed sessions.
    pub sessions: Vec<StudySession>,
    pub settings: Settings,
    pub timer: TimerState,
    /// Global distraction log for the current session. Cleared when the
    /// session ends; resolvable, unlike the per-session snapshot.
    pub distractions: Vec<Distraction>,
    pub ui: UiState,
}

impl AppState {
    pub fn new(curriculum: Curriculum) -> Self {
        Self {
            curriculum,
            current_session: None,
            sessions: Vec::new(),
            settings: Settings::default(),
            timer: TimerState::default(),
            distractions: Vec::new(),
            ui: UiState::default(),
        }
    }

    /// Whether a 1 Hz tick source should currently be armed.
    pub fn should_tick(&self) -> bool {
        self.timer.should_tick()
    }

    /// Apply one intent. Returns the event the transition produced, if
    /// any; UI-only transitions produce none.
    pub fn apply(
        &mut self,
        intent: Intent,
        now: DateTime<Utc>,
    ) -> Result<Option<Event>, TransitionError> {
        match intent {
            Intent::StartSession {
                disciplina_id,
                theme_id,
                estimated_minutes,
                subtema,
            } => {
                if let Some(current) = &self.current_session {
                    return Err(TransitionError::SessionAlreadyActive {
                        current_id: current.id.clone(),
                    });
                }
                let session =
                    StudySession::start(disciplina_id, theme_id, estimated_minutes, subtema, now);
                self.timer.arm(estimated_minutes.saturating_mul(60), TimerKind::Work);
                self.timer.session_count = 0;
                self.ui.current_view = View::Session;
                let event = Event::SessionStarted {
                    session_id: session.id.clone(),
                    disciplina_id: session.disciplina_id.clone(),
                    theme_id: session.theme_id.clone(),
                    estimated_minutes,
                    at: now,
                };
                self.current_session = Some(session);
                Ok(Some(event))
            }

            Intent::EndSession => {
                let mut session = self
                    .current_session
                    .take()
                    .ok_or(TransitionError::NoActiveSession)?;
                session.complete(&self.timer, now);
                let event = Event::SessionEnded {
                    session_id: session.id.clone(),
                    actual_minutes: session.actual_minutes,
                    at: now,
                };
                self.sessions.push(session);
                self.timer = TimerState::default();
                self.distractions.clear();
                self.ui.current_view = View::Dashboard;
                Ok(Some(event))
            }

            Intent::PauseSession => {
                let session = self
                    .current_session
                    .as_mut()
                    .ok_or(TransitionError::NoActiveSession)?;
                session.status = SessionStatus::Paused;
                self.timer.is_paused = true;
                Ok(Some(Event::SessionPaused {
                    session_id: session.id.clone(),
                    at: now,
                }))
            }

            Intent::ResumeSession => {
                let session = self
                    .current_session
                    .as_mut()
                    .ok_or(TransitionError::NoActiveSession)?;
                session.status = SessionStatus::Active;
                self.timer.is_paused = false;
                Ok(Some(Event::SessionResumed {
                    session_id: session.id.clone(),
                    at: now,
                }))
            }

            Intent::UpdateSessionNotes { notes } => {
                let session = self
                    .current_session
                    .as_mut()
                    .ok_or(TransitionError::NoActiveSession)?;
                session.notes = notes;
                Ok(None)
            }

            Intent::StartTimer {
                duration_minutes,
                kind,
            } => {
                if self.timer.is_active {
                    // Double-start resumes instead of restarting.
                    self.timer.is_paused = false;
                    return Ok(Some(Event::TimerResumed {
                        time_left_secs: self.timer.time_left_secs,
                        at: now,
                    }));
                }
                self.timer.arm(duration_minutes.saturating_mul(60), kind);
                Ok(Some(Event::TimerStarted {
                    duration_secs: self.timer.total_time_secs,
                    kind,
                    at: now,
                }))
            }

            Intent::PauseTimer => {
                if !self.timer.is_active {
                    tracing::debug!("pause_timer ignored: timer inactive");
                    return Ok(None);
                }
                self.timer.is_paused = true;
                Ok(Some(Event::TimerPaused {
                    time_left_secs: self.timer.time_left_secs,
                    at: now,
                }))
            }

            Intent::ResumeTimer => {
                if !self.timer.is_active {
                    tracing::debug!("resume_timer ignored: timer inactive");
                    return Ok(None);
                }
                self.timer.is_paused = false;
                Ok(Some(Event::TimerResumed {
                    time_left_secs: self.timer.time_left_secs,
                    at: now,
                }))
            }

            Intent::StopTimer => {
                self.timer = TimerState::default();
                Ok(Some(Event::TimerStopped { at: now }))
            }

            Intent::TickTimer => {
                if !self.timer.should_tick() {
                    // A tick may race a stop or pause; dropping it keeps
                    // time_left within bounds.
                    return Ok(None);
                }
                if self.timer.tick() {
                    return Ok(Some(Event::TimerFinished {
                        kind: self.timer.kind,
                        at: now,
                    }));
                }
                Ok(None)
            }

            Intent::AddDistraction { text } => {
                let distraction = Distraction::new(text, now);
                let event = Event::DistractionCaptured {
                    distraction_id: distraction.id.clone(),
                    at: now,
                };
                if let Some(session) = &mut self.current_session {
                    session.distractions.push(distraction.clone());
                }
                self.distractions.push(distraction);
                Ok(Some(event))
            }

            Intent::ResolveDistraction { id } => {
                // Flips only the global log entry. The copy embedded in the
                // current session is a frozen historical snapshot and is
                // deliberately left untouched.
                let entry = self
                    .distractions
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or_else(|| TransitionError::UnknownDistraction(id.clone()))?;
                entry.resolved = true;
                Ok(Some(Event::DistractionResolved {
                    distraction_id: id,
                    at: now,
                }))
            }

            Intent::UpdateSettings { patch } => {
                patch.apply(&mut self.settings);
                Ok(None)
            }

            Intent::SetCurrentView { view } => {
                self.ui.current_view = view;
                Ok(None)
            }

            Intent::ToggleSidebar => {
                self.ui.sidebar_open = !self.ui.sidebar_open;
                Ok(None)
            }

            Intent::SelectDisciplina { id } => {
                self.ui.selected_disciplina = id;
                // Theme selection belongs to the previous discipline.
                self.ui.selected_theme = None;
                Ok(None)
            }

            Intent::SelectTheme { id } => {
                self.ui.selected_theme = id;
                Ok(None)
            }

            Intent::LoadData { snapshot } => {
                let count = snapshot.sessions.len();
                self.sessions = snapshot.sessions;
                self.settings = snapshot.settings;
                self.distractions = snapshot.distractions;
                Ok(Some(Event::DataLoaded {
                    session_count: count,
                    at: now,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2025-08-27T09:00:00Z".parse().unwrap()
    }

    fn state() -> AppState {
        AppState::new(Curriculum::builtin())
    }

    fn start_intent(minutes: u32) -> Intent {
        Intent::StartSession {
            disciplina_id: "direito-civil".into(),
            theme_id: "contratos".into(),
            estimated_minutes: minutes,
            subtema: None,
        }
    }

    #[test]
    fn start_session_arms_timer_and_switches_view() {
        let mut s = state();
        let event = s.apply(start_intent(25), now()).unwrap();
        assert!(matches!(event, Some(Event::SessionStarted { .. })));
        assert!(s.current_session.is_some());
        assert_eq!(s.timer.time_left_secs, 25 * 60);
        assert_eq!(s.timer.total_time_secs, 25 * 60);
        assert!(s.timer.is_active);
        assert_eq!(s.ui.current_view, View::Session);
    }

    #[test]
    fn second_start_session_is_rejected() {
        let mut s = state();
        s.apply(start_intent(25), now()).unwrap();
        let err = s.apply(start_intent(10), now()).unwrap_err();
        assert!(matches!(err, TransitionError::SessionAlreadyActive { .. }));
        // The running session is untouched.
        assert_eq!(s.current_session.as_ref().unwrap().estimated_minutes, 25);
    }

    #[test]
    fn end_session_without_session_errors() {
        let mut s = state();
        assert_eq!(
            s.apply(Intent::EndSession, now()).unwrap_err(),
            TransitionError::NoActiveSession
        );
        assert!(s.sessions.is_empty());
    }

    #[test]
    fn end_session_appends_history_and_resets() {
        let mut s = state();
        s.apply(start_intent(2), now()).unwrap();
        // One minute elapses.
        for _ in 0..60 {
            s.apply(Intent::TickTimer, now()).unwrap();
        }
        s.apply(
            Intent::AddDistraction {
                text: "checar email".into(),
            },
            now(),
        )
        .unwrap();
        let event = s.apply(Intent::EndSession, now()).unwrap();
        match event {
            Some(Event::SessionEnded { actual_minutes, .. }) => assert_eq!(actual_minutes, 1),
            other => panic!("expected SessionEnded, got {other:?}"),
        }
        assert_eq!(s.sessions.len(), 1);
        assert_eq!(s.sessions[0].status, SessionStatus::Completed);
        assert_eq!(s.sessions[0].actual_minutes, 1);
        assert!(s.current_session.is_none());
        assert_eq!(s.timer, TimerState::default());
        assert!(s.distractions.is_empty());
        assert_eq!(s.ui.current_view, View::Dashboard);
        // The session keeps its embedded distraction snapshot.
        assert_eq!(s.sessions[0].distractions.len(), 1);
    }

    #[test]
    fn pause_and_resume_toggle_session_and_timer() {
        let mut s = state();
        s.apply(start_intent(25), now()).unwrap();
        s.apply(Intent::PauseSession, now()).unwrap();
        assert_eq!(
            s.current_session.as_ref().unwrap().status,
            SessionStatus::Paused
        );
        assert!(s.timer.is_paused);
        assert!(!s.should_tick());
        s.apply(Intent::ResumeSession, now()).unwrap();
        assert_eq!(
            s.current_session.as_ref().unwrap().status,
            SessionStatus::Active
        );
        assert!(s.should_tick());
    }

    #[test]
    fn tick_while_paused_is_dropped() {
        let mut s = state();
        s.apply(start_intent(25), now()).unwrap();
        s.apply(Intent::PauseTimer, now()).unwrap();
        let before = s.timer.time_left_secs;
        s.apply(Intent::TickTimer, now()).unwrap();
        assert_eq!(s.timer.time_left_secs, before);
    }

    #[test]
    fn tick_to_zero_finishes_but_keeps_session_open() {
        let mut s = state();
        s.apply(start_intent(1), now()).unwrap();
        let mut finished = None;
        for _ in 0..60 {
            finished = s.apply(Intent::TickTimer, now()).unwrap();
        }
        assert!(matches!(finished, Some(Event::TimerFinished { .. })));
        assert_eq!(s.timer.time_left_secs, 0);
        assert!(!s.timer.is_active);
        // No auto-complete: ending the session is explicit.
        assert!(s.current_session.is_some());
        assert!(s.sessions.is_empty());
    }

    #[test]
    fn absurd_durations_saturate_instead_of_overflowing() {
        let mut s = state();
        s.apply(
            Intent::StartTimer {
                duration_minutes: u32::MAX,
                kind: TimerKind::Work,
            },
            now(),
        )
        .unwrap();
        assert_eq!(s.timer.total_time_secs, u32::MAX);
        assert_eq!(s.timer.time_left_secs, u32::MAX);

        s.apply(Intent::StopTimer, now()).unwrap();
        s.apply(start_intent(u32::MAX), now()).unwrap();
        assert_eq!(s.timer.total_time_secs, u32::MAX);
    }

    #[test]
    fn start_timer_twice_resumes_instead_of_restarting() {
        let mut s = state();
        s.apply(
            Intent::StartTimer {
                duration_minutes: 25,
                kind: TimerKind::Work,
            },
            now(),
        )
        .unwrap();
        for _ in 0..10 {
            s.apply(Intent::TickTimer, now()).unwrap();
        }
        let event = s
            .apply(
                Intent::StartTimer {
                    duration_minutes: 50,
                    kind: TimerKind::Work,
                },
                now(),
            )
            .unwrap();
        assert!(matches!(event, Some(Event::TimerResumed { .. })));
        assert_eq!(s.timer.time_left_secs, 25 * 60 - 10);
        assert_eq!(s.timer.total_time_secs, 25 * 60);
    }

    #[test]
    fn resolving_distraction_leaves_session_snapshot_frozen() {
        let mut s = state();
        s.apply(start_intent(25), now()).unwrap();
        s.apply(
            Intent::AddDistraction {
                text: "olhar celular".into(),
            },
            now(),
        )
        .unwrap();
        let id = s.distractions[0].id.clone();
        s.apply(Intent::ResolveDistraction { id }, now()).unwrap();
        assert!(s.distractions[0].resolved);
        // The embedded copy stays as captured.
        assert!(!s.current_session.as_ref().unwrap().distractions[0].resolved);
    }

    #[test]
    fn resolving_unknown_distraction_errors() {
        let mut s = state();
        let err = s
            .apply(
                Intent::ResolveDistraction {
                    id: "missing".into(),
                },
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, TransitionError::UnknownDistraction(_)));
    }

    #[test]
    fn select_disciplina_clears_selected_theme() {
        let mut s = state();
        s.apply(
            Intent::SelectDisciplina {
                id: Some("direito-civil".into()),
            },
            now(),
        )
        .unwrap();
        s.apply(
            Intent::SelectTheme {
                id: Some("contratos".into()),
            },
            now(),
        )
        .unwrap();
        s.apply(
            Intent::SelectDisciplina {
                id: Some("direito-penal".into()),
            },
            now(),
        )
        .unwrap();
        assert_eq!(s.ui.selected_disciplina.as_deref(), Some("direito-penal"));
        assert!(s.ui.selected_theme.is_none());
    }

    #[test]
    fn load_data_replaces_persisted_slices_only() {
        let mut s = state();
        s.apply(Intent::ToggleSidebar, now()).unwrap();
        let mut other = state();
        other.apply(start_intent(2), now()).unwrap();
        other.apply(Intent::EndSession, now()).unwrap();
        let snapshot = Snapshot {
            sessions: other.sessions.clone(),
            settings: other.settings.clone(),
            distractions: Vec::new(),
        };
        s.apply(Intent::LoadData { snapshot }, now()).unwrap();
        assert_eq!(s.sessions.len(), 1);
        // UI state is not part of the snapshot.
        assert!(s.ui.sidebar_open);
    }
}
