//! # Estuda Core Library
//!
//! Core business logic for Estuda, a study-planning tool that tracks
//! focused sessions against a fixed curriculum and an exam deadline. It
//! implements a CLI-first philosophy: every operation is available via a
//! standalone CLI binary, with any GUI being a thin layer over the same
//! library.
//!
//! ## Architecture
//!
//! - **State Machine**: a single reducer over one state tree; every
//!   mutation is a closed [`Intent`] variant applied through
//!   [`AppState::apply`]
//! - **Timer**: a one-second countdown advanced only by `TickTimer`
//!   intents, produced by an exclusively owned cancellable [`Ticker`]
//! - **Schedule**: pure date math against the exam deadline via an
//!   injected [`Clock`]
//! - **Stats**: stateless analytics over the append-only session history
//! - **Storage**: JSON snapshot blobs plus TOML configuration
//!
//! ## Key Components
//!
//! - [`AppState`]: the state tree and reducer
//! - [`ExamPlan`]: countdowns, goals and calendar insights
//! - [`Curriculum`]: the read-only discipline/theme tree
//! - [`Store`] / [`Config`]: persistence

pub mod clock;
pub mod curriculum;
pub mod error;
pub mod events;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ticker;
pub mod timer;
pub mod ui;

pub use clock::{Clock, FixedClock, SystemClock};
pub use curriculum::{Curriculum, Discipline, Priority, Theme};
pub use error::{ConfigError, CoreError, CurriculumError, StoreError, TransitionError};
pub use events::Event;
pub use schedule::{ExamPlan, Insight, InsightKind, TimeAllocation, WeekBucket};
pub use session::{Distraction, SessionStatus, StudySession};
pub use settings::{PomodoroSettings, Settings, SettingsPatch, ThemePref};
pub use state::{AppState, Intent};
pub use storage::{Config, LiveState, Snapshot, Store};
pub use ticker::Ticker;
pub use timer::{TimerKind, TimerState};
pub use ui::{UiState, View};
