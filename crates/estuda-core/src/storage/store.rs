//! JSON blob persistence for the application state.
//!
//! Two blobs live under the data directory:
//!
//! - `estuda.json` -- the [`Snapshot`] of `{sessions, settings,
//!   distractions}`, written on every change and restored at boot;
//! - `live.json` -- the [`LiveState`] of the in-flight session and timer,
//!   so a CLI invocation resumes where the previous one left off.
//!
//! A malformed blob is discarded with a warning and replaced by defaults;
//! loading never fails the caller.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StoreError;
use crate::session::{Distraction, StudySession};
use crate::settings::Settings;
use crate::state::AppState;
use crate::timer::TimerState;

const SNAPSHOT_FILE: &str = "estuda.json";
const LIVE_FILE: &str = "live.json";

/// The persisted slice of the state tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub sessions: Vec<StudySession>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub distractions: Vec<Distraction>,
}

impl Snapshot {
    pub fn of(state: &AppState) -> Self {
        Self {
            sessions: state.sessions.clone(),
            settings: state.settings.clone(),
            distractions: state.distractions.clone(),
        }
    }
}

/// The in-flight session and timer, persisted between CLI invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveState {
    #[serde(default)]
    pub current_session: Option<StudySession>,
    #[serde(default)]
    pub timer: TimerState,
}

impl LiveState {
    pub fn of(state: &AppState) -> Self {
        Self {
            current_session: state.current_session.clone(),
            timer: state.timer,
        }
    }
}

/// Blob store rooted at the data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store at the default data directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be resolved or created.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }

    fn live_path(&self) -> PathBuf {
        self.dir.join(LIVE_FILE)
    }

    /// Restore the persisted snapshot, falling back to defaults if the
    /// blob is missing or malformed.
    pub fn load_snapshot(&self) -> Snapshot {
        load_blob(&self.snapshot_path())
    }

    /// Restore the in-flight session and timer.
    pub fn load_live(&self) -> LiveState {
        load_blob(&self.live_path())
    }

    /// Persist the snapshot slice of the state.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails. Callers must
    /// treat this as a side-effect failure, never as a reason to unwind
    /// the reducer.
    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        save_blob(&self.snapshot_path(), snapshot)
    }

    /// Persist the in-flight session and timer.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_live(&self, live: &LiveState) -> Result<(), StoreError> {
        save_blob(&self.live_path(), live)
    }
}

fn load_blob<T: Default + for<'de> Deserialize<'de>>(path: &Path) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding malformed blob");
                T::default()
            }
        },
        Err(_) => T::default(),
    }
}

fn save_blob<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(|e| StoreError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
