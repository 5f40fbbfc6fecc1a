//! State load/save plumbing shared by the subcommands.
//!
//! Every invocation rebuilds the state machine from two blobs: the
//! persisted snapshot and the in-flight live state. Commands mutate the
//! machine through intents and write both blobs back before exiting.

use std::error::Error;

use estuda_core::{AppState, Clock, Curriculum, Intent, LiveState, Snapshot, Store, SystemClock};

pub fn open_store() -> Result<Store, Box<dyn Error>> {
    Ok(Store::open()?)
}

/// Rebuild the state machine: embedded curriculum, then the persisted
/// snapshot, then the in-flight session and timer.
pub fn load_state(store: &Store) -> Result<AppState, Box<dyn Error>> {
    let mut state = AppState::new(Curriculum::builtin());
    state.apply(
        Intent::LoadData {
            snapshot: store.load_snapshot(),
        },
        SystemClock.now(),
    )?;
    let live = store.load_live();
    state.current_session = live.current_session;
    state.timer = live.timer;
    Ok(state)
}

/// Persist both blobs.
pub fn save_state(store: &Store, state: &AppState) -> Result<(), Box<dyn Error>> {
    store.save_snapshot(&Snapshot::of(state))?;
    store.save_live(&LiveState::of(state))?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
