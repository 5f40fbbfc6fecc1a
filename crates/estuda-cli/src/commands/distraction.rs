//! Distraction capture commands.

use std::error::Error;

use clap::Subcommand;
use estuda_core::{Clock, Intent, SystemClock};

use crate::common;

#[derive(Subcommand)]
pub enum DistractionAction {
    /// Capture a distraction into the log
    Add { text: String },
    /// Mark a logged distraction as handled
    Resolve { id: String },
    /// Print the distraction log
    List,
}

pub fn run(action: DistractionAction) -> Result<(), Box<dyn Error>> {
    let store = common::open_store()?;
    let mut state = common::load_state(&store)?;
    let now = SystemClock.now();

    match action {
        DistractionAction::Add { text } => {
            let event = state.apply(Intent::AddDistraction { text }, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        DistractionAction::Resolve { id } => {
            let event = state.apply(Intent::ResolveDistraction { id }, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        DistractionAction::List => {
            common::print_json(&state.distractions)?;
        }
    }
    Ok(())
}
