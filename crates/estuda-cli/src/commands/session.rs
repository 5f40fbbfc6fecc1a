//! Study session lifecycle commands.

use std::error::Error;

use clap::Subcommand;
use estuda_core::{Clock, Intent, SystemClock};

use crate::common;

const ZEIGARNIK_MINUTES: u32 = 2;
const ZEIGARNIK_SUBTEMA: &str = "Início Zeigarnik (2min)";

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a study session for a discipline/theme pair
    Start {
        disciplina: String,
        theme: String,
        /// Planned length; defaults to the theme's estimate
        #[arg(long)]
        minutes: Option<u32>,
        #[arg(long)]
        subtema: Option<String>,
    },
    /// Start a 2-minute starter session to get past the blank page
    Zeigarnik { disciplina: String, theme: String },
    /// Complete the current session and append it to history
    End,
    /// Pause the current session and its timer
    Pause,
    /// Resume a paused session
    Resume,
    /// Replace the notes on the current session
    Note { text: String },
    /// Print the current session and timer
    Status,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn Error>> {
    let store = common::open_store()?;
    let mut state = common::load_state(&store)?;
    let now = SystemClock.now();

    match action {
        SessionAction::Start {
            disciplina,
            theme,
            minutes,
            subtema,
        } => {
            let known = state
                .curriculum
                .theme(&disciplina, &theme)
                .ok_or_else(|| format!("unknown discipline/theme: {disciplina}/{theme}"))?;
            let estimated_minutes = minutes.unwrap_or(known.default_estimate_minutes);
            let event = state.apply(
                Intent::StartSession {
                    disciplina_id: disciplina,
                    theme_id: theme,
                    estimated_minutes,
                    subtema,
                },
                now,
            )?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        SessionAction::Zeigarnik { disciplina, theme } => {
            state
                .curriculum
                .theme(&disciplina, &theme)
                .ok_or_else(|| format!("unknown discipline/theme: {disciplina}/{theme}"))?;
            let event = state.apply(
                Intent::StartSession {
                    disciplina_id: disciplina,
                    theme_id: theme,
                    estimated_minutes: ZEIGARNIK_MINUTES,
                    subtema: Some(ZEIGARNIK_SUBTEMA.into()),
                },
                now,
            )?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        SessionAction::End => {
            let event = state.apply(Intent::EndSession, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        SessionAction::Pause => {
            let event = state.apply(Intent::PauseSession, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        SessionAction::Resume => {
            let event = state.apply(Intent::ResumeSession, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        SessionAction::Note { text } => {
            state.apply(Intent::UpdateSessionNotes { notes: text }, now)?;
            common::save_state(&store, &state)?;
        }
        SessionAction::Status => {
            common::print_json(&serde_json::json!({
                "current_session": state.current_session,
                "timer": state.timer,
            }))?;
        }
    }
    Ok(())
}
