//! Progress statistics commands. All read-only over the snapshot.

use std::error::Error;

use clap::Subcommand;
use estuda_core::stats;
use estuda_core::{Clock, Curriculum, SystemClock};

use crate::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Totals over the whole history
    Overview,
    /// Per-discipline minutes and theme coverage
    Progress,
    /// Session counts for the last four calendar weeks
    Weekly,
    /// Unlocked achievements
    Achievements,
    /// Suggested next sessions, most urgent first
    Suggest,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn Error>> {
    let store = common::open_store()?;
    let sessions = store.load_snapshot().sessions;
    let today = SystemClock.today();

    match action {
        StatsAction::Overview => common::print_json(&stats::overview(&sessions, today)),
        StatsAction::Progress => {
            common::print_json(&stats::discipline_progress(&Curriculum::builtin(), &sessions))
        }
        StatsAction::Weekly => common::print_json(&stats::weekly_report(&sessions, today)),
        StatsAction::Achievements => common::print_json(&stats::achievements(&sessions)),
        StatsAction::Suggest => {
            common::print_json(&stats::suggested_sessions(&Curriculum::builtin(), &sessions))
        }
    }
}
