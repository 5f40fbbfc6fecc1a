//! Timer control commands.
//!
//! `watch` is the only command that runs longer than one dispatch: it
//! builds a runtime, arms the ticker and reduces incoming ticks until the
//! countdown finishes or stops.

use std::error::Error;

use clap::{Subcommand, ValueEnum};
use estuda_core::{Clock, Event, Intent, SystemClock, Ticker, TimerKind};
use tokio::sync::mpsc;

use crate::common;

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Work,
    ShortBreak,
    LongBreak,
}

impl From<KindArg> for TimerKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Work => TimerKind::Work,
            KindArg::ShortBreak => TimerKind::ShortBreak,
            KindArg::LongBreak => TimerKind::LongBreak,
        }
    }
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Arm a countdown without starting a session
    Start {
        minutes: u32,
        #[arg(long, value_enum, default_value = "work")]
        kind: KindArg,
    },
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Stop and reset the countdown
    Stop,
    /// Advance the countdown by one second
    Tick,
    /// Print the timer state
    Status,
    /// Drive the countdown in the foreground until it finishes
    Watch,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn Error>> {
    let store = common::open_store()?;
    let mut state = common::load_state(&store)?;
    let now = SystemClock.now();

    match action {
        TimerAction::Start { minutes, kind } => {
            let event = state.apply(
                Intent::StartTimer {
                    duration_minutes: minutes,
                    kind: kind.into(),
                },
                now,
            )?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        TimerAction::Pause => {
            let event = state.apply(Intent::PauseTimer, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        TimerAction::Resume => {
            let event = state.apply(Intent::ResumeTimer, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        TimerAction::Stop => {
            let event = state.apply(Intent::StopTimer, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        TimerAction::Tick => {
            let event = state.apply(Intent::TickTimer, now)?;
            common::save_state(&store, &state)?;
            common::print_json(&event)?;
        }
        TimerAction::Status => {
            common::print_json(&state.timer)?;
        }
        TimerAction::Watch => {
            if !state.should_tick() {
                return Err("timer is not running".into());
            }
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let (tx, mut rx) = mpsc::unbounded_channel();
                let mut ticker = Ticker::new(tx);
                ticker.sync(state.should_tick());
                while state.should_tick() {
                    let Some(intent) = rx.recv().await else { break };
                    let event = state.apply(intent, SystemClock.now())?;
                    let left = state.timer.time_left_secs;
                    eprint!("\r{:02}:{:02} ", left / 60, left % 60);
                    if matches!(event, Some(Event::TimerFinished { .. })) {
                        eprintln!();
                        common::print_json(&event)?;
                    }
                    ticker.sync(state.should_tick());
                }
                Ok::<(), Box<dyn Error>>(())
            })?;
            common::save_state(&store, &state)?;
        }
    }
    Ok(())
}
