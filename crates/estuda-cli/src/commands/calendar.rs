//! Exam countdown and calendar commands.

use std::error::Error;

use clap::Subcommand;
use estuda_core::{Clock, Config, Curriculum, SystemClock};

use crate::common;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Days and weeks until the exam, with goal pacing
    Countdown,
    /// The Sunday-aligned week buckets starting this week
    Weeks {
        #[arg(long, default_value_t = 5)]
        count: u32,
    },
    /// Advisory insights derived from the calendar and history
    Insights,
    /// Recommended time split across disciplines by priority
    Distribution,
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn Error>> {
    let plan = Config::load_or_default().plan();
    let clock = SystemClock;
    let today = clock.today();

    match action {
        CalendarAction::Countdown => {
            println!("Prova: {}", plan.exam_date);
            println!(
                "Faltam {} dias ({} semanas)",
                plan.days_remaining(today),
                plan.weeks_remaining(today)
            );
            println!("Cronograma: {}% decorrido", plan.schedule_progress(today));
            println!("Meta diária: {} min", plan.daily_goal_minutes(today));
        }
        CalendarAction::Weeks { count } => {
            common::print_json(&plan.weekly_schedule(today, count))?;
        }
        CalendarAction::Insights => {
            let store = common::open_store()?;
            let sessions = store.load_snapshot().sessions;
            common::print_json(&plan.calendar_insights(&sessions, clock.now()))?;
        }
        CalendarAction::Distribution => {
            common::print_json(&plan.ideal_time_distribution(&Curriculum::builtin(), today))?;
        }
    }
    Ok(())
}
