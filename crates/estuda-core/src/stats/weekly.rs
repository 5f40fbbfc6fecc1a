//! Weekly aggregates: the last four Sunday-aligned calendar weeks.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::session::StudySession;

pub const WEEKLY_REPORT_WEEKS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStats {
    /// "Sem 1" .. "Sem 4", oldest first.
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sessions: usize,
    pub minutes: u32,
}

/// Session count and study minutes for each of the last four calendar
/// weeks (Sunday through Saturday), ending with the week containing
/// `today`.
pub fn weekly_report(sessions: &[StudySession], today: NaiveDate) -> Vec<WeekStats> {
    let current_week_start =
        today - chrono::Days::new(u64::from(today.weekday().num_days_from_sunday()));

    (0..WEEKLY_REPORT_WEEKS)
        .rev()
        .enumerate()
        .map(|(idx, weeks_back)| {
            let start = current_week_start - chrono::Days::new(u64::from(weeks_back) * 7);
            let end = start + chrono::Days::new(6);
            let in_week: Vec<&StudySession> = sessions
                .iter()
                .filter(|s| {
                    let day = s.created_at.date_naive();
                    day >= start && day <= end
                })
                .collect();
            WeekStats {
                label: format!("Sem {}", idx + 1),
                start_date: start,
                end_date: end,
                sessions: in_week.len(),
                minutes: in_week.iter().map(|s| s.actual_minutes).sum(),
            }
        })
        .collect()
}
