//! Date and schedule calculations against the exam deadline.
//!
//! Everything here is a pure function of an [`ExamPlan`] and an injected
//! reference date -- the calculator holds no state of its own, so the same
//! inputs always yield the same countdowns, goals and insights.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::Curriculum;
use crate::session::StudySession;

/// Weekly session count below which the shortfall warning fires.
const WEEKLY_SHORTFALL_THRESHOLD: usize = 5;

/// The fixed preparation window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExamPlan {
    pub exam_date: NaiveDate,
    /// Length of the whole preparation window, in days.
    pub total_days: u32,
    /// Overall study-time goal, in hours.
    pub total_hours_goal: u32,
    pub weekly_session_goal: u32,
}

impl Default for ExamPlan {
    fn default() -> Self {
        Self {
            exam_date: NaiveDate::from_ymd_opt(2025, 9, 28).expect("valid date"),
            total_days: 32,
            total_hours_goal: 200,
            weekly_session_goal: 7,
        }
    }
}

/// One Sunday-aligned week bucket of the forward schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current_week: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Urgent,
    Info,
    Reminder,
}

/// A derived advisory message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

/// Recommended share of the remaining time budget for one discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAllocation {
    pub disciplina_id: String,
    pub nome: String,
    pub recommended_minutes: u32,
    pub minutes_per_week: u32,
}

impl ExamPlan {
    /// Whole days until the exam, clamped at zero once it has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> u32 {
        (self.exam_date - today).num_days().max(0) as u32
    }

    /// Days elapsed since the window opened, clamped to `[0, total_days]`.
    pub fn days_passed(&self, today: NaiveDate) -> u32 {
        self.total_days.saturating_sub(self.days_remaining(today))
    }

    /// Percentage of the schedule window already behind us, rounded.
    pub fn schedule_progress(&self, today: NaiveDate) -> u32 {
        if self.total_days == 0 {
            return 0;
        }
        let pct = self.days_passed(today) as f64 / self.total_days as f64 * 100.0;
        pct.round().min(100.0) as u32
    }

    pub fn weeks_remaining(&self, today: NaiveDate) -> u32 {
        self.days_remaining(today).div_ceil(7)
    }

    /// Minutes per day needed to hit the hours goal in the remaining days.
    /// Zero on or after exam day -- the boundary never divides by zero.
    pub fn daily_goal_minutes(&self, today: NaiveDate) -> u32 {
        let days = self.days_remaining(today);
        if days == 0 {
            return 0;
        }
        (self.total_hours_goal * 60).div_ceil(days)
    }

    /// Whether accumulated study time is at least 80% of the pace the
    /// daily goal implies.
    pub fn is_on_track(&self, total_study_minutes: u32, today: NaiveDate) -> bool {
        let expected = self.days_passed(today) as f64 * self.daily_goal_minutes(today) as f64;
        total_study_minutes as f64 >= expected * 0.8
    }

    pub fn is_today(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date == today
    }

    /// Whether `date` falls in the Sunday-to-Saturday week containing
    /// `today`.
    pub fn is_this_week(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let start = sunday_on_or_before(today);
        let end = start + chrono::Days::new(6);
        date >= start && date <= end
    }

    /// The next `n` Sunday-aligned week buckets starting from the week
    /// containing `today`. Recomputed from scratch each call.
    pub fn weekly_schedule(&self, today: NaiveDate, n: u32) -> Vec<WeekBucket> {
        let first_sunday = sunday_on_or_before(today);
        (0..n)
            .map(|i| {
                let start = first_sunday + chrono::Days::new(u64::from(i) * 7);
                WeekBucket {
                    week_number: i + 1,
                    start_date: start,
                    end_date: start + chrono::Days::new(6),
                    is_current_week: i == 0,
                }
            })
            .collect()
    }

    /// Derive advisory insights from the session history and calendar
    /// position. Several may fire at once; the order is evaluation order,
    /// not severity.
    pub fn calendar_insights(&self, sessions: &[StudySession], now: DateTime<Utc>) -> Vec<Insight> {
        let today = now.date_naive();
        let mut insights = Vec::new();

        let this_week = sessions
            .iter()
            .filter(|s| self.is_this_week(s.created_at.date_naive(), today))
            .count();
        if this_week < WEEKLY_SHORTFALL_THRESHOLD {
            insights.push(Insight {
                kind: InsightKind::Warning,
                title: "Meta semanal em risco".into(),
                message: format!(
                    "Você tem apenas {this_week} sessões esta semana. Meta: {} sessões.",
                    self.weekly_session_goal
                ),
            });
        }

        let days_remaining = self.days_remaining(today);
        if days_remaining <= 7 {
            insights.push(Insight {
                kind: InsightKind::Urgent,
                title: "Reta final!".into(),
                message: format!(
                    "Faltam apenas {days_remaining} dias. Foque nas disciplinas de maior peso."
                ),
            });
        } else if days_remaining <= 14 {
            insights.push(Insight {
                kind: InsightKind::Info,
                title: "Duas semanas finais".into(),
                message: "Intensifique os estudos e faça revisões das matérias já estudadas."
                    .into(),
            });
        }

        let studied_today = sessions
            .iter()
            .any(|s| self.is_today(s.created_at.date_naive(), today));
        if !studied_today && now.hour() > 12 {
            insights.push(Insight {
                kind: InsightKind::Reminder,
                title: "Ainda não estudou hoje".into(),
                message: "Que tal começar com uma sessão de 25 minutos?".into(),
            });
        }

        insights
    }

    /// Split the remaining time budget across disciplines by priority
    /// weight, shared evenly between disciplines of the same priority.
    pub fn ideal_time_distribution(
        &self,
        curriculum: &Curriculum,
        today: NaiveDate,
    ) -> Vec<TimeAllocation> {
        let total_available =
            self.days_remaining(today) as f64 * self.daily_goal_minutes(today) as f64;
        let weeks = self.weeks_remaining(today).max(1);

        curriculum
            .disciplinas
            .iter()
            .map(|d| {
                let peers = curriculum
                    .disciplinas
                    .iter()
                    .filter(|other| other.priority == d.priority)
                    .count()
                    .max(1);
                let recommended =
                    (total_available * d.priority.weight() / peers as f64).round() as u32;
                TimeAllocation {
                    disciplina_id: d.id.clone(),
                    nome: d.nome.clone(),
                    recommended_minutes: recommended,
                    minutes_per_week: recommended.div_ceil(weeks),
                }
            })
            .collect()
    }
}

/// The Sunday on or before the given date.
fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - chrono::Days::new(u64::from(date.weekday().num_days_from_sunday()))
}
