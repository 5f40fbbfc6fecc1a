//! Achievement unlocks.
//!
//! Stateless: the unlocked set is recomputed from the history each call,
//! so crossing a threshold can never "re-lock" anything and nothing needs
//! persisting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::session::StudySession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub icon: String,
}

fn unlock(name: &str, icon: &str) -> Achievement {
    Achievement {
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

/// All achievements the history has unlocked, in threshold order.
pub fn achievements(sessions: &[StudySession]) -> Vec<Achievement> {
    let total_sessions = sessions.len();
    let total_minutes: u32 = sessions.iter().map(|s| s.actual_minutes).sum();
    let days_studied = sessions
        .iter()
        .map(|s| s.created_at.date_naive())
        .collect::<BTreeSet<NaiveDate>>()
        .len();

    let mut unlocked = Vec::new();
    if total_sessions >= 1 {
        unlocked.push(unlock("Primeira Sessão", "🎯"));
    }
    if total_sessions >= 10 {
        unlocked.push(unlock("10 Sessões", "🔥"));
    }
    if total_sessions >= 50 {
        unlocked.push(unlock("50 Sessões", "⭐"));
    }
    if total_minutes >= 60 {
        unlocked.push(unlock("1 Hora de Estudo", "⏰"));
    }
    if total_minutes >= 600 {
        unlocked.push(unlock("10 Horas de Estudo", "🏆"));
    }
    if days_studied >= 7 {
        unlocked.push(unlock("7 Dias Estudando", "📅"));
    }
    unlocked
}
