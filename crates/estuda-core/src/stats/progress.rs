//! Per-discipline progress: distinct themes studied over total themes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::curriculum::Curriculum;
use crate::session::StudySession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineProgress {
    pub disciplina_id: String,
    pub nome: String,
    pub color: String,
    pub sessions_count: usize,
    pub total_minutes: u32,
    pub studied_themes: usize,
    pub total_themes: usize,
    /// `100 * studied / total`, 0 when the discipline has no themes.
    pub progress_pct: f64,
    pub avg_session_minutes: f64,
}

/// Progress for every curriculum discipline, sorted by total study time
/// descending. Sessions referencing ids outside the curriculum simply do
/// not contribute anywhere.
pub fn discipline_progress(
    curriculum: &Curriculum,
    sessions: &[StudySession],
) -> Vec<DisciplineProgress> {
    let mut rows: Vec<DisciplineProgress> = curriculum
        .disciplinas
        .iter()
        .map(|d| {
            let own: Vec<&StudySession> = sessions
                .iter()
                .filter(|s| s.disciplina_id == d.id)
                .collect();
            let total_minutes: u32 = own.iter().map(|s| s.actual_minutes).sum();
            let studied: HashSet<&str> = own.iter().map(|s| s.theme_id.as_str()).collect();
            let total_themes = d.themes.len();
            let progress_pct = if total_themes > 0 {
                studied.len() as f64 / total_themes as f64 * 100.0
            } else {
                0.0
            };
            let avg_session_minutes = if own.is_empty() {
                0.0
            } else {
                f64::from(total_minutes) / own.len() as f64
            };
            DisciplineProgress {
                disciplina_id: d.id.clone(),
                nome: d.nome.clone(),
                color: d.color.clone(),
                sessions_count: own.len(),
                total_minutes,
                studied_themes: studied.len(),
                total_themes,
                progress_pct,
                avg_session_minutes,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session(disciplina: &str, theme: &str, minutes: u32) -> StudySession {
        let mut s = StudySession::start(disciplina, theme, minutes, None, Utc::now());
        s.actual_minutes = minutes;
        s
    }

    #[test]
    fn distinct_themes_drive_the_percentage() {
        let curriculum = Curriculum::builtin();
        let sessions = vec![
            session("direito-civil", "contratos", 50),
            session("direito-civil", "contratos", 30),
            session("direito-civil", "obrigacoes", 40),
        ];
        let rows = discipline_progress(&curriculum, &sessions);
        let civil = rows
            .iter()
            .find(|r| r.disciplina_id == "direito-civil")
            .unwrap();
        assert_eq!(civil.sessions_count, 3);
        assert_eq!(civil.studied_themes, 2);
        assert_eq!(civil.total_themes, 4);
        assert!((civil.progress_pct - 50.0).abs() < f64::EPSILON);
        assert_eq!(civil.total_minutes, 120);
    }

    #[test]
    fn sorted_by_total_minutes_descending() {
        let curriculum = Curriculum::builtin();
        let sessions = vec![
            session("direito-penal", "dosimetria", 200),
            session("direito-civil", "contratos", 10),
        ];
        let rows = discipline_progress(&curriculum, &sessions);
        assert_eq!(rows[0].disciplina_id, "direito-penal");
    }

    #[test]
    fn dangling_session_ids_are_ignored() {
        let curriculum = Curriculum::builtin();
        let sessions = vec![session("deleted-discipline", "ghost-theme", 60)];
        let rows = discipline_progress(&curriculum, &sessions);
        assert!(rows.iter().all(|r| r.total_minutes == 0));
    }
}
