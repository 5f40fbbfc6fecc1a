//! Suggested next sessions: high-priority themes, longest-neglected first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::{Curriculum, Priority};
use crate::session::StudySession;

pub const SUGGESTION_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedSession {
    pub disciplina_id: String,
    pub disciplina_nome: String,
    pub theme_id: String,
    pub theme_nome: String,
    pub estimated_minutes: u32,
    /// When this (discipline, theme) pair was last studied, if ever.
    pub last_studied: Option<DateTime<Utc>>,
}

/// Rank the alta-priority (discipline, theme) pairs: never-studied pairs
/// first (curriculum order), then by oldest `last_studied`. Returns at
/// most [`SUGGESTION_LIMIT`] entries.
pub fn suggested_sessions(
    curriculum: &Curriculum,
    sessions: &[StudySession],
) -> Vec<SuggestedSession> {
    let mut candidates: Vec<SuggestedSession> = curriculum
        .disciplinas
        .iter()
        .filter(|d| d.priority == Priority::Alta)
        .flat_map(|d| {
            d.themes.iter().map(|t| {
                let last_studied = sessions
                    .iter()
                    .filter(|s| s.disciplina_id == d.id && s.theme_id == t.id)
                    .map(|s| s.created_at)
                    .max();
                SuggestedSession {
                    disciplina_id: d.id.clone(),
                    disciplina_nome: d.nome.clone(),
                    theme_id: t.id.clone(),
                    theme_nome: t.nome.clone(),
                    estimated_minutes: t.default_estimate_minutes,
                    last_studied,
                }
            })
        })
        .collect();

    // Stable sort keeps curriculum order between equal keys.
    candidates.sort_by(|a, b| match (a.last_studied, b.last_studied) {
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
        (Some(a_at), Some(b_at)) => a_at.cmp(&b_at),
    });
    candidates.truncate(SUGGESTION_LIMIT);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session_at(disciplina: &str, theme: &str, day: u32) -> StudySession {
        let at = Utc.with_ymd_and_hms(2025, 8, day, 10, 0, 0).unwrap();
        StudySession::start(disciplina, theme, 25, None, at)
    }

    #[test]
    fn never_studied_ranks_before_stale() {
        let curriculum = Curriculum::builtin();
        // Study one alta theme 10 days ago; everything else untouched.
        let sessions = vec![session_at("direito-civil", "obrigacoes", 17)];
        let out = suggested_sessions(&curriculum, &sessions);
        assert_eq!(out.len(), SUGGESTION_LIMIT);
        // All four suggestions are never-studied pairs; the studied one
        // cannot outrank any of them.
        assert!(out.iter().all(|s| s.last_studied.is_none()));
        assert!(out.iter().all(|s| s.theme_id != "obrigacoes"));
    }

    #[test]
    fn stalest_pair_ranks_first_among_studied() {
        let curriculum = Curriculum::builtin();
        // Study every alta pair so none is "never studied", with one
        // clearly older than the rest.
        let mut sessions = Vec::new();
        for d in curriculum
            .disciplinas
            .iter()
            .filter(|d| d.priority == Priority::Alta)
        {
            for t in &d.themes {
                let day = if t.id == "provas" { 1 } else { 20 };
                sessions.push(session_at(&d.id, &t.id, day));
            }
        }
        let out = suggested_sessions(&curriculum, &sessions);
        assert_eq!(out[0].theme_id, "provas");
    }

    #[test]
    fn only_alta_priority_disciplines_are_suggested() {
        let curriculum = Curriculum::builtin();
        let out = suggested_sessions(&curriculum, &[]);
        for s in &out {
            let d = curriculum.disciplina(&s.disciplina_id).unwrap();
            assert_eq!(d.priority, Priority::Alta);
        }
    }

    #[test]
    fn dangling_session_references_do_not_break_ranking() {
        let curriculum = Curriculum::builtin();
        let sessions = vec![session_at("ghost", "ghost-theme", 10)];
        let out = suggested_sessions(&curriculum, &sessions);
        assert_eq!(out.len(), SUGGESTION_LIMIT);
    }
}
