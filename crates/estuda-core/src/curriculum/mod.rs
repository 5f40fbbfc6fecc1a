//! Curriculum store: the static discipline → theme → sub-theme tree.
//!
//! Loaded once at startup from a JSON document and immutable for the rest
//! of the run. Lookups by id return `Option` so sessions pointing at ids
//! that no longer exist degrade to "absent" instead of failing.

use serde::{Deserialize, Serialize};

use crate::error::CurriculumError;

/// Discipline priority. Drives the suggestion ranking and the ideal
/// time-distribution weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Alta,
    #[serde(rename = "média", alias = "media")]
    Media,
    Baixa,
}

impl Priority {
    /// Weight used when splitting the remaining study time budget.
    pub fn weight(self) -> f64 {
        match self {
            Priority::Alta => 0.5,
            Priority::Media => 0.3,
            Priority::Baixa => 0.2,
        }
    }
}

/// A topic within a discipline; the unit progress is measured against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub nome: String,
    pub default_estimate_minutes: u32,
    #[serde(default)]
    pub subtemas: Vec<String>,
}

/// A top-level subject area. Exclusively owns its themes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discipline {
    pub id: String,
    pub nome: String,
    pub color: String,
    #[serde(rename = "priority_default")]
    pub priority: Priority,
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub capture_hints: Vec<String>,
}

impl Discipline {
    pub fn theme(&self, theme_id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == theme_id)
    }
}

/// The full read-only curriculum tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    pub disciplinas: Vec<Discipline>,
}

impl Curriculum {
    /// Parse a curriculum document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid curriculum JSON.
    pub fn from_json(json: &str) -> Result<Self, CurriculumError> {
        serde_json::from_str(json).map_err(|e| CurriculumError::ParseFailed(e.to_string()))
    }

    /// The curriculum shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_json(include_str!("../../data/curriculum.json"))
            .expect("embedded curriculum document is valid")
    }

    pub fn disciplina(&self, id: &str) -> Option<&Discipline> {
        self.disciplinas.iter().find(|d| d.id == id)
    }

    /// Resolve a (discipline, theme) pair; `None` if either id is dangling.
    pub fn theme(&self, disciplina_id: &str, theme_id: &str) -> Option<&Theme> {
        self.disciplina(disciplina_id)?.theme(theme_id)
    }

    pub fn len(&self) -> usize {
        self.disciplinas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disciplinas.is_empty()
    }
}
