//! Ephemeral UI-selection state. Never persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Session,
    Progress,
    Calendar,
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub sidebar_open: bool,
    pub current_view: View,
    pub selected_disciplina: Option<String>,
    pub selected_theme: Option<String>,
}
