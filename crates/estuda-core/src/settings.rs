//! User-editable settings, persisted inside the snapshot blob.

use serde::{Deserialize, Serialize};

use crate::timer::TimerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePref {
    Light,
    Dark,
    System,
}

/// Pomodoro durations, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    #[serde(default = "default_work_time")]
    pub work_time: u32,
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    #[serde(default = "default_long_break")]
    pub long_break: u32,
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_theme")]
    pub theme: ThemePref,
    #[serde(default)]
    pub default_timer_kind: TimerKind,
    #[serde(default)]
    pub pomodoro: PomodoroSettings,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    /// Carried as a configuration surface only; no transition is wired to
    /// it yet (breaks are never auto-started by the core).
    #[serde(default)]
    pub auto_start_breaks: bool,
}

/// Partial settings update, shallow-merged over [`Settings`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub theme: Option<ThemePref>,
    #[serde(default)]
    pub default_timer_kind: Option<TimerKind>,
    #[serde(default)]
    pub pomodoro: Option<PomodoroSettings>,
    #[serde(default)]
    pub notifications: Option<bool>,
    #[serde(default)]
    pub sound_enabled: Option<bool>,
    #[serde(default)]
    pub auto_start_breaks: Option<bool>,
}

impl SettingsPatch {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(kind) = self.default_timer_kind {
            settings.default_timer_kind = kind;
        }
        if let Some(pomodoro) = self.pomodoro {
            settings.pomodoro = pomodoro;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
        if let Some(sound) = self.sound_enabled {
            settings.sound_enabled = sound;
        }
        if let Some(auto) = self.auto_start_breaks {
            settings.auto_start_breaks = auto;
        }
    }
}

fn default_work_time() -> u32 {
    25
}
fn default_short_break() -> u32 {
    5
}
fn default_long_break() -> u32 {
    15
}
fn default_long_break_interval() -> u32 {
    4
}
fn default_theme() -> ThemePref {
    ThemePref::System
}
fn default_true() -> bool {
    true
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_time: default_work_time(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePref::System,
            default_timer_kind: TimerKind::Work,
            pomodoro: PomodoroSettings::default(),
            notifications: true,
            sound_enabled: true,
            auto_start_breaks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_pomodoro() {
        let s = Settings::default();
        assert_eq!(s.pomodoro.work_time, 25);
        assert_eq!(s.pomodoro.short_break, 5);
        assert_eq!(s.pomodoro.long_break, 15);
        assert_eq!(s.pomodoro.long_break_interval, 4);
        assert!(!s.auto_start_breaks);
    }

    #[test]
    fn patch_is_a_shallow_merge() {
        let mut s = Settings::default();
        let patch = SettingsPatch {
            theme: Some(ThemePref::Dark),
            notifications: Some(false),
            ..SettingsPatch::default()
        };
        patch.apply(&mut s);
        assert_eq!(s.theme, ThemePref::Dark);
        assert!(!s.notifications);
        // Untouched fields keep their values.
        assert!(s.sound_enabled);
        assert_eq!(s.pomodoro.work_time, 25);
    }

    #[test]
    fn settings_roundtrip_through_json() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        let decoded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, s);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let decoded: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, Settings::default());
    }
}
