//! TOML-based application configuration.
//!
//! Holds the preparation-window parameters the schedule calculator runs
//! against: exam date, total schedule days, the overall hours goal and the
//! weekly session goal.
//!
//! Configuration is stored at `~/.config/estuda/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::schedule::ExamPlan;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/estuda/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_exam_date")]
    pub exam_date: NaiveDate,
    /// Fixed length of the whole preparation window, in days.
    #[serde(default = "default_total_schedule_days")]
    pub total_schedule_days: u32,
    /// Overall study-time goal for the window, in hours.
    #[serde(default = "default_total_hours_goal")]
    pub total_hours_goal: u32,
    #[serde(default = "default_weekly_session_goal")]
    pub weekly_session_goal: u32,
}

fn default_exam_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 28).expect("valid date")
}
fn default_total_schedule_days() -> u32 {
    32
}
fn default_total_hours_goal() -> u32 {
    200
}
fn default_weekly_session_goal() -> u32 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_date: default_exam_date(),
            total_schedule_days: default_total_schedule_days(),
            total_hours_goal: default_total_hours_goal(),
            weekly_session_goal: default_weekly_session_goal(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// The schedule parameters the calculator consumes.
    pub fn plan(&self) -> ExamPlan {
        ExamPlan {
            exam_date: self.exam_date,
            total_days: self.total_schedule_days,
            total_hours_goal: self.total_hours_goal,
            weekly_session_goal: self.weekly_session_goal,
        }
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// with the field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        let obj = json.as_object_mut().expect("config serializes to an object");
        let existing = obj
            .get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Number(_) => {
                let n: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as number"),
                })?;
                serde_json::Value::Number(n.into())
            }
            _ => serde_json::Value::String(value.into()),
        };
        obj.insert(key.to_string(), new_value);

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn default_window_matches_the_preparation_plan() {
        let cfg = Config::default();
        assert_eq!(cfg.total_schedule_days, 32);
        assert_eq!(cfg.total_hours_goal, 200);
        assert_eq!(cfg.exam_date, NaiveDate::from_ymd_opt(2025, 9, 28).unwrap());
    }

    #[test]
    fn get_returns_string_for_all_types() {
        let cfg = Config::default();
        assert_eq!(cfg.get("total_schedule_days").as_deref(), Some("32"));
        assert_eq!(cfg.get("exam_date").as_deref(), Some("2025-09-28"));
        assert!(cfg.get("missing_key").is_none());
    }

    #[test]
    fn partial_toml_falls_back_to_field_defaults() {
        let parsed: Config = toml::from_str("total_hours_goal = 120\n").unwrap();
        assert_eq!(parsed.total_hours_goal, 120);
        assert_eq!(parsed.total_schedule_days, 32);
    }
}
