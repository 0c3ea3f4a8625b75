use crate::domain::{default_plan, find_plan, Plan, PlanChangePolicy, SessionStats};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Plan id selected at startup
    #[serde(default = "default_plan_id")]
    pub default_plan: String,

    // Streak counters are not tracked by the app; they are shown as configured
    #[serde(default = "default_streak_days")]
    pub streak_days: u32,
    #[serde(default = "default_total_fasts")]
    pub total_fasts: u32,

    #[serde(default)]
    pub plan_change: PlanChangePolicy,

    #[serde(default = "default_true")]
    pub notifications: bool,

    #[serde(default = "default_true")]
    pub use_emoji: bool,
}

fn default_plan_id() -> String {
    default_plan().id.to_string()
}

fn default_streak_days() -> u32 {
    SessionStats::default().streak_days
}

fn default_total_fasts() -> u32 {
    SessionStats::default().total_fasts
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_plan: default_plan_id(),
            streak_days: default_streak_days(),
            total_fasts: default_total_fasts(),
            plan_change: PlanChangePolicy::default(),
            notifications: true,
            use_emoji: true,
        }
    }
}

impl Settings {
    /// Resolve the configured startup plan
    pub fn plan(&self) -> Result<&'static Plan> {
        find_plan(&self.default_plan)
            .context("Invalid default_plan in settings.json")
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            streak_days: self.streak_days,
            total_fasts: self.total_fasts,
        }
    }
}

/// Load settings from settings.json, falling back to defaults if it doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    let Some(content) = crate::persistence::read_file(path)? else {
        return Ok(Settings::default());
    };

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.plan().unwrap().name, "16:8");
        assert_eq!(settings.stats(), SessionStats::default());
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            default_plan: "18-6".to_string(),
            streak_days: 7,
            total_fasts: 30,
            plan_change: PlanChangePolicy::Rescale,
            notifications: false,
            use_emoji: false,
        };
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "default_plan": "20-4", "plan_change": "rescale" }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.plan().unwrap().fasting_hours, 20);
        assert_eq!(settings.plan_change, PlanChangePolicy::Rescale);
        assert_eq!(settings.streak_days, 3);
        assert!(settings.notifications);
    }

    #[test]
    fn test_unknown_plan_is_reported() {
        let settings = Settings {
            default_plan: "omad".to_string(),
            ..Settings::default()
        };
        let err = settings.plan().unwrap_err();
        assert!(format!("{:#}", err).contains("unknown plan 'omad'"));
    }

    #[test]
    fn test_malformed_settings_fail() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_settings(&path).is_err());
    }
}
