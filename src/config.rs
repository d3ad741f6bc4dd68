//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, RosterError};
use crate::model::timeline::DEFAULT_PIXELS_PER_MINUTE;
use crate::model::TimeOfDay;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub pixels_per_minute: f32,
    /// Interval given to a newly added member.
    pub default_shift_start: TimeOfDay,
    pub default_shift_end: TimeOfDay,
    pub last_roster: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            pixels_per_minute: DEFAULT_PIXELS_PER_MINUTE,
            default_shift_start: TimeOfDay::from_hm(9, 0).unwrap_or(TimeOfDay::MIDNIGHT),
            default_shift_end: TimeOfDay::from_hm(17, 0).unwrap_or(TimeOfDay::END_OF_DAY),
            last_roster: None,
        }
    }
}

impl AppSettings {
    /// Default location: `<config dir>/shift-timeline/settings.json`.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "shift-timeline")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file; using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| RosterError::io(dir, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| RosterError::io(path, e))
    }
}
