use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeChoice {
    #[default]
    #[serde(rename = "theme-light")]
    Light,
    #[serde(rename = "theme-dark")]
    Dark,
}

impl ThemeChoice {
    /// Value stored under the `theme` key
    pub fn storage_value(&self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the toggle control, which offers the other theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀️ Light",
        }
    }
}

impl FromStr for ThemeChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "theme-light" => Ok(Self::Light),
            "dark" | "theme-dark" => Ok(Self::Dark),
            other => Err(AppError::Settings(format!("unknown theme '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Chain operations: read the previous output instead of the input
    #[serde(default = "default_apply_to_output")]
    pub apply_to_output: bool,

    #[serde(default)]
    pub remove_accents: bool,
}

fn default_apply_to_output() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            apply_to_output: default_apply_to_output(),
            remove_accents: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(config_path) {
                    debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;
        debug!("Saved settings to {}", config_path.display());

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("text-cleaner");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert!(settings.apply_to_output);
        assert!(!settings.remove_accents);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme: ThemeChoice::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_theme_stored_under_theme_key() {
        let settings = AppSettings {
            theme: ThemeChoice::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"theme\":\"theme-dark\""));
    }

    #[test]
    fn test_partial_config() {
        // Older files may only carry the theme
        let json = r#"{"theme": "theme-dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert!(settings.apply_to_output);
        assert!(!settings.remove_accents);
    }

    #[test]
    fn test_theme_toggle_and_labels() {
        assert_eq!(ThemeChoice::Light.toggled(), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::Dark.toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::Light.toggle_label(), "🌙 Dark");
        assert_eq!(ThemeChoice::Dark.toggle_label(), "☀️ Light");
        assert_eq!(ThemeChoice::Dark.storage_value(), "theme-dark");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<ThemeChoice>().unwrap(), ThemeChoice::Dark);
        assert_eq!("Theme-Light".parse::<ThemeChoice>().unwrap(), ThemeChoice::Light);
        assert!(matches!(
            "sepia".parse::<ThemeChoice>(),
            Err(AppError::Settings(_))
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            theme: ThemeChoice::Dark,
            apply_to_output: false,
            remove_accents: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ definitely not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
