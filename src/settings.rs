use crate::app_state::AppState;
use crate::theme::ThemeMode;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current settings schema version - increment when making breaking changes
pub const SETTINGS_VERSION: u32 = 1;

/// App settings persisted between runs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Settings schema version for migration support
    #[serde(default = "default_settings_version")]
    pub version: u32,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Timer phase at last exit
    #[serde(default)]
    pub app_state: AppState,
}

fn default_settings_version() -> u32 {
    SETTINGS_VERSION
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme_mode: ThemeMode::default(),
            app_state: AppState::default(),
        }
    }
}

/// Get the config directory path
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomatez")
}

/// Get the settings file path
pub fn get_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}

/// Load settings from the default location
pub fn load_settings() -> AppSettings {
    load_settings_from(&get_settings_path())
}

/// Load settings from `path`. Never fails: problems are logged and
/// defaults are returned.
pub fn load_settings_from(path: &Path) -> AppSettings {
    if !path.exists() {
        log::info!("Settings file not found at {}, using defaults", path.display());
        return AppSettings::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to read settings file {}: {}", path.display(), e);
            return AppSettings::default();
        }
    };

    match serde_json::from_str::<AppSettings>(&content) {
        Ok(settings) => migrate_settings(settings),
        Err(e) => {
            log::warn!("Failed to parse settings {}: {}, using defaults", path.display(), e);
            AppSettings::default()
        }
    }
}

fn migrate_settings(mut settings: AppSettings) -> AppSettings {
    if settings.version < SETTINGS_VERSION {
        log::info!(
            "Migrating settings from v{} to v{}",
            settings.version,
            SETTINGS_VERSION
        );
        settings.version = SETTINGS_VERSION;
    }
    settings
}

/// Save settings to the default location
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_settings_to(&get_settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600));
    }
    Ok(())
}
