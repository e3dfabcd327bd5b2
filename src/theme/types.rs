//! Theme type definitions

use serde::{Deserialize, Serialize};

/// Theme mode preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system appearance
    #[default]
    Auto,
}

impl ThemeMode {
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => system_is_dark,
        }
    }
}
