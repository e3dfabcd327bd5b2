//! Theme module
//!
//! Light and dark palettes plus the global entity views read colors from.

mod colors;
mod types;

pub use colors::{DARK_THEME, LIGHT_THEME, ThemeColors};
pub use types::ThemeMode;

use gpui::*;

/// Global theme state
pub struct AppTheme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    system_is_dark: bool,
}

impl AppTheme {
    pub fn new(mode: ThemeMode, system_is_dark: bool) -> Self {
        Self {
            mode,
            colors: Self::colors_for_mode(mode, system_is_dark),
            system_is_dark,
        }
    }

    fn colors_for_mode(mode: ThemeMode, system_is_dark: bool) -> ThemeColors {
        if mode.is_dark(system_is_dark) {
            DARK_THEME
        } else {
            LIGHT_THEME
        }
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.update_colors();
    }

    pub fn set_system_appearance(&mut self, is_dark: bool) {
        self.system_is_dark = is_dark;
        if self.mode == ThemeMode::Auto {
            self.update_colors();
        }
    }

    fn update_colors(&mut self) {
        self.colors = Self::colors_for_mode(self.mode, self.system_is_dark);
    }
}

/// Wrapper for global theme entity
pub struct GlobalTheme(pub Entity<AppTheme>);

impl Global for GlobalTheme {}

/// Current theme colors. Falls back to the light palette when no theme
/// has been installed, so views render in bare test contexts.
pub fn theme(cx: &App) -> ThemeColors {
    cx.try_global::<GlobalTheme>()
        .map(|global| global.0.read(cx).colors)
        .unwrap_or(LIGHT_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_system_appearance() {
        let mut theme = AppTheme::new(ThemeMode::Auto, false);
        assert_eq!(theme.colors, LIGHT_THEME);
        theme.set_system_appearance(true);
        assert_eq!(theme.colors, DARK_THEME);
    }

    #[test]
    fn explicit_mode_ignores_system_appearance() {
        let mut theme = AppTheme::new(ThemeMode::Light, true);
        assert_eq!(theme.colors, LIGHT_THEME);
        theme.set_system_appearance(true);
        assert_eq!(theme.colors, LIGHT_THEME);
        theme.set_mode(ThemeMode::Dark);
        assert_eq!(theme.colors, DARK_THEME);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Auto).unwrap(), "\"auto\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[gpui::test]
    fn theme_reads_global_entity(cx: &mut gpui::TestAppContext) {
        cx.update(|cx| {
            assert_eq!(theme(cx), LIGHT_THEME);
            let entity = cx.new(|_cx| AppTheme::new(ThemeMode::Dark, false));
            cx.set_global(GlobalTheme(entity));
            assert_eq!(theme(cx), DARK_THEME);
        });
    }
}
