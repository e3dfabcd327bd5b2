//! Theme color definitions
//!
//! Colors are named after the design-system scale steps the titlebar
//! references (`blue12`, `gray11`, ...), stored as `0xRRGGBB`.

/// Palette for one appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    /// Titlebar background
    pub bg: u32,
    /// High-contrast brand text (app name, version)
    pub blue12: u32,
    /// Low-contrast text, idle control glyphs
    pub gray11: u32,
    /// Hovered control background
    pub gray4: u32,
    /// Solid danger color, hovered close glyph
    pub red9: u32,
}

pub const LIGHT_THEME: ThemeColors = ThemeColors {
    bg: 0xFFFFFF,
    blue12: 0x113264,
    gray11: 0x646464,
    gray4: 0xE8E8E8,
    red9: 0xE5484D,
};

pub const DARK_THEME: ThemeColors = ThemeColors {
    bg: 0x111111,
    blue12: 0xC2E6FF,
    gray11: 0xB4B4B4,
    gray4: 0x2A2A2A,
    red9: 0xE5484D,
};
