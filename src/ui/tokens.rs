//! Design tokens for the titlebar.
//!
//! The design system sizes everything in `rem` with a 10px root, so
//! `4rem` becomes 40px here.

use gpui::px;

// =============================================================================
// Spacing scale
// =============================================================================

/// `$2` (8px) - gap inside the brand cluster
pub const SPACE_2: gpui::Pixels = px(8.0);

/// `$3` (12px) - leading padding of the bar
pub const SPACE_3: gpui::Pixels = px(12.0);

// =============================================================================
// Text sizes
// =============================================================================

/// `$sm` (14px) - application name
pub const TEXT_SM: gpui::Pixels = px(14.0);

/// Superscript version badge (10px)
pub const TEXT_SUP: gpui::Pixels = px(10.0);

/// Version badge is lifted by `$2` above the baseline
pub const SUP_OFFSET: gpui::Pixels = px(-8.0);

// =============================================================================
// Titlebar geometry
// =============================================================================

/// Bar height (`4rem`)
pub const TITLEBAR_HEIGHT: gpui::Pixels = px(40.0);

/// Width of each window control (`4rem`)
pub const CONTROL_WIDTH: gpui::Pixels = px(40.0);

/// Logo edge (`1.6rem`)
pub const LOGO_SIZE: gpui::Pixels = px(16.0);

/// Control glyph box; glyph bars are 12px (minimize) and 14px (close) wide
pub const GLYPH_SIZE: gpui::Pixels = px(14.0);
