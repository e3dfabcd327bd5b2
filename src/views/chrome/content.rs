//! Headless description of what the titlebar shows.
//!
//! The view renders from this, and tests assert against it without a window.

use crate::assets::{CLOSE_ICON, LOGO_PATH, MINIMIZE_ICON};
use crate::props::ResolvedProps;
use gpui::SharedString;

/// Application name shown next to the logo
pub const APP_NAME: &str = "Pomatez";

/// Alt text for the logo, shown when the image cannot be loaded
pub const LOGO_ALT: &str = "Pomatez Logo";

/// Window controls in the right-hand cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowControl {
    Minimize,
    Close,
}

impl WindowControl {
    /// Controls in display order, left to right.
    pub fn all() -> &'static [WindowControl] {
        &[WindowControl::Minimize, WindowControl::Close]
    }

    /// Accessible name, also used as tooltip.
    pub fn aria_label(self) -> &'static str {
        match self {
            WindowControl::Minimize => "Minimize Button",
            WindowControl::Close => "Close Button",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WindowControl::Minimize => MINIMIZE_ICON,
            WindowControl::Close => CLOSE_ICON,
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            WindowControl::Minimize => "titlebar-minimize",
            WindowControl::Close => "titlebar-close",
        }
    }

    /// Close turns the glyph red on hover.
    pub fn is_close(self) -> bool {
        matches!(self, WindowControl::Close)
    }
}

/// Everything the titlebar renders, minus styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlebarContent {
    pub logo_path: &'static str,
    pub logo_alt: &'static str,
    pub app_name: SharedString,
    /// `v<version>`; absent for an empty version
    pub version_label: Option<SharedString>,
    pub controls: Vec<WindowControl>,
    /// The bar as a whole moves the window
    pub draggable: bool,
    /// The control cluster is carved out of the drag region
    pub controls_draggable: bool,
}

impl TitlebarContent {
    pub fn from_props(props: &ResolvedProps) -> Self {
        Self {
            logo_path: LOGO_PATH,
            logo_alt: LOGO_ALT,
            app_name: APP_NAME.into(),
            version_label: props.version_label(),
            controls: WindowControl::all().to_vec(),
            draggable: true,
            controls_draggable: false,
        }
    }

    /// Text nodes of the brand cluster, in order.
    pub fn texts(&self) -> Vec<SharedString> {
        std::iter::once(self.app_name.clone())
            .chain(self.version_label.clone())
            .collect()
    }
}
