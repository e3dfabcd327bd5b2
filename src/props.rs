//! Titlebar input properties and default merging.

use crate::app_state::AppState;
use gpui::{App, SharedString, Window};
use std::fmt;
use std::rc::Rc;

/// Version shown when the caller does not supply one.
pub const DEFAULT_APP_VERSION: &str = "0.0.0";

/// Callback fired when a window control is activated.
pub type ControlHandler = Rc<dyn Fn(&mut Window, &mut App)>;

/// Caller-supplied titlebar properties. Omitted fields fall back to
/// [`TitlebarProps::defaults`] when resolved.
#[derive(Clone, Default)]
pub struct TitlebarProps {
    pub app_state: Option<AppState>,
    pub app_version: Option<SharedString>,
    pub on_minimize: Option<ControlHandler>,
    pub on_close: Option<ControlHandler>,
}

impl TitlebarProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fallback value set merged under caller props.
    pub fn defaults() -> Self {
        Self {
            app_state: Some(AppState::default()),
            app_version: Some(DEFAULT_APP_VERSION.into()),
            on_minimize: None,
            on_close: None,
        }
    }

    pub fn app_state(mut self, state: AppState) -> Self {
        self.app_state = Some(state);
        self
    }

    pub fn app_version(mut self, version: impl Into<SharedString>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    pub fn on_minimize(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_minimize = Some(Rc::new(handler));
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    /// Fill every field the caller left out from `defaults`.
    pub fn with_defaults(self, defaults: TitlebarProps) -> ResolvedProps {
        ResolvedProps {
            app_state: self
                .app_state
                .or(defaults.app_state)
                .unwrap_or_default(),
            app_version: self
                .app_version
                .or(defaults.app_version)
                .unwrap_or_default(),
            on_minimize: self.on_minimize.or(defaults.on_minimize),
            on_close: self.on_close.or(defaults.on_close),
        }
    }

    pub fn resolve(self) -> ResolvedProps {
        self.with_defaults(Self::defaults())
    }
}

impl fmt::Debug for TitlebarProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitlebarProps")
            .field("app_state", &self.app_state)
            .field("app_version", &self.app_version)
            .field("on_minimize", &self.on_minimize.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl From<ResolvedProps> for TitlebarProps {
    fn from(props: ResolvedProps) -> Self {
        Self {
            app_state: Some(props.app_state),
            app_version: Some(props.app_version),
            on_minimize: props.on_minimize,
            on_close: props.on_close,
        }
    }
}

/// Props after default merging; what the titlebar actually renders from.
#[derive(Clone)]
pub struct ResolvedProps {
    pub app_state: AppState,
    pub app_version: SharedString,
    pub on_minimize: Option<ControlHandler>,
    pub on_close: Option<ControlHandler>,
}

impl ResolvedProps {
    /// `v<version>`, or `None` for an empty version string.
    pub fn version_label(&self) -> Option<SharedString> {
        if self.app_version.is_empty() {
            None
        } else {
            Some(format!("v{}", self.app_version).into())
        }
    }
}

impl Default for ResolvedProps {
    fn default() -> Self {
        TitlebarProps::new().resolve()
    }
}

fn same_handler(a: &Option<ControlHandler>, b: &Option<ControlHandler>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Handlers compare by identity, the rest by value.
impl PartialEq for ResolvedProps {
    fn eq(&self, other: &Self) -> bool {
        self.app_state == other.app_state
            && self.app_version == other.app_version
            && same_handler(&self.on_minimize, &other.on_minimize)
            && same_handler(&self.on_close, &other.on_close)
    }
}

impl fmt::Debug for ResolvedProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedProps")
            .field("app_state", &self.app_state)
            .field("app_version", &self.app_version)
            .field("on_minimize", &self.on_minimize.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
