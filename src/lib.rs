//! Custom window titlebar for the Pomatez timer, rendered with GPUI.
//!
//! ```ignore
//! let titlebar = cx.new(|_cx| {
//!     Titlebar::new(
//!         TitlebarProps::new()
//!             .app_version(env!("CARGO_PKG_VERSION"))
//!             .on_minimize(|window, _cx| window.minimize_window())
//!             .on_close(|_window, cx| cx.quit()),
//!     )
//! });
//!
//! // In the parent's render: embed it cached, so parent redraws skip it.
//! div().child(Titlebar::cached_view(&titlebar))
//! ```

pub mod app_state;
pub mod assets;
pub mod props;
pub mod settings;
pub mod theme;
pub mod ui;
pub mod views;

pub use app_state::{AppState, ParseAppStateError};
pub use props::{ControlHandler, ResolvedProps, TitlebarProps, DEFAULT_APP_VERSION};
pub use views::{Titlebar, TitlebarContent, WindowControl};
