//! Window chrome: the custom titlebar.

pub mod content;
pub mod title_bar;

pub use content::{TitlebarContent, WindowControl, APP_NAME, LOGO_ALT};
pub use title_bar::Titlebar;
