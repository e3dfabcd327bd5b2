//! Application views.

pub mod chrome;

pub use chrome::{Titlebar, TitlebarContent, WindowControl};
