use std::borrow::Cow;

use anyhow::{anyhow, Result};
use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

/// Tray logo shown at the left edge of the titlebar
pub const LOGO_PATH: &str = "logo/tray.png";
pub const MINIMIZE_ICON: &str = "icons/minimize.svg";
pub const CLOSE_ICON: &str = "icons/close.svg";

#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*"]
#[include = "logo/**/*"]
#[exclude = "*.DS_Store"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{}\"", path))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titlebar_assets_are_embedded() {
        for path in [LOGO_PATH, MINIMIZE_ICON, CLOSE_ICON] {
            let data = Assets.load(path).unwrap();
            assert!(data.is_some_and(|bytes| !bytes.is_empty()), "{path} is empty");
        }
    }

    #[test]
    fn missing_asset_is_an_error() {
        let err = Assets.load("icons/nope.svg").unwrap_err();
        assert!(err.to_string().contains("icons/nope.svg"));
    }

    #[test]
    fn list_filters_by_prefix() {
        let icons = Assets.list("icons/").unwrap();
        assert!(icons.iter().any(|p| &**p == MINIMIZE_ICON));
        assert!(icons.iter().all(|p| p.starts_with("icons/")));
    }
}
