use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Icons bundled with the crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct MosaicAssets;

impl AssetProvider for MosaicAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|file| file.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(MosaicAssets::iter()
            .filter(|embedded| embedded.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MosaicIconKind;

    #[test]
    fn test_every_icon_is_bundled() {
        for icon in [
            MosaicIconKind::Checkmark,
            MosaicIconKind::ChevronDown,
            MosaicIconKind::Close,
        ] {
            assert!(
                AssetProvider::get(&MosaicAssets, &icon.path()).is_some(),
                "{} is missing",
                icon.path()
            );
        }
    }
}
