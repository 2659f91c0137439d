use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Icons and images bundled into the binary.
///
/// Images are optional: a build without `images/` still runs, and the page
/// draws its placeholders instead.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[include = "images/**/*.png"]
#[include = "images/**/*.jpg"]
#[exclude = "*.DS_Store"]
pub struct FolioAssets;

impl AssetProvider for FolioAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(FolioAssets::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| SharedString::from(p.into_owned()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::IconKind;

    #[test]
    fn test_every_icon_is_bundled() {
        for icon in IconKind::ALL {
            assert!(
                FolioAssets.get(&icon.path()).is_some(),
                "missing icon asset {}",
                icon.path()
            );
        }
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let icons = FolioAssets.list("icons/").unwrap();
        assert!(!icons.is_empty());
        assert!(icons.iter().all(|path| path.starts_with("icons/")));
    }
}
