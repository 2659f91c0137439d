use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// A source of embedded bytes, keyed by relative path.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

/// Chains several providers into one gpui [`AssetSource`].
///
/// Providers are searched in order and the first hit wins. A miss is an
/// error, which gpui turns into an image fallback or an empty icon.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        match self.providers.iter().find_map(|provider| provider.get(path)) {
            Some(asset) => Ok(Some(asset)),
            None => {
                tracing::warn!(path, "asset not found");
                Err(anyhow!("could not find asset at path \"{path}\""))
            }
        }
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut paths = Vec::new();

        for provider in &self.providers {
            for entry in provider.list(path)? {
                if !paths.contains(&entry) {
                    paths.push(entry);
                }
            }
        }

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(&'static [(&'static str, &'static str)]);

    impl AssetProvider for StaticProvider {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            self.0
                .iter()
                .find(|(p, _)| *p == path)
                .map(|(_, contents)| Cow::Borrowed(contents.as_bytes()))
        }

        fn list(&self, path: &str) -> Result<Vec<SharedString>> {
            Ok(self
                .0
                .iter()
                .filter(|(p, _)| p.starts_with(path))
                .map(|(p, _)| SharedString::from(*p))
                .collect())
        }
    }

    fn two_providers() -> Assets<2> {
        crate::assets![
            StaticProvider(&[("icons/a.svg", "first"), ("icons/b.svg", "b")]),
            StaticProvider(&[("icons/a.svg", "second"), ("images/c.png", "c")]),
        ]
    }

    #[test]
    fn test_first_provider_wins() {
        let asset = two_providers().load("icons/a.svg").unwrap().unwrap();
        assert_eq!(&*asset, b"first");
    }

    #[test]
    fn test_falls_through_to_later_providers() {
        let asset = two_providers().load("images/c.png").unwrap().unwrap();
        assert_eq!(&*asset, b"c");
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        assert!(two_providers().load("images/missing.jpg").is_err());
    }

    #[test]
    fn test_empty_path_is_not_an_error() {
        assert!(two_providers().load("").unwrap().is_none());
    }

    #[test]
    fn test_list_merges_without_duplicates() {
        let paths = two_providers().list("icons/").unwrap();
        assert_eq!(
            paths,
            vec![SharedString::from("icons/a.svg"), SharedString::from("icons/b.svg")]
        );
    }
}
