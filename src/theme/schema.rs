use std::{ops::Deref, sync::LazyLock};

use folio_palette::{ColorToken, Gradient};
use gpui::{AbsoluteLength, DefiniteLength, FontWeight, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_abs_length, de_def_length, de_font_family, de_pixels};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub colors: ThemeColors,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path))
                    .unwrap_or_else(|err| panic!("builtin theme {} is invalid: {err}", $path))
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub padding: ThemePadding,
    pub spacing: ThemeSpacing,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
    pub mono_font: ThemeMonoFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_font_family")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

impl ThemeFont {
    /// The preferred family; the list is never empty.
    pub fn primary_family(&self) -> SharedString {
        self.family[0].clone()
    }
}

/// Monospace face for tags, dates and captions. Sizes come from the default font.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeMonoFont {
    #[serde(deserialize_with = "de_font_family")]
    pub family: SmallVec<[SharedString; 1]>,
}

impl ThemeMonoFont {
    pub fn primary_family(&self) -> SharedString {
        self.family[0].clone()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub display: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub micro: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub display: f32,
    pub heading: f32,
    pub label: f32,
}

impl ThemeTextWeights {
    pub fn display(&self) -> FontWeight {
        FontWeight(self.display)
    }

    pub fn heading(&self) -> FontWeight {
        FontWeight(self.heading)
    }

    pub fn label(&self) -> FontWeight {
        FontWeight(self.label)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub content_max_width: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub nav_height: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub section_gap: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub progress_height: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub surface: ThemeSurfaceColors,
    pub border: ThemeBorderColors,
    pub text: ThemeTextColors,
    pub accents: ThemeAccents,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSurfaceColors {
    pub page: Rgba,
    pub nav: Rgba,
    pub card: Rgba,
    pub card_faint: Rgba,
    pub tile: Rgba,
    pub chip: Rgba,
    pub button: Rgba,
    pub button_hover: Rgba,
    pub button_primary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBorderColors {
    pub subtle: Rgba,
    pub faint: Rgba,
    pub hover: Rgba,
    pub strong: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub body: Rgba,
    pub chip: Rgba,
    pub secondary: Rgba,
    pub muted: Rgba,
    pub faint: Rgba,
    pub inverse: Rgba,
}

/// Palette-driven accents used by the page chrome.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccents {
    pub progress: Gradient,
    pub headline: Gradient,
    /// Accent for the availability and online indicators.
    pub status: ColorToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_theme_parses() {
        let theme = Theme::from_string(include_str!("../../themes/default.json"))
            .expect("builtin theme should parse");

        assert_eq!(theme.name.as_ref(), "Slate Night");
        assert!(!theme.layout.text.default_font.family.is_empty());
        assert_eq!(theme.layout.text.mono_font.primary_family().as_ref(), "Geist Mono");
        assert_eq!(theme.colors.accents.progress.to_string(), "emerald-500→purple-500");
        assert_eq!(theme.colors.accents.status, ColorToken::Emerald);
    }

    #[test]
    fn test_empty_font_family_is_rejected() {
        let json = include_str!("../../themes/default.json")
            .replace(r#""family": "Geist Mono""#, r#""family": []"#);

        assert!(Theme::from_string(json).is_err());
    }

    #[test]
    fn test_bad_palette_reference_is_rejected() {
        let json = include_str!("../../themes/default.json").replace("emerald-500", "teal-500");

        assert!(Theme::from_string(json).is_err());
    }
}
