#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{ColorRef, Gradient, Hue, Shade};

/// A named accent identity selecting a consistent set of style attributes.
///
/// Any string converts into a token. Names outside the palette fall back to
/// [`ColorToken::default`] instead of failing, so theming can never stop a
/// component from rendering.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[func(pub fn hue(&self) -> Hue)]
pub enum ColorToken {
    #[default]
    #[assoc(hue = Hue::Emerald)]
    Emerald,
    #[assoc(hue = Hue::Blue)]
    Blue,
    #[assoc(hue = Hue::Purple)]
    Purple,
    #[assoc(hue = Hue::Amber)]
    Amber,
    #[assoc(hue = Hue::Yellow)]
    Yellow,
    #[assoc(hue = Hue::Pink)]
    Pink,
}

impl ColorToken {
    pub const ALL: [ColorToken; 6] = [
        ColorToken::Emerald,
        ColorToken::Blue,
        ColorToken::Purple,
        ColorToken::Amber,
        ColorToken::Yellow,
        ColorToken::Pink,
    ];

    /// Exact lookup, returning `None` for names outside the palette.
    pub fn try_from_name(name: &str) -> Option<ColorToken> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    /// Total lookup: unknown names resolve to the default token.
    pub fn from_name(name: &str) -> ColorToken {
        Self::try_from_name(name).unwrap_or_else(|| {
            tracing::debug!(token = name, "unrecognized color token, using default");
            ColorToken::default()
        })
    }

    pub fn name(&self) -> &'static str {
        self.hue().name()
    }

    /// The style attributes for this token.
    pub fn bundle(&self) -> ThemeBundle {
        let hue = self.hue();
        let swatch = |shade| ColorRef::new(hue, shade);

        ThemeBundle {
            background: swatch(Shade::S500),
            background_light: swatch(Shade::S500).with_opacity(10),
            text: swatch(Shade::S400),
            border: swatch(Shade::S500),
            ring: swatch(Shade::S500),
            gradient: Gradient {
                from: swatch(Shade::S500),
                to: swatch(Shade::S600),
            },
        }
    }
}

impl From<&str> for ColorToken {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ColorToken {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.name().to_string()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved style attributes for a [`ColorToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeBundle {
    /// Solid fill, used for markers and accents.
    pub background: ColorRef,
    /// Translucent fill behind icons and pills.
    pub background_light: ColorRef,
    pub text: ColorRef,
    pub border: ColorRef,
    /// Emphasis ring color.
    pub ring: ColorRef,
    pub gradient: Gradient,
}

/// Resolves any color name to its bundle, falling back to the default palette
/// entry for names outside the palette.
pub fn resolve(name: &str) -> ThemeBundle {
    ColorToken::from_name(name).bundle()
}

#[cfg(test)]
mod tests {
    use rand::{Rng, distr::Alphanumeric};

    use super::*;

    #[test]
    fn test_emerald_bundle() {
        let bundle = resolve("emerald");
        assert_eq!(bundle.background.to_string(), "emerald-500");
        assert_eq!(bundle.background_light.to_string(), "emerald-500/10");
        assert_eq!(bundle.text.to_string(), "emerald-400");
        assert_eq!(bundle.border.to_string(), "emerald-500");
        assert_eq!(bundle.ring.to_string(), "emerald-500");
        assert_eq!(bundle.gradient.to_string(), "emerald-500→emerald-600");
    }

    #[test]
    fn test_every_palette_token_matches_its_hue() {
        for token in ColorToken::ALL {
            let bundle = resolve(token.name());
            let hue = token.hue();

            for color in [
                bundle.background,
                bundle.background_light,
                bundle.text,
                bundle.border,
                bundle.ring,
                bundle.gradient.from,
                bundle.gradient.to,
            ] {
                assert_eq!(color.hue, hue, "{token} bundle should only use {hue}");
            }

            assert_eq!(bundle.text.to_string(), format!("{hue}-400"));
            assert_eq!(
                bundle.gradient.to_string(),
                format!("{hue}-500→{hue}-600")
            );
        }
    }

    #[test]
    fn test_blue_text_is_blue() {
        let bundle = resolve("blue");
        assert_eq!(bundle.text, ColorRef::new(Hue::Blue, Shade::S400));
        assert_eq!(bundle.gradient.from.hue, Hue::Blue);
        assert_eq!(bundle.gradient.to.hue, Hue::Blue);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_default() {
        let default = resolve("emerald");

        assert_eq!(resolve("nonexistent-color"), default);
        assert_eq!(resolve(""), default);
        assert_eq!(resolve("Blue"), default);
        assert_eq!(resolve(" blue"), default);
        assert_eq!(resolve("slate"), default);
    }

    #[test]
    fn test_random_tokens_never_fail() {
        let mut rng = rand::rng();
        let default = ColorToken::default().bundle();

        for _ in 0..500 {
            let len = rng.random_range(0..16);
            let name: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();

            let expected = ColorToken::try_from_name(&name)
                .map(|token| token.bundle())
                .unwrap_or(default);

            assert_eq!(resolve(&name), expected, "token {name:?}");
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for name in ["pink", "amber", "nope"] {
            assert_eq!(resolve(name), resolve(name));
        }
    }

    #[test]
    fn test_token_deserializes_totally() {
        let token: ColorToken = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(token, ColorToken::Purple);

        let token: ColorToken = serde_json::from_str("\"chartreuse\"").unwrap();
        assert_eq!(token, ColorToken::Emerald);

        assert_eq!(serde_json::to_string(&ColorToken::Pink).unwrap(), "\"pink\"");
    }
}
