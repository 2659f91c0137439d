use std::{fmt, str::FromStr};

use gpui::Rgba;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

use crate::{Hue, Shade};

/// Errors produced when parsing a [`ColorRef`] from its text form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("expected a color in the form `hue-shade` or `hue-shade/opacity`, got \"{0}\"")]
    Malformed(String),

    #[error("unknown hue \"{0}\"")]
    UnknownHue(String),

    #[error("unknown shade \"{0}\"")]
    UnknownShade(String),

    #[error("opacity must be a whole percentage between 0 and 100, got \"{0}\"")]
    InvalidOpacity(String),
}

/// A reference to one palette swatch, e.g. `emerald-500` or `emerald-500/10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRef {
    pub hue: Hue,
    pub shade: Shade,
    /// Opacity in whole percent. `None` means fully opaque.
    pub opacity: Option<u8>,
}

impl ColorRef {
    pub const fn new(hue: Hue, shade: Shade) -> Self {
        Self {
            hue,
            shade,
            opacity: None,
        }
    }

    pub const fn with_opacity(mut self, percent: u8) -> Self {
        self.opacity = Some(percent);
        self
    }

    /// Resolves the swatch to a concrete color.
    pub fn rgba(&self) -> Rgba {
        let [_, r, g, b] = self.hue.hex(self.shade).to_be_bytes().map(|c| c as f32 / 255.);
        let a = self.opacity.map(|percent| percent as f32 / 100.).unwrap_or(1.);
        Rgba { r, g, b, a }
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.hue, self.shade)?;
        if let Some(opacity) = self.opacity {
            write!(f, "/{opacity}")?;
        }
        Ok(())
    }
}

impl FromStr for ColorRef {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (swatch, opacity) = match s.split_once('/') {
            Some((swatch, opacity)) => (swatch, Some(opacity)),
            None => (s, None),
        };

        let (hue, shade) = swatch
            .rsplit_once('-')
            .ok_or_else(|| PaletteError::Malformed(s.to_string()))?;

        let hue = Hue::from_name(hue).ok_or_else(|| PaletteError::UnknownHue(hue.to_string()))?;
        let shade = shade
            .parse::<u16>()
            .ok()
            .and_then(Shade::from_value)
            .ok_or_else(|| PaletteError::UnknownShade(shade.to_string()))?;

        let opacity = match opacity {
            Some(opacity) => match opacity.parse::<u8>() {
                Ok(percent) if percent <= 100 => Some(percent),
                _ => return Err(PaletteError::InvalidOpacity(opacity.to_string())),
            },
            None => None,
        };

        Ok(Self {
            hue,
            shade,
            opacity,
        })
    }
}

impl Serialize for ColorRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(D::Error::custom)
    }
}

/// A two-stop left-to-right gradient between palette swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gradient {
    pub from: ColorRef,
    pub to: ColorRef,
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let color = ColorRef::new(Hue::Emerald, Shade::S500);
        assert_eq!(color.to_string(), "emerald-500");
        assert_eq!(color.with_opacity(10).to_string(), "emerald-500/10");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "blue-400".parse::<ColorRef>(),
            Ok(ColorRef::new(Hue::Blue, Shade::S400))
        );
        assert_eq!(
            "pink-500/30".parse::<ColorRef>(),
            Ok(ColorRef::new(Hue::Pink, Shade::S500).with_opacity(30))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "emerald".parse::<ColorRef>(),
            Err(PaletteError::Malformed("emerald".into()))
        );
        assert_eq!(
            "teal-500".parse::<ColorRef>(),
            Err(PaletteError::UnknownHue("teal".into()))
        );
        assert_eq!(
            "blue-450".parse::<ColorRef>(),
            Err(PaletteError::UnknownShade("450".into()))
        );
        assert_eq!(
            "blue-500/150".parse::<ColorRef>(),
            Err(PaletteError::InvalidOpacity("150".into()))
        );
    }

    #[test]
    fn test_rgba() {
        let color = ColorRef::new(Hue::Blue, Shade::S500).rgba();
        assert_eq!(color.r, 0x3B as f32 / 255.);
        assert_eq!(color.g, 0x82 as f32 / 255.);
        assert_eq!(color.b, 0xF6 as f32 / 255.);
        assert_eq!(color.a, 1.);

        let translucent = ColorRef::new(Hue::Blue, Shade::S500).with_opacity(10).rgba();
        assert!((translucent.a - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_serde() {
        let color: ColorRef = serde_json::from_str("\"amber-500/50\"").unwrap();
        assert_eq!(color, ColorRef::new(Hue::Amber, Shade::S500).with_opacity(50));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"amber-500/50\"");

        assert!(serde_json::from_str::<ColorRef>("\"amber\"").is_err());
    }

    #[test]
    fn test_gradient_display() {
        let gradient = Gradient {
            from: ColorRef::new(Hue::Purple, Shade::S500),
            to: ColorRef::new(Hue::Purple, Shade::S600),
        };
        assert_eq!(gradient.to_string(), "purple-500→purple-600");
    }
}
