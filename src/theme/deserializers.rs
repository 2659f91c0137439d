use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(SharedString),
    Many(SmallVec<[SharedString; 1]>),
}

/// A length literal: `12`, `"12px"`, `"0.75rem"` or `"150%"`.
enum LengthLiteral {
    Pixels(f32),
    Rems(f32),
    Percent(f32),
}

impl LengthLiteral {
    fn parse(value: StringOrFloat) -> Option<Self> {
        let string = match value {
            StringOrFloat::Float(num) => return Some(Self::Pixels(num)),
            StringOrFloat::String(string) => string,
        };

        let string = string.trim();

        if let Some(num) = string.strip_suffix("px") {
            num.parse().ok().map(Self::Pixels)
        } else if let Some(num) = string.strip_suffix("rem") {
            num.parse().ok().map(Self::Rems)
        } else if let Some(num) = string.strip_suffix('%') {
            num.parse().ok().map(Self::Percent)
        } else {
            None
        }
    }
}

pub fn de_font_family<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrList::deserialize(deserializer)? {
        StringOrList::One(family) => Ok(SmallVec::from_buf([family])),
        StringOrList::Many(families) if families.is_empty() => {
            Err(D::Error::custom("font family list can't be empty"))
        }
        StringOrList::Many(families) => Ok(families),
    }
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match LengthLiteral::parse(StringOrFloat::deserialize(deserializer)?) {
        Some(LengthLiteral::Pixels(value)) => Ok(px(value)),
        _ => Err(D::Error::custom("expected f32 or string ending with 'px'")),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match LengthLiteral::parse(StringOrFloat::deserialize(deserializer)?) {
        Some(LengthLiteral::Pixels(value)) => Ok(AbsoluteLength::Pixels(px(value))),
        Some(LengthLiteral::Rems(value)) => Ok(AbsoluteLength::Rems(rems(value))),
        _ => Err(D::Error::custom(
            "expected f32 or string ending with 'px' or 'rem'",
        )),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match LengthLiteral::parse(StringOrFloat::deserialize(deserializer)?) {
        Some(LengthLiteral::Pixels(value)) => Ok(DefiniteLength::Absolute(
            AbsoluteLength::Pixels(px(value)),
        )),
        Some(LengthLiteral::Rems(value)) => {
            Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))))
        }
        Some(LengthLiteral::Percent(value)) => Ok(DefiniteLength::Fraction(value / 100.)),
        None => Err(D::Error::custom(
            "expected f32 or string ending with 'px', 'rem' or '%'",
        )),
    }
}
