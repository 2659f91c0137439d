#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;

// Tailwind v3 palette, ordered 50, 100, 200, ..., 900, 950.
const EMERALD: [u32; 11] = [
    0xECFDF5, 0xD1FAE5, 0xA7F3D0, 0x6EE7B7, 0x34D399, 0x10B981, 0x059669, 0x047857, 0x065F46,
    0x064E3B, 0x022C22,
];
const BLUE: [u32; 11] = [
    0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8, 0x1E40AF,
    0x1E3A8A, 0x172554,
];
const PURPLE: [u32; 11] = [
    0xFAF5FF, 0xF3E8FF, 0xE9D5FF, 0xD8B4FE, 0xC084FC, 0xA855F7, 0x9333EA, 0x7E22CE, 0x6B21A8,
    0x581C87, 0x3B0764,
];
const AMBER: [u32; 11] = [
    0xFFFBEB, 0xFEF3C7, 0xFDE68A, 0xFCD34D, 0xFBBF24, 0xF59E0B, 0xD97706, 0xB45309, 0x92400E,
    0x78350F, 0x451A03,
];
const YELLOW: [u32; 11] = [
    0xFEFCE8, 0xFEF9C3, 0xFEF08A, 0xFDE047, 0xFACC15, 0xEAB308, 0xCA8A04, 0xA16207, 0x854D0E,
    0x713F12, 0x422006,
];
const PINK: [u32; 11] = [
    0xFDF2F8, 0xFCE7F3, 0xFBCFE8, 0xF9A8D4, 0xF472B6, 0xEC4899, 0xDB2777, 0xBE185D, 0x9D174D,
    0x831843, 0x500724,
];

/// A named color family from the accent palette.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn shades(&self) -> &'static [u32; 11])]
pub enum Hue {
    #[assoc(name = "emerald")]
    #[assoc(shades = &EMERALD)]
    Emerald,
    #[assoc(name = "blue")]
    #[assoc(shades = &BLUE)]
    Blue,
    #[assoc(name = "purple")]
    #[assoc(shades = &PURPLE)]
    Purple,
    #[assoc(name = "amber")]
    #[assoc(shades = &AMBER)]
    Amber,
    #[assoc(name = "yellow")]
    #[assoc(shades = &YELLOW)]
    Yellow,
    #[assoc(name = "pink")]
    #[assoc(shades = &PINK)]
    Pink,
}

impl Hue {
    pub const ALL: [Hue; 6] = [
        Hue::Emerald,
        Hue::Blue,
        Hue::Purple,
        Hue::Amber,
        Hue::Yellow,
        Hue::Pink,
    ];

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Hue> {
        Self::ALL.into_iter().find(|hue| hue.name() == name)
    }

    /// The 24-bit hex value of this hue at the given shade.
    pub fn hex(&self, shade: Shade) -> u32 {
        self.shades()[shade.index()]
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lightness step on the palette scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    pub fn value(&self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Shade> {
        Self::ALL.into_iter().find(|shade| shade.value() == value)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
