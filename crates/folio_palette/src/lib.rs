//! Accent palette and the total color-token resolver.
//!
//! Every visual component asks this crate for a [`ThemeBundle`] by name.
//! Lookup never fails: names outside the palette resolve to the default
//! bundle.

mod hue;
pub use hue::*;

mod color_ref;
pub use color_ref::*;

mod token;
pub use token::*;
