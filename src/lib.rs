//! A native portfolio viewer built on gpui.
//!
//! Content and theme ship inside the binary; [`views::PortfolioPage`] renders
//! them as a single scrolling page.

pub mod primitives;

pub mod views;

pub mod components;

pub mod content;

pub mod theme;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
