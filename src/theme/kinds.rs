#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
pub enum ThemeTextSizeKind {
    /// Hero headline.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.display)]
    Display,
    /// Section titles.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    HeadingLg,
    /// Card titles.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    HeadingMd,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_sm)]
    HeadingSm,
    /// Lead paragraph text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body_lg)]
    BodyLg,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    Body,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    Caption,
    /// Tile labels.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.micro)]
    Micro,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Corner radius variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Surface fills for stacked panels.
///
/// `next()` gives the surface used for elements nested inside this one.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeSurfaceKind)]
pub enum ThemeSurfaceKind {
    /// Page background.
    #[assoc(resolve = cx.get_theme().colors.surface.page)]
    #[assoc(next = ThemeSurfaceKind::Card)]
    Page,
    /// Standard card fill.
    #[assoc(resolve = cx.get_theme().colors.surface.card)]
    #[assoc(next = ThemeSurfaceKind::Tile)]
    Card,
    /// Low-emphasis card fill.
    #[assoc(resolve = cx.get_theme().colors.surface.card_faint)]
    #[assoc(next = ThemeSurfaceKind::Tile)]
    CardFaint,
    /// Recessed tile inside a card.
    #[assoc(resolve = cx.get_theme().colors.surface.tile)]
    #[assoc(next = ThemeSurfaceKind::Chip)]
    Tile,
    /// Tag chips.
    #[assoc(resolve = cx.get_theme().colors.surface.chip)]
    #[assoc(next = ThemeSurfaceKind::Chip)]
    Chip,
}
