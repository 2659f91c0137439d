use folio_palette::ColorToken;
use gpui::{
    Hsla, IntoElement, Length, ParentElement, Pixels, RenderOnce, SharedString, Styled, div,
    prelude::FluentBuilder, px, svg,
};

use crate::{
    assets::IconKind,
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind},
};

/// A monochrome SVG icon from the bundled set.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Option<Length>,
    color: Option<Hsla>,
    flex_shrink_0: bool,
}

impl Icon {
    pub fn new(icon: IconKind) -> Self {
        Self::from_path(icon.path())
    }

    /// Creates an icon from an arbitrary SVG asset path.
    pub fn from_path(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: None,
            color: None,
            flex_shrink_0: false,
        }
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets a custom color, overriding the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Keeps the icon from shrinking next to wrapping text.
    pub fn flex_shrink_0(mut self) -> Self {
        self.flex_shrink_0 = true;
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.get_theme().colors.text.primary;
        let size = self.size.unwrap_or(px(16.).into());

        svg()
            .path(self.path)
            .text_color(primary_text_color)
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .when_some(self.color, |this, color| this.text_color(color))
            .when(self.flex_shrink_0, |this| this.flex_shrink_0())
    }
}

/// An icon centered on a tinted square, painted from a color token's bundle.
#[derive(IntoElement)]
pub struct IconTile {
    icon: IconKind,
    color: ColorToken,
    size: Pixels,
}

impl IconTile {
    pub fn new(icon: IconKind) -> Self {
        Self {
            icon,
            color: ColorToken::default(),
            size: px(40.),
        }
    }

    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Outer edge length. The icon takes half of it.
    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for IconTile {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let bundle = self.color.bundle();
        let corner_radius = ThemeLayoutCornerRadiiKind::Lg.resolve(cx);

        div()
            .flex()
            .flex_shrink_0()
            .items_center()
            .justify_center()
            .size(self.size)
            .rounded(corner_radius)
            .bg(bundle.background_light.rgba())
            .child(
                Icon::new(self.icon)
                    .size(self.size / 2.)
                    .color(bundle.text.rgba()),
            )
    }
}
