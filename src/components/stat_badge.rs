use gpui::{ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div};

use crate::{
    ElementIdExt,
    components::IconTile,
    content::StatBadgeEntry,
    primitives::{Card, Reveal},
    theme::{ThemeExt, ThemeLayoutPaddingKind, ThemeSurfaceKind, ThemeTextSizeKind},
};

/// A single headline metric: icon, value and a small caps caption.
#[derive(IntoElement)]
pub struct StatBadge {
    id: ElementId,
    entry: StatBadgeEntry,
}

impl StatBadge {
    pub fn new(id: impl Into<ElementId>, entry: StatBadgeEntry) -> Self {
        Self {
            id: id.into(),
            entry,
        }
    }

    /// The label as drawn under the value.
    pub fn caption(&self) -> SharedString {
        self.entry.label.to_uppercase().into()
    }
}

impl RenderOnce for StatBadge {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();
        let caption = self.caption();

        Reveal::new(self.id.with_suffix("reveal")).flex_1().child(
            Card::new(self.id.with_suffix("card"))
                .surface(ThemeSurfaceKind::CardFaint)
                .hover_border(self.entry.color.bundle().border.rgba())
                .flex()
                .flex_col()
                .items_center()
                .gap(ThemeLayoutPaddingKind::Sm.resolve(cx))
                .p(ThemeLayoutPaddingKind::Lg.resolve(cx))
                .child(IconTile::new(self.entry.icon).color(self.entry.color))
                .child(
                    div()
                        .text_size(ThemeTextSizeKind::HeadingLg.resolve(cx))
                        .font_weight(theme.layout.text.default_font.weights.display())
                        .text_color(theme.colors.text.primary)
                        .child(self.entry.value),
                )
                .child(
                    div()
                        .font_family(theme.layout.text.mono_font.primary_family())
                        .text_size(ThemeTextSizeKind::Micro.resolve(cx))
                        .text_color(theme.colors.text.muted)
                        .child(caption),
                ),
        )
    }
}
