use folio_palette::ColorToken;
use gpui::{ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div};

use crate::{
    assets::IconKind,
    components::IconTile,
    content::SectionHeadingEntry,
    primitives::{Reveal, RevealFrom},
    theme::{ThemeExt, ThemeLayoutPaddingKind, ThemeTextSizeKind},
};

/// A section title with a tinted icon tile, sliding in from the left the
/// first time it scrolls into view.
#[derive(IntoElement)]
pub struct SectionHeading {
    id: ElementId,
    title: SharedString,
    icon: IconKind,
    color: ColorToken,
}

impl SectionHeading {
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>, icon: IconKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon,
            color: ColorToken::default(),
        }
    }

    /// A heading as authored in content.
    pub fn from_entry(id: impl Into<ElementId>, entry: &SectionHeadingEntry) -> Self {
        Self::new(id, entry.title.clone(), entry.icon).color(entry.color)
    }

    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }
}

impl RenderOnce for SectionHeading {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let font = &cx.get_theme().layout.text.default_font;
        let font_weight = font.weights.heading();
        let text_color = cx.get_theme().colors.text.primary;

        Reveal::new(self.id)
            .from(RevealFrom::Left)
            .mb(ThemeLayoutPaddingKind::Xl.resolve(cx))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(ThemeLayoutPaddingKind::Sm.resolve(cx) * 1.5)
                    .child(IconTile::new(self.icon).color(self.color))
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::HeadingLg.resolve(cx))
                            .font_weight(font_weight)
                            .text_color(text_color)
                            .child(self.title),
                    ),
            )
    }
}
