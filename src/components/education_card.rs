use gpui::{ElementId, IntoElement, ParentElement, RenderOnce, Styled, div, px};

use crate::{
    ElementIdExt,
    assets::IconKind,
    components::IconTile,
    content::EducationEntry,
    primitives::{Card, Reveal},
    theme::{ThemeExt, ThemeLayoutPaddingKind, ThemeTextSizeKind},
};

#[derive(IntoElement)]
pub struct EducationCard {
    id: ElementId,
    entry: EducationEntry,
}

impl EducationCard {
    pub fn new(id: impl Into<ElementId>, entry: EducationEntry) -> Self {
        Self {
            id: id.into(),
            entry,
        }
    }
}

impl RenderOnce for EducationCard {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();
        let bundle = self.entry.color.bundle();
        let padding_sm = ThemeLayoutPaddingKind::Sm.resolve(cx);
        let mono_family = theme.layout.text.mono_font.primary_family();

        Reveal::new(self.id.with_suffix("reveal")).flex_1().child(
            Card::new(self.id.with_suffix("card"))
                .lift(px(0.))
                .hover_border(bundle.border.rgba())
                .flex()
                .items_start()
                .gap(ThemeLayoutPaddingKind::Md.resolve(cx))
                .p(ThemeLayoutPaddingKind::Lg.resolve(cx))
                .child(
                    IconTile::new(IconKind::BookOpen)
                        .color(self.entry.color)
                        .size(px(48.)),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .flex_1()
                        .gap(px(4.))
                        .child(
                            div()
                                .text_size(ThemeTextSizeKind::HeadingSm.resolve(cx))
                                .font_weight(theme.layout.text.default_font.weights.heading())
                                .text_color(theme.colors.text.primary)
                                .child(self.entry.school),
                        )
                        .child(
                            div()
                                .text_size(ThemeTextSizeKind::Body.resolve(cx))
                                .text_color(theme.colors.text.secondary)
                                .child(self.entry.degree),
                        )
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap(padding_sm * 1.5)
                                .pt(padding_sm)
                                .font_family(mono_family)
                                .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                                .child(
                                    div()
                                        .text_color(theme.colors.text.muted)
                                        .child(self.entry.year),
                                )
                                .child(
                                    div()
                                        .px(padding_sm)
                                        .py(px(2.))
                                        .rounded_full()
                                        .bg(bundle.background_light.rgba())
                                        .text_color(bundle.text.rgba())
                                        .child(self.entry.score),
                                ),
                        ),
                ),
        )
    }
}
