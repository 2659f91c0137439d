use gpui::{ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div, px};

use crate::{
    ElementIdExt,
    assets::IconKind,
    components::Icon,
    content::ExperienceEntry,
    primitives::{Card, Reveal},
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTextSizeKind},
};

const MARKER_SIZE: f32 = 12.;

/// One node on the experience timeline: a marker dot in the entry's accent
/// and a card listing the role and its bullet points.
#[derive(IntoElement)]
pub struct ExperienceCard {
    id: ElementId,
    entry: ExperienceEntry,
}

impl ExperienceCard {
    pub fn new(id: impl Into<ElementId>, entry: ExperienceEntry) -> Self {
        Self {
            id: id.into(),
            entry,
        }
    }

    /// The bullet rows in display order, each with its leading glyph.
    pub fn bullets(&self) -> impl Iterator<Item = (IconKind, &SharedString)> {
        self.entry
            .points
            .iter()
            .map(|point| (IconKind::ChevronRight, point))
    }
}

impl RenderOnce for ExperienceCard {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();
        let bundle = self.entry.color.bundle();
        let padding_sm = ThemeLayoutPaddingKind::Sm.resolve(cx);
        let padding_md = ThemeLayoutPaddingKind::Md.resolve(cx);
        let padding_lg = ThemeLayoutPaddingKind::Lg.resolve(cx);
        let mono_family = theme.layout.text.mono_font.primary_family();
        let heading_weight = theme.layout.text.default_font.weights.heading();
        let label_weight = theme.layout.text.default_font.weights.label();
        let colors = &theme.colors;

        let bullets = self
            .bullets()
            .map(|(glyph, point)| {
                div()
                    .flex()
                    .items_start()
                    .gap(padding_sm * 1.5)
                    .text_size(ThemeTextSizeKind::Body.resolve(cx))
                    .text_color(colors.text.secondary)
                    .child(
                        Icon::new(glyph)
                            .size(px(16.))
                            .color(bundle.text.rgba())
                            .flex_shrink_0(),
                    )
                    .child(div().flex_1().child(point.clone()))
            })
            .collect::<Vec<_>>();

        Reveal::new(self.id.with_suffix("reveal"))
            .relative()
            .pl(padding_lg + padding_md)
            .child(
                div()
                    .absolute()
                    .left(px(-MARKER_SIZE / 2. - 0.5))
                    .top(px(2.))
                    .size(px(MARKER_SIZE))
                    .rounded_full()
                    .bg(bundle.background.rgba())
                    .border_4()
                    .border_color(colors.surface.page),
            )
            .child(
                Card::new(self.id.with_suffix("card"))
                    .corner_radius(ThemeLayoutCornerRadiiKind::Xl)
                    .hover_border(colors.border.hover)
                    .p(padding_lg)
                    .flex()
                    .flex_col()
                    .gap(padding_md)
                    .child(
                        div()
                            .flex()
                            .flex_wrap()
                            .justify_between()
                            .gap(padding_md)
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .text_size(ThemeTextSizeKind::HeadingMd.resolve(cx))
                                            .font_weight(heading_weight)
                                            .text_color(colors.text.primary)
                                            .child(self.entry.role.clone()),
                                    )
                                    .child(
                                        div()
                                            .text_size(ThemeTextSizeKind::BodyLg.resolve(cx))
                                            .font_weight(label_weight)
                                            .text_color(bundle.text.rgba())
                                            .child(self.entry.company.clone()),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .items_end()
                                    .gap(px(4.))
                                    .child(
                                        div()
                                            .px(padding_sm)
                                            .py(px(4.))
                                            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(cx))
                                            .bg(colors.surface.chip)
                                            .font_family(mono_family)
                                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                                            .text_color(colors.text.secondary)
                                            .child(self.entry.period.clone()),
                                    )
                                    .child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap(px(4.))
                                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                                            .text_color(colors.text.muted)
                                            .child(
                                                Icon::new(IconKind::MapPin)
                                                    .size(px(12.))
                                                    .color(colors.text.muted),
                                            )
                                            .child(self.entry.location.clone()),
                                    ),
                            ),
                    )
                    .child(div().flex().flex_col().gap(padding_sm * 1.5).children(bullets)),
            )
    }
}
