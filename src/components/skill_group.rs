use gpui::{
    ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    div, px,
};

use crate::{
    ElementIdExt,
    content::SkillGroup,
    primitives::Reveal,
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTextSizeKind},
    utils::RgbaExt,
};

/// A titled cluster of skill chips.
///
/// Groups with an accent tint every chip from that accent's bundle.
/// Neutral chips pick up an amber border on hover.
#[derive(IntoElement)]
pub struct SkillGroupCard {
    id: ElementId,
    title: SharedString,
    group: SkillGroup,
}

impl SkillGroupCard {
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>, group: SkillGroup) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            group,
        }
    }

    pub fn is_accented(&self) -> bool {
        self.group.accent.is_some()
    }
}

impl RenderOnce for SkillGroupCard {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();
        let colors = &theme.colors;
        let padding_sm = ThemeLayoutPaddingKind::Sm.resolve(cx);
        let chip_radius = ThemeLayoutCornerRadiiKind::Md.resolve(cx);
        let chip_text_size = ThemeTextSizeKind::Body.resolve(cx);
        let neutral_hover_border = folio_palette::ColorToken::Amber
            .bundle()
            .border
            .rgba()
            .fade(0.5);
        let accent = self.group.accent.map(|token| token.bundle());

        let chips = self.group.skills.into_iter().map(|skill| {
            let chip = div()
                .px(padding_sm * 1.5)
                .py(px(6.))
                .rounded(chip_radius)
                .border_1()
                .text_size(chip_text_size);

            let chip = match accent {
                Some(bundle) => chip
                    .bg(bundle.background_light.rgba())
                    .border_color(bundle.border.rgba().fade(0.2))
                    .text_color(bundle.text.rgba()),
                None => chip
                    .bg(colors.surface.button)
                    .border_color(colors.border.subtle)
                    .text_color(colors.text.chip)
                    .hover(|style| style.border_color(neutral_hover_border)),
            };

            chip.child(skill)
        });

        Reveal::new(self.id.with_suffix("reveal"))
            .flex()
            .flex_col()
            .gap(ThemeLayoutPaddingKind::Md.resolve(cx))
            .child(
                div()
                    .font_family(theme.layout.text.mono_font.primary_family())
                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                    .text_color(match accent {
                        Some(bundle) => bundle.text.rgba(),
                        None => colors.text.muted,
                    })
                    .child(self.title),
            )
            .child(div().flex().flex_wrap().gap(padding_sm).children(chips))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use folio_palette::ColorToken;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    fn group(accent: Option<ColorToken>) -> SkillGroup {
        SkillGroup {
            skills: vec!["RAG Pipelines".into(), "OCR".into()],
            accent,
        }
    }

    #[gpui::test]
    fn test_skill_group_accent(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let neutral = SkillGroupCard::new("skills", "LANGUAGES", group(None));
            assert!(!neutral.is_accented());

            let accented =
                SkillGroupCard::new("skills", "AI SPECIALIZATIONS", group(Some(ColorToken::Purple)));
            assert!(accented.is_accented());
            assert_eq!(accented.title, SharedString::from("AI SPECIALIZATIONS"));
        });
    }

    #[gpui::test]
    fn test_skill_group_renders_in_window(cx: &mut TestAppContext) {
        use crate::theme::Theme;

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| SkillGroupTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct SkillGroupTestView;

    impl gpui::Render for SkillGroupTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(SkillGroupCard::new("neutral", "LANGUAGES", group(None)))
                .child(SkillGroupCard::new(
                    "accented",
                    "AI SPECIALIZATIONS",
                    group(Some(ColorToken::Purple)),
                ))
        }
    }
}
