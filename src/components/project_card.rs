use gpui::{ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, div, px};

use crate::{
    ElementIdExt,
    assets::IconKind,
    components::Icon,
    content::{ProjectEntry, ProjectStat},
    primitives::{Card, Reveal},
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTextSizeKind},
    utils::{GradientExt, RgbaExt},
};

const STATS_PER_ROW: usize = 2;

/// A project card: gradient header strip, title, description, tech tags and
/// an optional grid of headline numbers.
#[derive(IntoElement)]
pub struct ProjectCard {
    id: ElementId,
    entry: ProjectEntry,
}

impl ProjectCard {
    pub fn new(id: impl Into<ElementId>, entry: ProjectEntry) -> Self {
        Self {
            id: id.into(),
            entry,
        }
    }

    /// Rows of stat tiles, two per row, in input order.
    ///
    /// Returns `None` when the project has no stats, in which case no grid
    /// is drawn at all.
    pub fn stats_grid(&self) -> Option<impl Iterator<Item = &[ProjectStat]>> {
        if self.entry.stats.is_empty() {
            return None;
        }

        Some(self.entry.stats.chunks(STATS_PER_ROW))
    }

    /// Glyph drawn at the trailing edge of the title row.
    pub fn header_icon(&self) -> IconKind {
        IconKind::Github
    }

    fn hover_group(&self) -> SharedString {
        SharedString::from(format!("project-card:{}", self.entry.title))
    }
}

impl RenderOnce for ProjectCard {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();
        let bundle = self.entry.color.bundle();
        let group = self.hover_group();
        let corner_radius = ThemeLayoutCornerRadiiKind::Xl.resolve(cx);
        let padding_sm = ThemeLayoutPaddingKind::Sm.resolve(cx);
        let padding_md = ThemeLayoutPaddingKind::Md.resolve(cx);
        let padding_lg = ThemeLayoutPaddingKind::Lg.resolve(cx);
        let mono_family = theme.layout.text.mono_font.primary_family();
        let heading_weight = theme.layout.text.default_font.weights.heading();
        let colors = &theme.colors;
        let accent_text = bundle.text.rgba();

        let tags = self.entry.tech.iter().map(|tag| {
            div()
                .px(padding_sm * 1.5)
                .py(px(4.))
                .rounded(ThemeLayoutCornerRadiiKind::Md.resolve(cx))
                .bg(colors.surface.chip)
                .border_1()
                .border_color(colors.border.hover.fade(0.5))
                .font_family(mono_family.clone())
                .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                .text_color(colors.text.chip)
                .child(tag.clone())
        });

        let stats = self.stats_grid().map(|rows| {
            div()
                .flex()
                .flex_col()
                .gap(padding_md)
                .pt(padding_lg)
                .border_t_1()
                .border_color(colors.border.subtle)
                .children(rows.map(|row| {
                    div().flex().gap(padding_md).children(row.iter().map(|stat| {
                        div()
                            .flex_1()
                            .p(padding_sm * 1.5)
                            .rounded(ThemeLayoutCornerRadiiKind::Lg.resolve(cx))
                            .bg(colors.surface.tile)
                            .border_1()
                            .border_color(colors.border.faint)
                            .child(
                                div()
                                    .text_size(ThemeTextSizeKind::HeadingMd.resolve(cx))
                                    .font_weight(heading_weight)
                                    .text_color(accent_text)
                                    .child(stat.value.clone()),
                            )
                            .child(
                                div()
                                    .font_family(mono_family.clone())
                                    .text_size(ThemeTextSizeKind::Micro.resolve(cx))
                                    .text_color(colors.text.muted)
                                    .child(stat.label.to_uppercase()),
                            )
                    }))
                }))
        });

        Reveal::new(self.id.with_suffix("reveal")).h_full().child(
            Card::new(self.id.with_suffix("card"))
                .hover_group(group.clone())
                .hover_border(colors.border.strong)
                .h_full()
                .flex()
                .flex_col()
                .child(
                    div()
                        .h(px(4.))
                        .w_full()
                        .rounded_t(corner_radius)
                        .bg(bundle.gradient.background(90.)),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .flex_1()
                        .gap(padding_md)
                        .p(padding_lg + px(4.))
                        .child(
                            div()
                                .flex()
                                .items_start()
                                .justify_between()
                                .gap(padding_sm)
                                .child(
                                    div()
                                        .text_size(ThemeTextSizeKind::HeadingMd.resolve(cx))
                                        .font_weight(heading_weight)
                                        .text_color(colors.text.primary)
                                        .group_hover(group, |style| style.text_color(accent_text))
                                        .child(self.entry.title.clone()),
                                )
                                .child(
                                    Icon::new(self.header_icon())
                                        .size(px(18.))
                                        .color(colors.text.faint)
                                        .flex_shrink_0(),
                                ),
                        )
                        .child(
                            div()
                                .flex_1()
                                .text_size(ThemeTextSizeKind::Body.resolve(cx))
                                .text_color(colors.text.secondary)
                                .child(self.entry.description.clone()),
                        )
                        .child(div().flex().flex_wrap().gap(padding_sm).children(tags))
                        .children(stats),
                ),
        )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use folio_palette::ColorToken;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    fn stat(value: &'static str, label: &'static str) -> ProjectStat {
        ProjectStat {
            value: value.into(),
            label: label.into(),
        }
    }

    fn entry(stats: Vec<ProjectStat>) -> ProjectEntry {
        ProjectEntry {
            title: "Rate Limiter Middleware".into(),
            description: "Fixed window rate limiting.".into(),
            tech: vec!["Node.js".into(), "Redis".into()],
            stats,
            color: ColorToken::Purple,
        }
    }

    #[gpui::test]
    fn test_header_shows_github_glyph(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let card = ProjectCard::new("project", entry(Vec::new()));
            assert_eq!(card.header_icon(), IconKind::Github);
        });
    }

    #[gpui::test]
    fn test_empty_stats_draw_no_grid(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let card = ProjectCard::new("project", entry(Vec::new()));
            assert!(card.stats_grid().is_none());
        });
    }

    #[gpui::test]
    fn test_stats_grid_keeps_pairs_in_order(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let stats = vec![stat("500+", "Req/Sec"), stat("10k+", "Simulated Req")];
            let card = ProjectCard::new("project", entry(stats.clone()));

            let rows: Vec<&[ProjectStat]> = card.stats_grid().unwrap().collect();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0], stats.as_slice());
        });
    }

    #[gpui::test]
    fn test_single_stat_is_one_tile(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let card = ProjectCard::new("project", entry(vec![stat("500+", "Req/Sec")]));

            let tiles: Vec<&ProjectStat> = card.stats_grid().unwrap().flatten().collect();
            assert_eq!(tiles.len(), 1);
            assert_eq!(tiles[0].value.as_ref(), "500+");
            assert_eq!(tiles[0].label.as_ref(), "Req/Sec");
        });
    }

    #[gpui::test]
    fn test_stats_grid_wraps_after_two(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let stats = vec![stat("1", "A"), stat("2", "B"), stat("3", "C")];
            let card = ProjectCard::new("project", entry(stats.clone()));

            let tiles: Vec<&ProjectStat> = card.stats_grid().unwrap().flatten().collect();
            assert_eq!(tiles.len(), stats.len(), "One tile per stat");
            assert!(tiles.iter().zip(&stats).all(|(tile, stat)| *tile == stat));

            let row_lengths: Vec<usize> = card.stats_grid().unwrap().map(|row| row.len()).collect();
            assert_eq!(row_lengths, vec![2, 1]);
        });
    }

    #[gpui::test]
    fn test_project_card_renders_in_window(cx: &mut TestAppContext) {
        use crate::theme::Theme;

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ProjectTestView {
                    with_stats: entry(vec![stat("Real-time", "Latency")]),
                    without_stats: entry(Vec::new()),
                })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct ProjectTestView {
        with_stats: ProjectEntry,
        without_stats: ProjectEntry,
    }

    impl gpui::Render for ProjectTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(ProjectCard::new("with-stats", self.with_stats.clone()))
                .child(ProjectCard::new("without-stats", self.without_stats.clone()))
        }
    }
}
