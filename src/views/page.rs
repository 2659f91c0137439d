use std::ops::Range;

use enum_assoc::Assoc;
use gpui::{
    AnyElement, App, Context, Div, ElementId, FontWeight, HighlightStyle, InteractiveElement, IntoElement,
    ObjectFit, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled,
    StyledImage, StyledText, Window, div, img, px,
};

use crate::{
    ElementIdExt,
    assets::IconKind,
    components::{
        ContactButton, EducationCard, ExperienceCard, FooterLink, Icon, ProgressBar, ProjectCard,
        SectionHeading, SkillGroupCard, StatBadge,
    },
    content::{BioSpan, Portfolio},
    primitives::{Card, Reveal},
    theme::{ThemeExt, ThemeLayoutPaddingKind, ThemeTextSizeKind},
    utils::RgbaExt,
    views::ScrollProgress,
};

const PHOTO_SIZE: f32 = 256.;

/// The blocks of the page, in the order they are laid out in the scroll
/// container.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn index(&self) -> usize)]
#[func(pub fn nav_label(&self) -> Option<&'static str>)]
pub enum Section {
    #[assoc(index = 0)]
    #[assoc(nav_label = "About")]
    Hero,
    #[assoc(index = 1)]
    Stats,
    #[assoc(index = 2)]
    #[assoc(nav_label = "Experience")]
    Experience,
    #[assoc(index = 3)]
    #[assoc(nav_label = "Projects")]
    Projects,
    #[assoc(index = 4)]
    #[assoc(nav_label = "Skills")]
    Skills,
    #[assoc(index = 5)]
    Education,
    #[assoc(index = 6)]
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Stats,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Footer,
    ];

    /// Sections linked from the navigation bar, with their labels.
    pub fn nav_items() -> impl Iterator<Item = (Section, &'static str)> {
        Self::ALL
            .into_iter()
            .filter_map(|section| section.nav_label().map(|label| (section, label)))
    }
}

/// The whole portfolio: navigation bar, scroll progress and every section.
pub struct PortfolioPage {
    portfolio: Portfolio,
    scroll: ScrollProgress,
}

impl PortfolioPage {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            scroll: ScrollProgress::new(),
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn scroll_fraction(&self) -> f32 {
        self.scroll.fraction()
    }

    /// Scrolls the page so `section` sits just below the navigation bar.
    pub fn scroll_to(&mut self, section: Section, _window: &mut Window, cx: &mut Context<Self>) {
        let inset = cx.get_theme().layout.spacing.nav_height;

        if self.scroll.scroll_to_item(section.index(), inset) {
            tracing::debug!(?section, "scrolled to section");
        } else {
            tracing::debug!(?section, "section has not been laid out yet");
        }

        cx.notify();
    }

    fn render_section(&self, section: Section, cx: &mut Context<Self>) -> AnyElement {
        match section {
            Section::Hero => self.render_hero(cx).into_any_element(),
            Section::Stats => self.render_stats(cx).into_any_element(),
            Section::Experience => self.render_experience(cx).into_any_element(),
            Section::Projects => self.render_projects(cx).into_any_element(),
            Section::Skills => self.render_skills(cx).into_any_element(),
            Section::Education => self.render_education(cx).into_any_element(),
            Section::Footer => self.render_footer(cx).into_any_element(),
        }
    }

    fn render_nav(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.get_theme();
        let colors = &theme.colors;
        let profile = &self.portfolio.profile;
        let initials = profile.initials.clone();
        let initials_color = colors.text.primary;
        let mono_family = theme.layout.text.mono_font.primary_family();
        let link_hover_color = colors.text.primary;

        let links = Section::nav_items().map(|(section, label)| {
            div()
                .id(SharedString::from(format!("nav:{label}")))
                .cursor_pointer()
                .text_color(colors.text.secondary)
                .hover(|style| style.text_color(link_hover_color))
                .child(label)
                .on_click(cx.listener(move |this, _event, window, cx| {
                    this.scroll_to(section, window, cx)
                }))
        });

        div()
            .absolute()
            .top_0()
            .left_0()
            .right_0()
            .h(theme.layout.spacing.nav_height)
            .flex()
            .justify_center()
            .bg(colors.surface.nav)
            .border_b_1()
            .border_color(colors.border.subtle)
            .child(
                content_frame(cx)
                    .h_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        img(profile.logo.clone())
                            .h(px(40.))
                            .object_fit(ObjectFit::Contain)
                            .with_fallback(move || {
                                div()
                                    .font_family(mono_family.clone())
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(initials_color)
                                    .child(initials.clone())
                                    .into_any_element()
                            }),
                    )
                    .child(
                        div()
                            .flex()
                            .gap(ThemeLayoutPaddingKind::Xl.resolve(cx))
                            .text_size(ThemeTextSizeKind::Body.resolve(cx))
                            .font_weight(theme.layout.text.default_font.weights.label())
                            .children(links),
                    ),
            )
    }

    fn render_hero(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.get_theme();
        let colors = &theme.colors;
        let profile = &self.portfolio.profile;
        let status = colors.accents.status.bundle();
        let padding_sm = ThemeLayoutPaddingKind::Sm.resolve(cx);
        let padding_md = ThemeLayoutPaddingKind::Md.resolve(cx);
        let mono_family = theme.layout.text.mono_font.primary_family();
        let display_weight = theme.layout.text.default_font.weights.display();

        let (bio, emphasis) = bio_text(&profile.bio);
        let emphasis_style = HighlightStyle {
            color: Some(colors.text.primary.into()),
            font_weight: Some(theme.layout.text.default_font.weights.label()),
            ..Default::default()
        };

        let buttons = self.portfolio.links.iter().enumerate().map(|(ix, link)| {
            ContactButton::new(("hero-link", ix), link.clone()).primary(ix == 0)
        });

        let placeholder_color = colors.text.muted;
        let placeholder_background = colors.surface.card;

        section_frame(cx)
            .pt(theme.layout.spacing.nav_height + theme.layout.spacing.section_gap / 2.)
            .child(
                Reveal::new("hero")
                    .flex()
                    .flex_wrap()
                    .items_center()
                    .justify_between()
                    .gap(ThemeLayoutPaddingKind::Xl.resolve(cx))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .flex_1()
                            .min_w(px(320.))
                            .gap(ThemeLayoutPaddingKind::Lg.resolve(cx))
                            .child(
                                div().flex().child(
                                    div()
                                        .flex()
                                        .items_center()
                                        .gap(padding_sm)
                                        .px(padding_sm * 1.5)
                                        .py(px(4.))
                                        .rounded_full()
                                        .bg(status.background_light.rgba())
                                        .border_1()
                                        .border_color(status.border.rgba().fade(0.2))
                                        .font_family(mono_family.clone())
                                        .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                                        .text_color(status.text.rgba())
                                        .child(
                                            div()
                                                .size(px(8.))
                                                .rounded_full()
                                                .bg(status.background.rgba()),
                                        )
                                        .child(profile.availability.clone()),
                                ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .text_size(ThemeTextSizeKind::Display.resolve(cx))
                                    .font_weight(display_weight)
                                    .line_height(px(68.))
                                    .text_color(colors.text.primary)
                                    .child(profile.headline.lead.clone())
                                    .child(
                                        div()
                                            .text_color(colors.accents.headline.from.rgba())
                                            .child(profile.headline.highlight.clone()),
                                    )
                                    .child(profile.headline.trail.clone()),
                            )
                            .child(
                                div()
                                    .max_w(px(640.))
                                    .text_size(ThemeTextSizeKind::BodyLg.resolve(cx))
                                    .text_color(colors.text.secondary)
                                    .child(StyledText::new(bio).with_highlights(
                                        emphasis.into_iter().map(|range| (range, emphasis_style)),
                                    )),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_wrap()
                                    .gap(padding_md)
                                    .pt(padding_md)
                                    .children(buttons),
                            ),
                    )
                    .child(
                        div()
                            .relative()
                            .flex_shrink_0()
                            .size(px(PHOTO_SIZE))
                            .rounded_full()
                            .border_4()
                            .border_color(colors.border.subtle)
                            .child(
                                img(profile.photo.clone())
                                    .size_full()
                                    .rounded_full()
                                    .object_fit(ObjectFit::Cover)
                                    .with_fallback(move || {
                                        div()
                                            .size_full()
                                            .rounded_full()
                                            .flex()
                                            .items_center()
                                            .justify_center()
                                            .bg(placeholder_background)
                                            .child(
                                                Icon::new(IconKind::User)
                                                    .size(px(PHOTO_SIZE / 4.))
                                                    .color(placeholder_color),
                                            )
                                            .into_any_element()
                                    }),
                            )
                            .child(
                                div()
                                    .absolute()
                                    .bottom(px(12.))
                                    .right(px(12.))
                                    .flex()
                                    .items_center()
                                    .gap(px(6.))
                                    .px(padding_sm * 1.5)
                                    .py(px(4.))
                                    .rounded_full()
                                    .bg(colors.surface.button)
                                    .border_1()
                                    .border_color(colors.border.hover)
                                    .font_family(mono_family)
                                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                                    .text_color(colors.text.body)
                                    .child(
                                        div()
                                            .size(px(8.))
                                            .rounded_full()
                                            .bg(status.background.rgba()),
                                    )
                                    .child(profile.status.clone()),
                            ),
                    ),
            )
    }

    fn render_stats(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let stats = self
            .portfolio
            .stats
            .iter()
            .enumerate()
            .map(|(ix, stat)| StatBadge::new(("stat", ix), stat.clone()));

        section_frame(cx).child(
            div()
                .flex()
                .flex_wrap()
                .gap(ThemeLayoutPaddingKind::Md.resolve(cx))
                .children(stats),
        )
    }

    fn render_experience(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.get_theme();
        let entries = self
            .portfolio
            .experience
            .iter()
            .enumerate()
            .map(|(ix, entry)| ExperienceCard::new(("experience", ix), entry.clone()));

        section_frame(cx)
            .child(
                SectionHeading::from_entry(
                    "heading:experience",
                    &self.portfolio.headings.experience,
                ),
            )
            .child(
                div()
                    .ml(px(12.))
                    .border_l_1()
                    .border_color(theme.colors.border.subtle)
                    .flex()
                    .flex_col()
                    .gap(ThemeLayoutPaddingKind::Xl.resolve(cx) * 1.5)
                    .children(entries),
            )
    }

    fn render_projects(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let gap = ThemeLayoutPaddingKind::Lg.resolve(cx);
        let rows = self
            .portfolio
            .projects
            .chunks(2)
            .enumerate()
            .map(|(row, projects)| {
                div().flex().gap(gap).children(projects.iter().enumerate().map(
                    |(column, project)| {
                        div().flex_1().child(ProjectCard::new(
                            ("project", row * 2 + column),
                            project.clone(),
                        ))
                    },
                ))
            });

        section_frame(cx)
            .child(
                SectionHeading::from_entry("heading:projects", &self.portfolio.headings.projects),
            )
            .child(div().flex().flex_col().gap(gap).children(rows))
    }

    fn render_skills(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let gap = ThemeLayoutPaddingKind::Xl.resolve(cx);
        let columns = self.portfolio.skills.iter().enumerate().map(|(column, groups)| {
            div()
                .flex()
                .flex_col()
                .flex_1()
                .gap(gap)
                .children(groups.iter().map(|(title, group)| {
                    SkillGroupCard::new(
                        skill_group_id(column, title),
                        title.clone(),
                        group.clone(),
                    )
                }))
        });

        section_frame(cx)
            .child(
                SectionHeading::from_entry("heading:skills", &self.portfolio.headings.skills),
            )
            .child(
                Card::new("skills")
                    .lift(px(0.))
                    .flex()
                    .flex_wrap()
                    .gap(gap)
                    .p(gap)
                    .children(columns),
            )
    }

    fn render_education(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let entries = self
            .portfolio
            .education
            .iter()
            .enumerate()
            .map(|(ix, entry)| EducationCard::new(("education", ix), entry.clone()));

        section_frame(cx)
            .child(
                SectionHeading::from_entry(
                    "heading:education",
                    &self.portfolio.headings.education,
                ),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap(ThemeLayoutPaddingKind::Lg.resolve(cx))
                    .children(entries),
            )
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.get_theme();
        let links = self
            .portfolio
            .links
            .iter()
            .enumerate()
            .map(|(ix, link)| FooterLink::new(("footer-link", ix), link.clone()));

        div()
            .w_full()
            .mt(theme.layout.spacing.section_gap / 2.)
            .flex()
            .justify_center()
            .border_t_1()
            .border_color(theme.colors.border.subtle)
            .child(
                content_frame(cx)
                    .py(ThemeLayoutPaddingKind::Xl.resolve(cx))
                    .flex()
                    .flex_wrap()
                    .items_center()
                    .justify_between()
                    .gap(ThemeLayoutPaddingKind::Md.resolve(cx))
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::Body.resolve(cx))
                            .text_color(theme.colors.text.faint)
                            .child(self.portfolio.profile.credit.clone()),
                    )
                    .child(
                        div()
                            .flex()
                            .gap(ThemeLayoutPaddingKind::Lg.resolve(cx))
                            .children(links),
                    ),
            )
    }
}

impl Render for PortfolioPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        crate::init_for_window(window, cx);

        let sections = Section::ALL.map(|section| self.render_section(section, cx));
        let nav = self.render_nav(cx);
        let fraction = self.scroll.fraction();
        let theme = cx.get_theme();

        div()
            .relative()
            .size_full()
            .bg(theme.colors.surface.page)
            .font_family(theme.layout.text.default_font.primary_family())
            .line_height(theme.layout.text.default_font.line_height)
            .text_color(theme.colors.text.body)
            .child(
                div()
                    .id("page:scroll")
                    .size_full()
                    .flex()
                    .flex_col()
                    .items_center()
                    .overflow_y_scroll()
                    .track_scroll(self.scroll.handle())
                    .on_scroll_wheel(cx.listener(|_this, _event, _window, cx| cx.notify()))
                    .children(sections),
            )
            .child(nav)
            .child(ProgressBar::new(fraction))
    }
}

/// Width-limited content with vertical breathing room between sections.
fn section_frame(cx: &App) -> Div {
    content_frame(cx).py(cx.get_theme().layout.spacing.section_gap / 4.)
}

fn content_frame(cx: &App) -> Div {
    div()
        .w_full()
        .max_w(cx.get_theme().layout.spacing.content_max_width)
        .px(ThemeLayoutPaddingKind::Lg.resolve(cx))
}

/// Keys a skill group by its column and title, which are unique together.
fn skill_group_id(column: usize, title: &SharedString) -> ElementId {
    ElementId::from(("skill-column", column)).with_suffix(title.clone())
}

/// Joins the bio spans into one string, returning the byte ranges of the
/// emphasized spans.
pub fn bio_text(spans: &[BioSpan]) -> (SharedString, Vec<Range<usize>>) {
    let mut text = String::new();
    let mut emphasis = Vec::new();

    for span in spans {
        let start = text.len();
        text.push_str(&span.text);

        if span.emphasis {
            emphasis.push(start..text.len());
        }
    }

    (text.into(), emphasis)
}
