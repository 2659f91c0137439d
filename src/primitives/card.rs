use gpui::{
    AnyElement, ElementId, Pixels, Rgba, SharedString, StyleRefinement, div, prelude::*, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;
use smallvec::SmallVec;

use crate::{
    ElementIdExt,
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeSurfaceKind},
    utils::hover_transition,
};

/// A bordered panel that lifts and brightens its border while hovered.
///
/// Children can react to the same hover through [`Card::hover_group`] and
/// gpui's `group_hover`.
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    surface: ThemeSurfaceKind,
    corner_radius: ThemeLayoutCornerRadiiKind,
    lift: Pixels,
    hover_border: Option<Rgba>,
    hover_group: Option<SharedString>,
    children: SmallVec<[AnyElement; 4]>,
    style: StyleRefinement,
}

impl Card {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            surface: ThemeSurfaceKind::Card,
            corner_radius: ThemeLayoutCornerRadiiKind::Xl,
            lift: px(5.),
            hover_border: None,
            hover_group: None,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn surface(mut self, surface: ThemeSurfaceKind) -> Self {
        self.surface = surface;
        self
    }

    pub fn corner_radius(mut self, corner_radius: ThemeLayoutCornerRadiiKind) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// How far the card rises while hovered. Zero disables the lift.
    pub fn lift(mut self, lift: Pixels) -> Self {
        self.lift = lift;
        self
    }

    /// Border color while hovered, in place of the theme's hover border.
    pub fn hover_border(mut self, color: impl Into<Rgba>) -> Self {
        self.hover_border = Some(color.into());
        self
    }

    pub fn hover_group(mut self, group: impl Into<SharedString>) -> Self {
        self.hover_group = Some(group.into());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let background_color = self.surface.resolve(cx);
        let corner_radius = self.corner_radius.resolve(cx);
        let border_color = cx.get_theme().colors.border.subtle;
        let border_hover_color = self
            .hover_border
            .unwrap_or(cx.get_theme().colors.border.hover);

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let hover_delta = *hover_transition(self.id.clone(), window, cx, is_hover).evaluate(window, cx);

        div()
            .id(self.id)
            .relative()
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .when_some(self.hover_group, |this, group| this.group(group))
            .top(-(self.lift * hover_delta))
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border_color.lerp(&border_hover_color, hover_delta)),
            )
            .children(self.children)
            .on_hover(move |hover, _window, cx| {
                is_hover_state.update(cx, |this, _cx| *this = *hover);
                cx.notify(is_hover_state.entity_id());
            })
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Card {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}
