use std::time::Duration;

use gpui::{
    AnyElement, App, ElementId, Pixels, StyleRefinement, Window, canvas, div, prelude::*, px,
};
use smallvec::SmallVec;

use crate::{
    ElementIdExt,
    utils::{intersects_viewport, reveal_transition},
};

/// Where a [`Reveal`] slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    Left,
    #[default]
    Below,
}

/// Fades and slides its children in the first time they scroll into view.
///
/// The revealed flag is keyed element state, so once an element has been
/// shown it stays shown for the lifetime of the window.
#[derive(IntoElement)]
pub struct Reveal {
    id: ElementId,
    from: RevealFrom,
    distance: Pixels,
    duration: Duration,
    on_reveal: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl Reveal {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            from: RevealFrom::default(),
            distance: px(20.),
            duration: Duration::from_millis(600),
            on_reveal: None,
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn from(mut self, from: RevealFrom) -> Self {
        self.from = from;
        self
    }

    /// How far the content travels while fading in.
    pub fn distance(mut self, distance: Pixels) -> Self {
        self.distance = distance;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Called once, in the frame the content first enters the viewport.
    pub fn on_reveal(mut self, on_reveal: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_reveal = Some(Box::new(on_reveal));
        self
    }
}

impl RenderOnce for Reveal {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let revealed_state = window.use_keyed_state(
            self.id.with_suffix("state:revealed"),
            cx,
            |_window, _cx| false,
        );
        let is_revealed = *revealed_state.read(cx);

        let progress =
            *reveal_transition(self.id.clone(), window, cx, self.duration, is_revealed)
                .evaluate(window, cx);
        let offset = self.distance * (1. - progress);
        let on_reveal = self.on_reveal;

        div()
            .id(self.id)
            .relative()
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .opacity(progress)
            .map(|this| match self.from {
                RevealFrom::Left => this.left(-offset),
                RevealFrom::Below => this.top(offset),
            })
            .when(!is_revealed, |this| {
                this.child(
                    canvas(
                        move |bounds, window, cx| {
                            if intersects_viewport(bounds, window.viewport_size()) {
                                revealed_state.update(cx, |this, _cx| *this = true);
                                cx.notify(revealed_state.entity_id());

                                if let Some(on_reveal) = on_reveal.as_ref() {
                                    on_reveal(window, cx);
                                }
                            }
                        },
                        |_bounds, _, _window, _cx| {},
                    )
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full(),
                )
            })
            .children(self.children)
    }
}

impl ParentElement for Reveal {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Reveal {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_reveal_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let reveal = Reveal::new("reveal");
            assert_eq!(reveal.from, RevealFrom::Below);
            assert_eq!(reveal.distance, px(20.));
            assert!(reveal.children.is_empty());
        });
    }

    #[gpui::test]
    fn test_reveal_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let reveal = Reveal::new("reveal")
                .from(RevealFrom::Left)
                .distance(px(40.))
                .duration(Duration::from_millis(200))
                .child(div())
                .child(div());

            assert_eq!(reveal.from, RevealFrom::Left);
            assert_eq!(reveal.distance, px(40.));
            assert_eq!(reveal.duration, Duration::from_millis(200));
            assert_eq!(reveal.children.len(), 2);
        });
    }

    #[gpui::test]
    fn test_reveal_is_one_shot(cx: &mut TestAppContext) {
        use std::{cell::Cell, rc::Rc};

        use crate::theme::{Theme, ThemeExt};
        use gpui::{ScrollHandle, point};

        let reveals = Rc::new(Cell::new(0));
        let scroll = ScrollHandle::new();

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let reveals = reveals.clone();
            let scroll = scroll.clone();
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| RevealTestView { reveals, scroll })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        let scroll_to = |y: f32, cx: &mut VisualTestContext| {
            scroll.set_offset(point(px(0.), px(-y)));
            cx.update(|window, _cx| window.refresh());
            cx.run_until_parked();
        };

        cx.run_until_parked();
        assert_eq!(reveals.get(), 0, "Content below the fold stays hidden");

        scroll_to(SPACER, &mut cx);
        assert_eq!(reveals.get(), 1, "Scrolling into view reveals the content");

        scroll_to(0., &mut cx);
        scroll_to(SPACER, &mut cx);
        assert_eq!(reveals.get(), 1, "Revealing happens only once");
    }

    const SPACER: f32 = 4000.;

    struct RevealTestView {
        reveals: std::rc::Rc<std::cell::Cell<usize>>,
        scroll: gpui::ScrollHandle,
    }

    impl gpui::Render for RevealTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let reveals = self.reveals.clone();

            div()
                .id("scroll")
                .size_full()
                .flex()
                .flex_col()
                .overflow_y_scroll()
                .track_scroll(&self.scroll)
                .child(div().flex_shrink_0().h(px(SPACER)))
                .child(
                    Reveal::new("reveal")
                        .from(RevealFrom::Left)
                        .flex_shrink_0()
                        .h(px(40.))
                        .on_reveal(move |_window, _cx| reveals.set(reveals.get() + 1))
                        .child("Hello"),
                )
                .child(div().flex_shrink_0().h(px(SPACER)))
        }
    }
}
