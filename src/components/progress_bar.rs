use gpui::{IntoElement, ParentElement, RenderOnce, Styled, div, relative};

use crate::{
    theme::ThemeExt,
    utils::{GradientExt, remap},
};

/// A thin bar pinned to the top of the window whose fill tracks how far the
/// page has been scrolled.
#[derive(IntoElement)]
pub struct ProgressBar {
    fraction: f32,
}

impl ProgressBar {
    /// `fraction` is clamped to `[0, 1]`.
    pub fn new(fraction: f32) -> Self {
        let fraction = if fraction.is_nan() { 0. } else { fraction.clamp(0., 1.) };
        Self { fraction }
    }

    /// Fill width relative to the bar.
    pub fn fill_width(&self) -> f32 {
        remap(self.fraction, 0., 1., 0., 1.)
    }
}

impl RenderOnce for ProgressBar {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();

        div()
            .absolute()
            .top_0()
            .left_0()
            .right_0()
            .h(theme.layout.spacing.progress_height)
            .child(
                div()
                    .h_full()
                    .w(relative(self.fill_width()))
                    .bg(theme.colors.accents.progress.background(90.)),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_fill_width(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(ProgressBar::new(0.).fill_width(), 0.);
            assert_eq!(ProgressBar::new(0.25).fill_width(), 0.25);
            assert_eq!(ProgressBar::new(1.).fill_width(), 1.);
        });
    }

    #[gpui::test]
    fn test_fraction_is_clamped(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(ProgressBar::new(-0.5).fill_width(), 0.);
            assert_eq!(ProgressBar::new(3.).fill_width(), 1.);
            assert_eq!(ProgressBar::new(f32::NAN).fill_width(), 0.);
        });
    }

    #[gpui::test]
    fn test_progress_bar_renders_in_window(cx: &mut TestAppContext) {
        use crate::theme::Theme;

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ProgressTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct ProgressTestView;

    impl gpui::Render for ProgressTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().relative().size_full().child(ProgressBar::new(0.4))
        }
    }
}
