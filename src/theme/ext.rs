use gpui::App;

use crate::theme::Theme;

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        let theme = theme.as_ref().clone();
        tracing::debug!(theme = %theme.name, "installing page theme");
        self.set_global::<Theme>(theme)
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_theme_layout_is_positive(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let layout = &cx.get_theme().layout;

            assert!(layout.spacing.content_max_width > gpui::px(0.));
            assert!(layout.spacing.nav_height > gpui::px(0.));
            assert!(layout.spacing.progress_height > gpui::px(0.));
            assert!(layout.padding.sm > gpui::px(0.));
        });
    }

    #[gpui::test]
    fn test_theme_text_colors_are_visible(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let text = &cx.get_theme().colors.text;

            for color in [text.primary, text.body, text.secondary, text.muted] {
                assert!(color.a > 0.0, "Text colors should be visible");
            }
        });
    }

    #[gpui::test]
    fn test_replacing_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let mut renamed = Theme::DEFAULT.clone();
            renamed.name = "Renamed".into();
            cx.set_theme(&renamed);

            assert_eq!(cx.get_theme().name.as_ref(), "Renamed");
        });
    }
}
