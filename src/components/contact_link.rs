use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, div, px,
};

use crate::{
    components::Icon,
    content::ContactLink,
    theme::{ThemeExt, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind, ThemeTextSizeKind},
};

/// Hands `url` to the system browser.
pub fn open_link(url: &str, cx: &mut App) {
    tracing::info!(url, "opening link");
    cx.open_url(url);
}

/// A hero call-to-action for one contact link.
///
/// The primary button is drawn filled; the rest are outlined.
#[derive(IntoElement)]
pub struct ContactButton {
    id: ElementId,
    link: ContactLink,
    primary: bool,
}

impl ContactButton {
    pub fn new(id: impl Into<ElementId>, link: ContactLink) -> Self {
        Self {
            id: id.into(),
            link,
            primary: false,
        }
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }
}

impl RenderOnce for ContactButton {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.get_theme();
        let surface = &theme.colors.surface;
        let (background, background_hover, text_color, border_color) = if self.primary {
            (
                surface.button_primary,
                theme.colors.text.body,
                theme.colors.text.inverse,
                surface.button_primary,
            )
        } else {
            (
                surface.button,
                surface.button_hover,
                theme.colors.text.primary,
                theme.colors.border.subtle,
            )
        };

        let url = self.link.url.clone();

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap(ThemeLayoutPaddingKind::Sm.resolve(cx))
            .px(ThemeLayoutPaddingKind::Lg.resolve(cx))
            .py(px(12.))
            .rounded(ThemeLayoutCornerRadiiKind::Lg.resolve(cx))
            .bg(background)
            .border_1()
            .border_color(border_color)
            .cursor(CursorStyle::PointingHand)
            .text_size(ThemeTextSizeKind::Body.resolve(cx))
            .font_weight(theme.layout.text.default_font.weights.heading())
            .text_color(text_color)
            .hover(|style| style.bg(background_hover))
            .child(
                Icon::new(self.link.kind.icon())
                    .size(px(18.))
                    .color(text_color),
            )
            .child(self.link.label)
            .on_click(move |_event, _window, cx| open_link(&url, cx))
    }
}

/// A plain text link for the page footer.
#[derive(IntoElement)]
pub struct FooterLink {
    id: ElementId,
    link: ContactLink,
}

impl FooterLink {
    pub fn new(id: impl Into<ElementId>, link: ContactLink) -> Self {
        Self {
            id: id.into(),
            link,
        }
    }
}

impl RenderOnce for FooterLink {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = &cx.get_theme().colors;
        let hover_color = colors.text.primary;
        let url = self.link.url.clone();

        div()
            .id(self.id)
            .cursor(CursorStyle::PointingHand)
            .text_size(ThemeTextSizeKind::Body.resolve(cx))
            .text_color(colors.text.muted)
            .hover(|style| style.text_color(hover_color))
            .child(self.link.footer_label())
            .on_click(move |_event, _window, cx| open_link(&url, cx))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::content::LinkKind;
    use gpui::{AppContext, SharedString, TestAppContext, VisualTestContext};

    fn link(kind: LinkKind, label: &'static str, footer_label: Option<&'static str>) -> ContactLink {
        ContactLink {
            kind,
            label: label.into(),
            footer_label: footer_label.map(SharedString::from),
            url: "https://github.com/Dattuog".into(),
        }
    }

    #[gpui::test]
    fn test_contact_button_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let button = ContactButton::new("github", link(LinkKind::Github, "GitHub", None));
            assert!(!button.primary, "Buttons should default to the outlined style");

            let button = button.primary(true);
            assert!(button.primary);
        });
    }

    #[gpui::test]
    fn test_link_icons(cx: &mut TestAppContext) {
        use crate::assets::IconKind;

        cx.update(|_cx| {
            assert_eq!(LinkKind::Email.icon(), IconKind::Mail);
            assert_eq!(LinkKind::Github.icon(), IconKind::Github);
            assert_eq!(LinkKind::Linkedin.icon(), IconKind::Linkedin);
        });
    }

    #[gpui::test]
    fn test_footer_link_label(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let footer = FooterLink::new(
                "email",
                link(LinkKind::Email, "Contact Me", Some("Email")),
            );
            assert_eq!(footer.link.footer_label(), SharedString::from("Email"));
        });
    }

    #[gpui::test]
    fn test_open_link(cx: &mut TestAppContext) {
        cx.update(|cx| open_link("https://github.com/Dattuog", cx));

        assert_eq!(
            cx.opened_url().as_deref(),
            Some("https://github.com/Dattuog")
        );
    }

    #[gpui::test]
    fn test_contact_links_render_in_window(cx: &mut TestAppContext) {
        use crate::theme::Theme;

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ContactTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct ContactTestView;

    impl gpui::Render for ContactTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(
                    ContactButton::new("email", link(LinkKind::Email, "Contact Me", None))
                        .primary(true),
                )
                .child(ContactButton::new("github", link(LinkKind::Github, "GitHub", None)))
                .child(FooterLink::new("footer", link(LinkKind::Linkedin, "LinkedIn", None)))
        }
    }
}
