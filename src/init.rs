use gpui::{App, Window};

use crate::theme::{Theme, ThemeExt};

/// Installs the builtin page theme.
pub fn init(cx: &mut App) {
    cx.set_theme(Theme::DEFAULT);
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
