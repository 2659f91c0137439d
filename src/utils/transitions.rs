use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

const HOVER_DURATION: Duration = Duration::from_millis(300);

/// Eases between 0 (resting) and 1 (hovered).
pub fn hover_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_hover: bool,
) -> Transition<f32> {
    let is_hover_float = is_hover as u8 as f32;

    let hover_transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:hover"),
            cx,
            HOVER_DURATION,
            |_window, _cx| is_hover_float,
        )
        .with_easing(ease_out_quint());

    hover_transition.update(cx, |this, cx| {
        if *this != is_hover_float {
            *this = is_hover_float;
            cx.notify();
        }
    });

    hover_transition
}

/// Eases from 0 (hidden) to 1 (fully shown) once an element is revealed.
pub fn reveal_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    is_revealed: bool,
) -> Transition<f32> {
    let is_revealed_float = is_revealed as u8 as f32;

    let reveal_transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:reveal"),
            cx,
            duration,
            |_window, _cx| 0.,
        )
        .with_easing(ease_out_quint());

    reveal_transition.update(cx, |this, cx| {
        if *this != is_revealed_float {
            *this = is_revealed_float;
            cx.notify();
        }
    });

    reveal_transition
}
