use gpui::{Bounds, Pixels, Size};

/// Linearly maps `value` from one range onto another.
pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    (value - from_min) / (from_max - from_min) * (to_max - to_min) + to_min
}

/// How far down the page has been scrolled, in `[0, 1]`.
///
/// `scrolled` is the distance from the top and `max` the largest reachable
/// offset. Content that cannot scroll reports `0`.
pub fn scroll_fraction(scrolled: Pixels, max: Pixels) -> f32 {
    let max = max.to_f64() as f32;
    if max <= 0. || !max.is_finite() {
        return 0.;
    }

    let scrolled = (scrolled.to_f64() as f32).clamp(0., max);
    if scrolled >= max {
        return 1.;
    }

    remap(scrolled, 0., max, 0., 1.).clamp(0., 1.)
}

/// Whether any part of `bounds` is inside a viewport anchored at the origin.
///
/// Elements with no area still count when they sit on the viewport, so
/// empty sections are revealed too.
pub fn intersects_viewport(bounds: Bounds<Pixels>, viewport: Size<Pixels>) -> bool {
    let top = bounds.origin.y;
    let left = bounds.origin.x;
    let bottom = top + bounds.size.height;
    let right = left + bounds.size.width;

    bottom >= Pixels::ZERO && top <= viewport.height && right >= Pixels::ZERO && left <= viewport.width
}
