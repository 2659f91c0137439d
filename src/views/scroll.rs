use gpui::{Pixels, ScrollHandle, point, px};

use crate::utils::scroll_fraction;

/// Scroll state for the page body.
///
/// Wraps the gpui scroll handle of the page's scroll container, so the
/// progress indicator and section navigation read the same offsets.
#[derive(Clone, Default)]
pub struct ScrollProgress {
    handle: ScrollHandle,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> &ScrollHandle {
        &self.handle
    }

    /// How far down the page has been scrolled, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        scroll_fraction(-self.handle.offset().y, self.handle.max_offset().height)
    }

    /// Scrolls so the top of child `ix` sits `inset` below the top of the
    /// container. Returns false when the child hasn't been laid out yet.
    pub fn scroll_to_item(&self, ix: usize, inset: Pixels) -> bool {
        let Some(item) = self.handle.bounds_for_item(ix) else {
            return false;
        };

        let offset = item_offset(
            item.origin.y,
            self.handle.bounds().origin.y,
            self.handle.offset().y,
            self.handle.max_offset().height,
            inset,
        );
        self.handle.set_offset(point(px(0.), offset));

        true
    }
}

/// The vertical scroll offset that brings an item to `inset` below the top
/// of its container.
///
/// `item_top` and `container_top` are window coordinates measured while the
/// container is scrolled by `current`. The result is clamped to the
/// reachable range `[-max, 0]`.
pub fn item_offset(
    item_top: Pixels,
    container_top: Pixels,
    current: Pixels,
    max: Pixels,
    inset: Pixels,
) -> Pixels {
    let content_top = (item_top - container_top - current).to_f64() as f32;
    let max = (max.to_f64() as f32).max(0.);
    let target = (content_top - inset.to_f64() as f32).clamp(0., max);

    px(-target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_offset_from_top() {
        // Item 900px into the content, nothing scrolled yet, 64px nav.
        let offset = item_offset(px(900.), px(0.), px(0.), px(3000.), px(64.));
        assert_eq!(offset, px(-836.));
    }

    #[test]
    fn test_item_offset_accounts_for_current_scroll() {
        // Same item after scrolling 500px: it now sits at 400 in the window.
        let offset = item_offset(px(400.), px(0.), px(-500.), px(3000.), px(64.));
        assert_eq!(offset, px(-836.));
    }

    #[test]
    fn test_item_offset_is_clamped() {
        let offset = item_offset(px(20.), px(0.), px(0.), px(3000.), px(64.));
        assert_eq!(offset, px(0.));

        let offset = item_offset(px(5000.), px(0.), px(0.), px(3000.), px(64.));
        assert_eq!(offset, px(-3000.));

        let offset = item_offset(px(500.), px(0.), px(0.), px(0.), px(64.));
        assert_eq!(offset, px(0.));
    }

    #[test]
    fn test_fresh_handle_is_at_top() {
        assert_eq!(ScrollProgress::new().fraction(), 0.);
        assert!(!ScrollProgress::new().scroll_to_item(3, px(64.)));
    }
}
