use folio_palette::Gradient;
use gpui::{Background, ColorSpace, Rgba, linear_color_stop, linear_gradient};

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Scales the existing alpha, e.g. for fading an element in.
    fn fade(self, factor: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn fade(mut self, factor: f32) -> Self {
        self.a *= factor.clamp(0., 1.);
        self
    }
}

pub trait GradientExt {
    /// Paints the gradient along `angle` degrees (90 runs left to right).
    fn background(&self, angle: f32) -> Background;
}

impl GradientExt for Gradient {
    fn background(&self, angle: f32) -> Background {
        linear_gradient(
            angle,
            linear_color_stop(self.from.rgba(), 0.),
            linear_color_stop(self.to.rgba(), 1.),
        )
        .color_space(ColorSpace::Oklab)
    }
}
