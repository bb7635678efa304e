pub mod circle;
pub mod quad;

use crate::paint::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// `None` for zero-width or fully transparent strokes.
    #[inline]
    pub fn visible(width: f32, color: Color) -> Option<Self> {
        (width > 0.0 && color.a > 0.0).then(|| Self::new(width, color))
    }
}
