use ezclock_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// The core trait every UI component implements.
///
/// A frame runs `attach`, `measure`, `layout`, `paint` in that order (see
/// [`UiScene::frame`](crate::scene::UiScene::frame)).
pub trait Widget: 'static {
    /// One-time setup before the first layout.
    ///
    /// Called every frame; implementations must make repeated calls no-ops.
    fn attach(&mut self) {}

    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic — calling `measure` twice with the same arguments
    /// must return the same result.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Accept the rect allocated by the parent and recompute any cached
    /// geometry that depends on it.
    fn layout(&mut self, _rect: Rect) {}

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
