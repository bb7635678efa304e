use ezclock_engine::coords::{Rect, Rotation, Vec2};
use ezclock_engine::paint::Color;
use ezclock_engine::scene::{Border, DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. A widget reserves a block of layers and
/// paints each shape onto one of them.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Reserves `n` consecutive layers above everything reserved so far and
    /// returns the lowest one.
    pub fn reserve_layers(&mut self, n: usize) -> ZIndex {
        let base = ZIndex::new(self.z);
        self.z = self.z.saturating_add(i32::try_from(n).unwrap_or(i32::MAX));
        base
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Circle with optional border on layer `z`.
    pub fn fill_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        self.draw_list.push_circle(z, center, radius, fill, border);
    }

    /// `rect` rotated about `rotation.center`, on layer `z`.
    pub fn fill_rotated_rect(&mut self, z: ZIndex, rect: Rect, rotation: Rotation, fill: Color) {
        self.draw_list.push_rotated_rect(z, rect, rotation, fill);
    }
}
