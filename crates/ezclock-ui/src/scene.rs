use ezclock_engine::coords::{Rect, Vec2};
use ezclock_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns the draw list across frames.
///
/// The root widget is borrowed, so its state (time, cached layout) persists
/// between frames in the caller.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut clock = ClockView::new(ClockStyle::default())?;
///
/// // In your frame callback:
/// clock.set_time(ClockTime::from_timelike(&chrono::Local::now()), Transition::Immediate);
/// let draw_list = ui.frame(&mut clock, viewport);
/// renderer.render(draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach, measure, lay out and paint `root` inside a viewport whose
    /// top-left corner is the origin.
    ///
    /// The returned list is valid until the next call.
    pub fn frame<W: Widget>(&mut self, root: &mut W, viewport: Vec2) -> &mut DrawList {
        self.frame_in(root, Rect::from_origin_size(Vec2::zero(), viewport))
    }

    /// Runs a frame with the root at its measured size, centered in `area`.
    pub fn frame_in<W: Widget>(&mut self, root: &mut W, area: Rect) -> &mut DrawList {
        self.draw_list.clear();

        root.attach();

        // ── measure ───────────────────────────────────────────────────────
        let size = root.measure(Constraints::loose(area.size));
        let rect = Rect::from_center_size(area.center(), size);

        // ── layout ────────────────────────────────────────────────────────
        root.layout(rect);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }

        log::trace!("frame painted {} items in {:?}", self.draw_list.len(), rect);
        &mut self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ClockStyle, ClockView};

    #[test]
    fn frame_attaches_and_paints_clock() {
        let mut scene = UiScene::new();
        let mut clock = ClockView::new(ClockStyle::default()).unwrap();
        let list = scene.frame(&mut clock, Vec2::new(300.0, 300.0));
        assert_eq!(list.len(), 5);
        assert!(clock.is_attached());
    }

    #[test]
    fn frame_in_centers_measured_root() {
        let mut scene = UiScene::new();
        let mut clock = ClockView::new(ClockStyle::default()).unwrap().preferred_size(100.0);
        let _ = scene.frame_in(&mut clock, Rect::new(0.0, 0.0, 300.0, 200.0));
        let layout = clock.current_layout().unwrap();
        assert_eq!(layout.bounds, Rect::new(100.0, 50.0, 100.0, 100.0));
        assert_eq!(layout.face_center(), Vec2::new(150.0, 100.0));
    }

    #[test]
    fn repeated_frames_replace_previous_items() {
        let mut scene = UiScene::new();
        let mut clock = ClockView::new(ClockStyle::default()).unwrap();
        let _ = scene.frame(&mut clock, Vec2::new(120.0, 120.0));
        let list = scene.frame(&mut clock, Vec2::new(120.0, 120.0));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn too_small_viewport_paints_nothing() {
        let mut scene = UiScene::new();
        let mut clock = ClockView::new(ClockStyle::default()).unwrap();
        let list = scene.frame(&mut clock, Vec2::new(4.0, 4.0));
        assert!(list.is_empty());
    }
}
