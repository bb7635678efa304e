use crate::coords::{Rect, Rotation, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled convex quadrilateral, typically a rotated rectangle.
///
/// Corners are stored in winding order; renderers may split them into the
/// triangles `(0, 1, 2)` and `(0, 2, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCmd {
    pub corners: [Vec2; 4],
    pub fill: Color,
}

impl QuadCmd {
    #[inline]
    pub fn new(corners: [Vec2; 4], fill: Color) -> Self {
        Self { corners, fill }
    }

    /// Quad covering `rect` after applying `rotation`.
    #[inline]
    pub fn rotated_rect(rect: Rect, rotation: Rotation, fill: Color) -> Self {
        Self::new(rotation.apply_all(rect.corners()), fill)
    }
}

impl DrawList {
    /// Records `rect` rotated about `rotation.center`.
    #[inline]
    pub fn push_rotated_rect(&mut self, z: ZIndex, rect: Rect, rotation: Rotation, fill: Color) {
        self.push(z, DrawCmd::Quad(QuadCmd::rotated_rect(rect, rotation, fill)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrotated_rect_keeps_corners() {
        let rect = Rect::new(48.0, 27.0, 4.0, 25.0);
        let quad = QuadCmd::rotated_rect(rect, Rotation::new(0.0, rect.center()), Color::black());
        assert_eq!(quad.corners, rect.corners());
    }

    #[test]
    fn half_turn_about_center_swaps_opposite_corners() {
        let rect = Rect::new(0.0, 0.0, 2.0, 4.0);
        let quad = QuadCmd::rotated_rect(rect, Rotation::from_turns(0.5, rect.center()), Color::black());
        let expected = rect.corners();
        assert!(quad.corners[0].distance(expected[2]) < 1e-4);
        assert!(quad.corners[1].distance(expected[3]) < 1e-4);
    }
}
