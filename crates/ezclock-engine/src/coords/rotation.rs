use super::Vec2;

/// Rotation about a fixed point in logical-pixel space.
///
/// Positive angles turn clockwise on screen (Y points down):
///
/// ```text
/// x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
/// y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    /// Angle in radians, clockwise positive.
    pub radians: f32,
    pub center: Vec2,
}

impl Rotation {
    #[inline]
    pub const fn new(radians: f32, center: Vec2) -> Self {
        Self { radians, center }
    }

    /// Rotation by `fraction` of a full turn.
    #[inline]
    pub fn from_turns(fraction: f32, center: Vec2) -> Self {
        Self::new(fraction * core::f32::consts::TAU, center)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.radians.abs() < f32::EPSILON
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        if self.is_identity() {
            return point;
        }

        let (sin, cos) = self.radians.sin_cos();
        let d = point - self.center;
        Vec2::new(
            self.center.x + d.x * cos - d.y * sin,
            self.center.y + d.x * sin + d.y * cos,
        )
    }

    pub fn apply_all<const N: usize>(&self, points: [Vec2; N]) -> [Vec2; N] {
        points.map(|p| self.apply(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn identity_leaves_point_untouched() {
        let rot = Rotation::new(0.0, Vec2::new(5.0, 5.0));
        assert_eq!(rot.apply(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn quarter_turn_moves_twelve_to_three() {
        let c = Vec2::new(50.0, 50.0);
        let rot = Rotation::from_turns(0.25, c);
        assert!(close(rot.apply(Vec2::new(50.0, 25.0)), Vec2::new(75.0, 50.0)));
    }

    #[test]
    fn half_turn_moves_twelve_to_six() {
        let c = Vec2::new(50.0, 50.0);
        let rot = Rotation::from_turns(0.5, c);
        assert!(close(rot.apply(Vec2::new(50.0, 25.0)), Vec2::new(50.0, 75.0)));
    }

    #[test]
    fn center_is_fixed_point() {
        let c = Vec2::new(12.0, -3.0);
        let rot = Rotation::new(1.234, c);
        assert!(close(rot.apply(c), c));
    }

    #[test]
    fn rotation_preserves_distance_to_center() {
        let c = Vec2::new(0.0, 0.0);
        let rot = Rotation::new(0.7, c);
        let pts = rot.apply_all([Vec2::new(3.0, 4.0), Vec2::new(-2.0, 0.0)]);
        assert!((pts[0].length() - 5.0).abs() < 1e-4);
        assert!((pts[1].length() - 2.0).abs() < 1e-4);
    }
}
