use ezclock_engine::coords::Vec2;

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Largest square that satisfies these constraints, capped at `side`.
    #[inline]
    #[must_use]
    pub fn constrain_square(self, side: f32) -> Vec2 {
        let side = side.min(self.max.x).min(self.max.y);
        self.constrain(Vec2::splat(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constraints::constrain ────────────────────────────────────────────

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn min_wins_over_smaller_preference() {
        let c = Constraints { min: Vec2::new(30.0, 40.0), max: Vec2::new(30.0, 40.0) };
        assert_eq!(c.constrain(Vec2::zero()), Vec2::new(30.0, 40.0));
    }

    // ── Constraints::constrain_square ─────────────────────────────────────

    #[test]
    fn square_shrinks_to_shorter_axis() {
        let c = Constraints::loose(Vec2::new(300.0, 120.0));
        assert_eq!(c.constrain_square(200.0), Vec2::new(120.0, 120.0));
    }

    #[test]
    fn square_keeps_preferred_when_room() {
        let c = Constraints::loose(Vec2::splat(f32::INFINITY));
        assert_eq!(c.constrain_square(200.0), Vec2::splat(200.0));
    }
}
