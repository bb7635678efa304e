use ezclock_engine::coords::{Rect, Rotation, Vec2};

use crate::clock::{ClockStyle, Hand, HandStyle};
use crate::error::{ClockError, GeometryError};

// ── HandGeometry ──────────────────────────────────────────────────────────

/// Placement of one hand before rotation.
///
/// The hand is an upright rectangle pointing at 12 o'clock. Rotating it by
/// the hand angle about [`pivot`](Self::pivot) gives its on-screen position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandGeometry {
    /// Rotation pivot, normalized to the hand's own box (`0..1` on each axis).
    pub anchor: Vec2,
    /// Unrotated hand rectangle in parent coordinates.
    pub frame: Rect,
}

impl HandGeometry {
    #[inline]
    pub fn length(&self) -> f32 {
        self.frame.size.y
    }

    /// The anchor in parent coordinates.
    #[inline]
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(
            self.frame.origin.x + self.anchor.x * self.frame.size.x,
            self.frame.origin.y + self.anchor.y * self.frame.size.y,
        )
    }

    /// Rotation about the pivot by `turns` of a full revolution.
    #[inline]
    pub fn rotation(&self, turns: f64) -> Rotation {
        Rotation::from_turns(turns as f32, self.pivot())
    }

    /// Frame corners after rotating by `turns`, clockwise from the top-left.
    pub fn corners(&self, turns: f64) -> [Vec2; 4] {
        self.rotation(turns).apply_all(self.frame.corners())
    }
}

/// Sizes a hand and places its pivot.
///
/// With `hand_length = face_diameter / 2 * length_ratio`:
///
/// - anchor = `(0.5, 1 - offset / hand_length)`
/// - frame  = `(center.x - thickness / 2, center.y - hand_length + offset, thickness, hand_length)`
///
/// so the pivot lands exactly on `center` and the hand's base overhangs it by
/// `offset`.
///
/// # Errors
/// Any [`GeometryError`] when the result would be degenerate; in particular
/// a zero `length_ratio` and an `offset` that is not shorter than the hand.
pub fn compute_hand_geometry(
    face_diameter: f32,
    style: HandStyle,
    center: Vec2,
) -> Result<HandGeometry, GeometryError> {
    if !(face_diameter.is_finite() && center.is_finite()) {
        return Err(GeometryError::NonFinite);
    }
    style.validate()?;

    let hand_length = style.hand_length(face_diameter);
    if !hand_length.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if hand_length <= 0.0 {
        return Err(GeometryError::DegenerateLength { hand_length });
    }
    if style.offset >= hand_length {
        return Err(GeometryError::OffsetTooLarge { offset: style.offset, hand_length });
    }

    Ok(HandGeometry {
        anchor: Vec2::new(0.5, 1.0 - style.offset / hand_length),
        frame: Rect::new(
            center.x - style.thickness / 2.0,
            center.y - hand_length + style.offset,
            style.thickness,
            hand_length,
        ),
    })
}

// ── ClockLayout ───────────────────────────────────────────────────────────

/// Geometry of a whole clock for one set of bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockLayout {
    /// The bounds this layout was computed for.
    pub bounds: Rect,
    /// Square enclosing the face, centered in `bounds`.
    pub face: Rect,
    hands: [HandGeometry; 3],
}

impl ClockLayout {
    #[inline]
    pub fn face_center(&self) -> Vec2 {
        self.face.center()
    }

    #[inline]
    pub fn face_radius(&self) -> f32 {
        self.face.size.x / 2.0
    }

    #[inline]
    pub fn hand(&self, hand: Hand) -> &HandGeometry {
        &self.hands[hand.index()]
    }
}

/// Lays out the face and all three hands inside `bounds`.
///
/// The face diameter is the shorter side of `bounds`.
///
/// # Errors
/// [`ClockError::Layout`] naming the first hand that cannot be placed.
pub fn layout_clock(bounds: Rect, style: &ClockStyle) -> Result<ClockLayout, ClockError> {
    let face = bounds.square_centered();
    let diameter = face.size.x;
    let center = face.center();

    let place = |hand: Hand| {
        compute_hand_geometry(diameter, style.hand(hand).style, center)
            .map_err(|source| ClockError::Layout { hand, source })
    };

    Ok(ClockLayout {
        bounds,
        face,
        hands: [place(Hand::Hour)?, place(Hand::Minute)?, place(Hand::Second)?],
    })
}
