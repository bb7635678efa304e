use ezclock_engine::paint::Color;

use crate::clock::Hand;
use crate::error::{ClockError, GeometryError};

// ── HandStyle ─────────────────────────────────────────────────────────────

/// Geometric style of one hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    /// Hand length as a fraction of the face radius.
    pub length_ratio: f32,
    /// Hand width in logical pixels.
    pub thickness: f32,
    /// How far the hand reaches past the face center, i.e. the distance
    /// between the pivot and the hand's base.
    pub offset: f32,
}

impl HandStyle {
    #[inline]
    pub const fn new(length_ratio: f32, thickness: f32, offset: f32) -> Self {
        Self { length_ratio, thickness, offset }
    }

    pub fn length_ratio(mut self, v: f32) -> Self { self.length_ratio = v; self }
    pub fn thickness(mut self, v: f32) -> Self { self.thickness = v; self }
    pub fn offset(mut self, v: f32) -> Self { self.offset = v; self }

    /// Hand length on a face of `face_diameter`.
    #[inline]
    pub fn hand_length(self, face_diameter: f32) -> f32 {
        (face_diameter / 2.0) * self.length_ratio
    }

    /// Checks the constraints that do not depend on the face size.
    ///
    /// Passing this does not guarantee a layout succeeds: the offset must
    /// also be shorter than the hand, which depends on the face diameter.
    pub fn validate(self) -> Result<(), GeometryError> {
        if !(self.length_ratio.is_finite() && self.thickness.is_finite() && self.offset.is_finite())
        {
            return Err(GeometryError::NonFinite);
        }
        if self.length_ratio <= 0.0 {
            return Err(GeometryError::NonPositiveLengthRatio { length_ratio: self.length_ratio });
        }
        if self.thickness <= 0.0 {
            return Err(GeometryError::NonPositiveThickness { thickness: self.thickness });
        }
        if self.offset < 0.0 {
            return Err(GeometryError::NegativeOffset { offset: self.offset });
        }
        Ok(())
    }
}

/// Geometry plus color for one hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAppearance {
    pub style: HandStyle,
    pub color: Color,
}

impl HandAppearance {
    #[inline]
    pub const fn new(style: HandStyle, color: Color) -> Self {
        Self { style, color }
    }
}

// ── face / center ─────────────────────────────────────────────────────────

/// The round dial behind the hands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceStyle {
    pub background: Color,
    pub border_color: Color,
    pub border_width: f32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            background: Color::white(),
            border_color: Color::black(),
            border_width: 2.0,
        }
    }
}

/// The small disc drawn over the hands at the pivot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CenterStyle {
    pub color: Color,
    pub radius: f32,
    pub border_color: Color,
    pub border_width: f32,
}

impl Default for CenterStyle {
    fn default() -> Self {
        Self {
            color: Color::red(),
            radius: 3.0,
            border_color: Color::red(),
            border_width: 1.0,
        }
    }
}

// ── ClockStyle ────────────────────────────────────────────────────────────

/// Complete visual configuration of a clock.
///
/// # Example
/// ```rust,ignore
/// let style = ClockStyle::default()
///     .hand_style(Hand::Second, HandStyle::new(0.9, 1.0, 8.0))
///     .hand_color(Hand::Second, Color::from_srgb_u8(230, 120, 0, 255));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockStyle {
    pub face: FaceStyle,
    pub center: CenterStyle,
    pub hour: HandAppearance,
    pub minute: HandAppearance,
    pub second: HandAppearance,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            face: FaceStyle::default(),
            center: CenterStyle::default(),
            hour: HandAppearance::new(HandStyle::new(0.5, 4.0, 2.0), Color::black()),
            minute: HandAppearance::new(HandStyle::new(0.7, 2.0, 2.0), Color::black()),
            second: HandAppearance::new(HandStyle::new(0.8, 1.0, 2.0), Color::red()),
        }
    }
}

impl ClockStyle {
    #[inline]
    pub fn hand(&self, hand: Hand) -> &HandAppearance {
        match hand {
            Hand::Hour => &self.hour,
            Hand::Minute => &self.minute,
            Hand::Second => &self.second,
        }
    }

    #[inline]
    pub fn hand_mut(&mut self, hand: Hand) -> &mut HandAppearance {
        match hand {
            Hand::Hour => &mut self.hour,
            Hand::Minute => &mut self.minute,
            Hand::Second => &mut self.second,
        }
    }

    pub fn face(mut self, v: FaceStyle) -> Self { self.face = v; self }
    pub fn center(mut self, v: CenterStyle) -> Self { self.center = v; self }

    pub fn hand_style(mut self, hand: Hand, style: HandStyle) -> Self {
        self.hand_mut(hand).style = style;
        self
    }

    pub fn hand_color(mut self, hand: Hand, color: Color) -> Self {
        self.hand_mut(hand).color = color;
        self
    }

    /// Validates every hand; the first failure names its hand.
    pub fn validate(&self) -> Result<(), ClockError> {
        for hand in Hand::ALL {
            self.hand(hand)
                .style
                .validate()
                .map_err(|source| ClockError::InvalidStyle { hand, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ClockStyle::default().validate(), Ok(()));
    }

    #[test]
    fn default_hand_lengths_increase_outward() {
        let s = ClockStyle::default();
        assert!(s.hour.style.length_ratio < s.minute.style.length_ratio);
        assert!(s.minute.style.length_ratio < s.second.style.length_ratio);
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let err = HandStyle::new(0.0, 1.0, 0.0).validate();
        assert_eq!(err, Err(GeometryError::NonPositiveLengthRatio { length_ratio: 0.0 }));
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(HandStyle::new(f32::NAN, 1.0, 0.0).validate(), Err(GeometryError::NonFinite));
    }

    #[test]
    fn negative_offset_and_thickness_are_rejected() {
        assert!(matches!(
            HandStyle::new(0.5, 1.0, -0.5).validate(),
            Err(GeometryError::NegativeOffset { .. })
        ));
        assert!(matches!(
            HandStyle::new(0.5, 0.0, 0.0).validate(),
            Err(GeometryError::NonPositiveThickness { .. })
        ));
    }

    #[test]
    fn validate_names_the_offending_hand() {
        let style = ClockStyle::default().hand_style(Hand::Minute, HandStyle::new(-1.0, 2.0, 2.0));
        assert!(matches!(
            style.validate(),
            Err(ClockError::InvalidStyle { hand: Hand::Minute, .. })
        ));
    }

    #[test]
    fn hand_length_scales_with_radius() {
        assert_eq!(HandStyle::new(0.5, 4.0, 2.0).hand_length(100.0), 25.0);
    }
}
