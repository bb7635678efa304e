use chrono::Timelike;
use ezclock_engine::coords::{Rect, Vec2};
use ezclock_engine::scene::{Border, ZIndex};
use log::{debug, trace, warn};

use crate::clock::{
    layout_clock, AngleSet, ClockLayout, ClockStyle, ClockTime, Hand, HandMotion, Transition,
};
use crate::constraints::Constraints;
use crate::error::ClockError;
use crate::painter::Painter;
use crate::widget::Widget;

/// A drawable piece of the clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Part {
    Face,
    Hand(Hand),
    Center,
}

/// Back-to-front stacking of the parts: the center disc covers the hands'
/// overlapping bases.
const STACKING: [Part; 5] = [
    Part::Face,
    Part::Hand(Hand::Hour),
    Part::Hand(Hand::Minute),
    Part::Hand(Hand::Second),
    Part::Center,
];

/// Analog clock widget.
///
/// `ClockView` holds the only mutable state of the clock (time, style,
/// bounds) and recomputes derived values explicitly:
///
/// - [`set_time`](Self::set_time) recomputes the hand angles,
/// - [`update_style`](Self::update_style) applies a batch of style edits and
///   recomputes geometry once,
/// - [`relayout`](Self::relayout) recomputes geometry for new bounds.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockView::new(ClockStyle::default())?.preferred_size(160.0);
/// clock.update_style(|s| {
///     s.second.style.length_ratio = 0.9;
///     s.second.color = Color::from_srgb_u8(230, 120, 0, 255);
/// })?;
/// let motion = clock.set_time(ClockTime::new(10, 9, 30), Transition::animated());
/// ```
#[derive(Debug, Clone)]
pub struct ClockView {
    style: ClockStyle,
    time: ClockTime,
    angles: AngleSet,
    preferred_size: f32,
    bounds: Option<Rect>,
    layout: Option<ClockLayout>,
    parts: Option<[Part; 5]>,
    last_motion: Option<HandMotion>,
}

impl ClockView {
    pub const DEFAULT_SIZE: f32 = 200.0;

    /// Creates a clock showing 00:00:00.
    ///
    /// # Errors
    /// [`ClockError::InvalidStyle`] if any hand style is degenerate.
    pub fn new(style: ClockStyle) -> Result<Self, ClockError> {
        style.validate()?;
        let time = ClockTime::default();
        Ok(Self {
            style,
            time,
            angles: time.angles(),
            preferred_size: Self::DEFAULT_SIZE,
            bounds: None,
            layout: None,
            parts: None,
            last_motion: None,
        })
    }

    /// Side of the square this clock asks for during measure.
    pub fn preferred_size(mut self, v: f32) -> Self { self.preferred_size = v.max(0.0); self }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    #[inline]
    pub fn time(&self) -> ClockTime {
        self.time
    }

    #[inline]
    pub fn angles(&self) -> AngleSet {
        self.angles
    }

    /// Geometry from the last successful layout, if the current bounds
    /// admit one.
    #[inline]
    pub fn current_layout(&self) -> Option<&ClockLayout> {
        self.layout.as_ref()
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.parts.is_some()
    }

    /// On-screen corners of `hand` at the current angle.
    pub fn hand_corners(&self, hand: Hand) -> Option<[Vec2; 4]> {
        self.layout
            .as_ref()
            .map(|layout| layout.hand(hand).corners(self.angles.fraction(hand)))
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Sets up the clock's parts. Only the first call does anything; it
    /// returns `true` when it did.
    pub fn attach(&mut self) -> bool {
        if self.parts.is_some() {
            return false;
        }
        self.parts = Some(STACKING);
        debug!("clock attached with {} parts", STACKING.len());
        true
    }

    // ── time ──────────────────────────────────────────────────────────────

    /// Shows `time` and returns the resulting hand motion for the host's
    /// animator. The motion is also kept until [`take_motion`](Self::take_motion).
    pub fn set_time(&mut self, time: ClockTime, transition: Transition) -> HandMotion {
        let from = self.angles;
        self.time = time;
        self.angles = time.angles();

        let motion = HandMotion { from, to: self.angles, transition };
        trace!("clock time {time} ({transition:?})");
        self.last_motion = Some(motion);
        motion
    }

    /// Shows the hours, minutes and seconds of a chrono time or datetime.
    pub fn set_time_of<T: Timelike>(&mut self, value: &T, transition: Transition) -> HandMotion {
        self.set_time(ClockTime::from_timelike(value), transition)
    }

    /// The motion produced by the most recent time update, if not yet taken.
    pub fn take_motion(&mut self) -> Option<HandMotion> {
        self.last_motion.take()
    }

    // ── style ─────────────────────────────────────────────────────────────

    /// Applies a batch of style edits, then validates and recomputes the
    /// geometry once.
    ///
    /// # Errors
    /// [`ClockError::InvalidStyle`] if the edited style is invalid; the
    /// previous style and layout stay in effect.
    ///
    /// A valid style is always kept. If it cannot be laid out in the current
    /// bounds, the layout is dropped as in [`relayout`](Self::relayout) and
    /// [`ClockError::Layout`] is returned; the next usable bounds pick the
    /// style up.
    pub fn update_style(&mut self, edit: impl FnOnce(&mut ClockStyle)) -> Result<(), ClockError> {
        let mut next = self.style;
        edit(&mut next);
        next.validate()?;

        self.style = next;
        debug!("clock style updated");

        match self.bounds {
            Some(bounds) => self.relayout(bounds).map(|_| ()),
            None => Ok(()),
        }
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Recomputes the face and hand geometry for `bounds`.
    ///
    /// # Errors
    /// [`ClockError::Layout`] when `bounds` are too small for a hand. The
    /// previous layout is dropped, so nothing stale is painted.
    pub fn relayout(&mut self, bounds: Rect) -> Result<&ClockLayout, ClockError> {
        self.bounds = Some(bounds);
        self.layout = None;
        let layout = layout_clock(bounds, &self.style)?;
        debug!(
            "clock layout: face {:?}, radius {}",
            layout.face_center(),
            layout.face_radius()
        );
        Ok(self.layout.insert(layout))
    }

    fn paint_part(&self, part: Part, layout: &ClockLayout, painter: &mut Painter, z: ZIndex) {
        match part {
            Part::Face => {
                let face = &self.style.face;
                painter.fill_circle(
                    z,
                    layout.face_center(),
                    layout.face_radius(),
                    face.background,
                    Border::visible(face.border_width, face.border_color),
                );
            }
            Part::Hand(hand) => {
                let geometry = layout.hand(hand);
                painter.fill_rotated_rect(
                    z,
                    geometry.frame,
                    geometry.rotation(self.angles.fraction(hand)),
                    self.style.hand(hand).color,
                );
            }
            Part::Center => {
                let center = &self.style.center;
                if center.radius > 0.0 {
                    painter.fill_circle(
                        z,
                        layout.face_center(),
                        center.radius,
                        center.color,
                        Border::visible(center.border_width, center.border_color),
                    );
                }
            }
        }
    }
}

impl Widget for ClockView {
    fn attach(&mut self) {
        ClockView::attach(self);
    }

    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain_square(self.preferred_size)
    }

    fn layout(&mut self, rect: Rect) {
        if self.bounds == Some(rect) {
            return;
        }
        if rect.is_empty() {
            self.bounds = Some(rect);
            self.layout = None;
            debug!("clock hidden in empty bounds {rect:?}");
            return;
        }
        if let Err(err) = self.relayout(rect) {
            warn!("clock not drawn in {rect:?}: {err}");
        }
    }

    fn paint(&self, painter: &mut Painter, _rect: Rect) {
        let (Some(parts), Some(layout)) = (self.parts.as_ref(), self.layout.as_ref()) else {
            return;
        };

        let base = painter.reserve_layers(parts.len());
        for (i, part) in (0i32..).zip(parts.iter()) {
            self.paint_part(*part, layout, painter, base.above(i));
        }
    }
}
