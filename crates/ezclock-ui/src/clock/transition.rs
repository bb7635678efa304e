use std::time::Duration;

use crate::clock::{AngleSet, Hand};

/// How the host should move the hands to a new time.
///
/// The clock never animates by itself; it hands the start and end angles to
/// whatever tween facility the host has.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Immediate,
    Animated(Duration),
}

impl Transition {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// Animated with [`DEFAULT_DURATION`](Self::DEFAULT_DURATION).
    #[inline]
    pub const fn animated() -> Self {
        Self::Animated(Self::DEFAULT_DURATION)
    }

    #[inline]
    pub fn duration(self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Animated(d) => d,
        }
    }

    #[inline]
    pub fn is_animated(self) -> bool {
        !self.duration().is_zero()
    }
}

/// A change of hand angles requested by a time update.
///
/// `from` and `to` are positions in `[0, 1)`, so a hand crossing 12 o'clock
/// goes from near 1 back to near 0. Tween with [`sweep`](Self::sweep) or
/// [`at`](Self::at) instead of interpolating the raw fractions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandMotion {
    pub from: AngleSet,
    pub to: AngleSet,
    pub transition: Transition,
}

impl HandMotion {
    /// `true` when no hand moves.
    #[inline]
    pub fn is_still(&self) -> bool {
        self.from == self.to
    }

    /// Signed turn fraction along the shorter way round, in `[-0.5, 0.5)`.
    /// Positive is clockwise.
    pub fn sweep(&self, hand: Hand) -> f64 {
        let delta = (self.to.fraction(hand) - self.from.fraction(hand)).rem_euclid(1.0);
        if delta >= 0.5 { delta - 1.0 } else { delta }
    }

    /// Hand positions `progress` of the way through the motion, wrapped into
    /// `[0, 1)`. `progress` is clamped to `[0, 1]`.
    pub fn at(&self, progress: f64) -> AngleSet {
        let t = progress.clamp(0.0, 1.0);
        let position = |hand: Hand| (self.from.fraction(hand) + self.sweep(hand) * t).rem_euclid(1.0);
        AngleSet {
            hour: position(Hand::Hour),
            minute: position(Hand::Minute),
            second: position(Hand::Second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;

    #[test]
    fn default_is_immediate() {
        assert_eq!(Transition::default(), Transition::Immediate);
        assert!(!Transition::default().is_animated());
    }

    #[test]
    fn animated_uses_default_duration() {
        assert_eq!(Transition::animated().duration(), Duration::from_millis(300));
        assert!(Transition::animated().is_animated());
    }

    #[test]
    fn zero_length_animation_is_not_animated() {
        assert!(!Transition::Animated(Duration::ZERO).is_animated());
    }

    // ── hand motion ───────────────────────────────────────────────────────

    fn motion(from: ClockTime, to: ClockTime) -> HandMotion {
        HandMotion { from: from.angles(), to: to.angles(), transition: Transition::animated() }
    }

    #[test]
    fn sweep_crosses_twelve_forwards() {
        let m = motion(ClockTime::new(0, 0, 59), ClockTime::new(0, 1, 0));
        assert!((m.sweep(Hand::Second) - 1.0 / 60.0).abs() < 1e-12);
        assert!(m.sweep(Hand::Minute) > 0.0);
    }

    #[test]
    fn sweep_runs_backwards_when_time_is_set_back() {
        let m = motion(ClockTime::new(0, 0, 10), ClockTime::new(0, 0, 5));
        assert!((m.sweep(Hand::Second) + 5.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn halfway_across_twelve_stays_near_top() {
        let m = motion(ClockTime::new(0, 0, 59), ClockTime::new(0, 1, 0));
        let mid = m.at(0.5).second;
        assert!((mid - 119.0 / 120.0).abs() < 1e-12, "second hand at {mid}");
    }

    #[test]
    fn at_hits_endpoints_and_clamps() {
        let m = motion(ClockTime::new(2, 15, 0), ClockTime::new(2, 16, 30));
        assert_eq!(m.at(0.0), m.from);
        assert!((m.at(1.0).minute - m.to.minute).abs() < 1e-12);
        assert_eq!(m.at(-3.0), m.at(0.0));
        assert_eq!(m.at(7.0), m.at(1.0));
    }
}
