//! Analog clock: time-to-angle conversion, hand geometry and the
//! [`ClockView`] widget that hosts them.
//!
//! The two computations are pure functions:
//!
//! - [`compute_angles`] maps hours/minutes/seconds to three rotation
//!   fractions with compound sweep (the minute hand creeps with the seconds,
//!   the hour hand with minutes and seconds).
//! - [`compute_hand_geometry`] sizes one hand and places its rotation pivot
//!   for a given face diameter and [`HandStyle`].
//!
//! [`ClockView`] owns the mutable state (time, style, bounds) and calls them
//! explicitly whenever an input changes.

use std::fmt;

pub mod angles;
pub mod geometry;
pub mod style;
pub mod transition;
pub mod view;

pub use angles::{compute_angles, AngleSet, ClockTime};
pub use geometry::{compute_hand_geometry, layout_clock, ClockLayout, HandGeometry};
pub use style::{CenterStyle, ClockStyle, FaceStyle, HandAppearance, HandStyle};
pub use transition::{HandMotion, Transition};
pub use view::{ClockView, Part};

/// One of the three clock hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// All hands in paint order (back to front).
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Hand::Hour => 0,
            Hand::Minute => 1,
            Hand::Second => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Hand::Hour => "hour",
            Hand::Minute => "minute",
            Hand::Second => "second",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
