use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

use crate::clock::Hand;
use crate::error::ClockError;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_HALF_DAY: i64 = 43_200;
const SECONDS_PER_DAY: i64 = 86_400;

// ── ClockTime ─────────────────────────────────────────────────────────────

/// Wall-clock time shown by the clock.
///
/// Fields are not range-checked; every consumer normalizes with Euclidean
/// modulo, so `25:61:-1` is a valid (if odd) value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClockTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ClockTime {
    #[inline]
    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Hours, minutes and seconds of any chrono time or datetime.
    /// Sub-second precision is dropped.
    pub fn from_timelike<T: Timelike>(value: &T) -> Self {
        Self::new(
            i64::from(value.hour()),
            i64::from(value.minute()),
            i64::from(value.second()),
        )
    }

    #[inline]
    pub fn angles(self) -> AngleSet {
        compute_angles(self.hours, self.minutes, self.seconds)
    }

    /// Each field reduced into its natural range (`0..24`, `0..60`, `0..60`).
    /// Fields are reduced independently; there is no carry.
    pub fn normalized(self) -> Self {
        Self::new(
            self.hours.rem_euclid(24),
            self.minutes.rem_euclid(60),
            self.seconds.rem_euclid(60),
        )
    }

    /// Seconds since midnight of the normalized time.
    pub fn seconds_of_day(self) -> i64 {
        let n = self.normalized();
        n.hours * SECONDS_PER_HOUR + n.minutes * SECONDS_PER_MINUTE + n.seconds
    }

    /// The time `delta` seconds later (or earlier), wrapping at midnight.
    pub fn advanced_by(self, delta: i64) -> Self {
        let total = (self.seconds_of_day() + delta.rem_euclid(SECONDS_PER_DAY))
            .rem_euclid(SECONDS_PER_DAY);
        Self::new(
            total / SECONDS_PER_HOUR,
            (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            total % SECONDS_PER_MINUTE,
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Parses `HH:MM` or `HH:MM:SS`. Values are taken as written, without range
/// checks, to match the normalizing semantics of [`compute_angles`].
impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(ClockError::InvalidTime(format!(
                "expected HH:MM or HH:MM:SS, got {s:?}"
            )));
        }

        let field = |text: &str, name: &str| -> Result<i64, ClockError> {
            text.trim()
                .parse::<i64>()
                .map_err(|e| ClockError::InvalidTime(format!("{name} {text:?}: {e}")))
        };

        let hours = field(parts[0], "hours")?;
        let minutes = field(parts[1], "minutes")?;
        let seconds = match parts.get(2) {
            Some(text) => field(*text, "seconds")?,
            None => 0,
        };
        Ok(Self::new(hours, minutes, seconds))
    }
}

// ── AngleSet ──────────────────────────────────────────────────────────────

/// Hand positions as fractions of a full clockwise turn from 12 o'clock.
///
/// Each value lies in `[0, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AngleSet {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl AngleSet {
    #[inline]
    pub fn fraction(self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    #[inline]
    pub fn radians(self, hand: Hand) -> f64 {
        self.fraction(hand) * std::f64::consts::TAU
    }

    #[inline]
    pub fn degrees(self, hand: Hand) -> f64 {
        self.fraction(hand) * 360.0
    }
}

// ── conversion ────────────────────────────────────────────────────────────

/// Converts a wall-clock time to hand rotation fractions.
///
/// The hour hand sweeps once per 12 hours and the minute hand once per hour,
/// both continuously: `compute_angles(0, 0, 59)` and `compute_angles(0, 1, 0)`
/// differ by one second's worth of minute-hand travel, not a whole step.
/// Negative inputs wrap into range.
pub fn compute_angles(hours: i64, minutes: i64, seconds: i64) -> AngleSet {
    let h = hours.rem_euclid(12);
    let m = minutes.rem_euclid(60);
    let s = seconds.rem_euclid(60);

    let into_hour = m * SECONDS_PER_MINUTE + s;
    let into_half_day = h * SECONDS_PER_HOUR + into_hour;

    AngleSet {
        hour: into_half_day as f64 / SECONDS_PER_HALF_DAY as f64,
        minute: into_hour as f64 / SECONDS_PER_HOUR as f64,
        second: s as f64 / SECONDS_PER_MINUTE as f64,
    }
}
