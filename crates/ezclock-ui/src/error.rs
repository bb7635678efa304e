use std::fmt;

use crate::clock::Hand;

/// Why a hand's geometry cannot be computed.
///
/// Every variant is a degenerate-geometry condition: computing a pivot from
/// such input would divide by a zero length or place the pivot outside the
/// hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// An input was NaN or infinite.
    NonFinite,
    /// `length_ratio` must be strictly positive.
    NonPositiveLengthRatio { length_ratio: f32 },
    /// The hand ended up with no length (e.g. a zero-sized face).
    DegenerateLength { hand_length: f32 },
    NonPositiveThickness { thickness: f32 },
    NegativeOffset { offset: f32 },
    /// The pivot would sit at or beyond the far end of the hand.
    OffsetTooLarge { offset: f32, hand_length: f32 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "degenerate geometry: non-finite input"),
            Self::NonPositiveLengthRatio { length_ratio } => {
                write!(f, "degenerate geometry: length ratio {length_ratio} must be > 0")
            }
            Self::DegenerateLength { hand_length } => {
                write!(f, "degenerate geometry: hand length {hand_length} must be > 0")
            }
            Self::NonPositiveThickness { thickness } => {
                write!(f, "degenerate geometry: thickness {thickness} must be > 0")
            }
            Self::NegativeOffset { offset } => {
                write!(f, "degenerate geometry: offset {offset} must not be negative")
            }
            Self::OffsetTooLarge { offset, hand_length } => write!(
                f,
                "degenerate geometry: offset {offset} must be smaller than hand length {hand_length}"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Errors surfaced by the clock widget to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// A hand style was rejected at configuration time.
    InvalidStyle { hand: Hand, source: GeometryError },
    /// A hand could not be laid out in the current bounds.
    Layout { hand: Hand, source: GeometryError },
    /// Time text could not be parsed.
    InvalidTime(String),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStyle { hand, .. } => write!(f, "invalid style for the {hand} hand"),
            Self::Layout { hand, .. } => write!(f, "cannot lay out the {hand} hand"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidStyle { source, .. } | Self::Layout { source, .. } => Some(source),
            Self::InvalidTime(_) => None,
        }
    }
}
