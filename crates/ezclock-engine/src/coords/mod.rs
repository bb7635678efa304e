//! Coordinate and geometry types shared by the clock layout and the draw list.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations follow the same convention: positive angles turn clockwise on
//! screen, so a hand pointing at 12 o'clock rotated by a quarter turn points
//! at 3 o'clock.

mod rect;
mod rotation;
mod vec2;

pub use rect::Rect;
pub use rotation::Rotation;
pub use vec2::Vec2;
