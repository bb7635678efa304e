//! EZClock engine crate.
//!
//! Renderer-agnostic primitives used by the clock widget: logical-pixel
//! coordinates, premultiplied colors, and the z-ordered draw stream the
//! widget paints into.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
