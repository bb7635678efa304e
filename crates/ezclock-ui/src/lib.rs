//! EZClock UI — an analog clock widget on top of `ezclock-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ezclock_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut clock = ClockView::new(ClockStyle::default())?;
//!
//! // Whenever the time changes:
//! let motion = clock.set_time_of(&chrono::Local::now(), Transition::animated());
//! // Hand `motion.from` / `motion.to` to your animator, or just repaint:
//! let draw_list = scene.frame(&mut clock, viewport);
//! ```
//!
//! The geometry and angle computations are usable on their own:
//!
//! ```rust,ignore
//! let angles = compute_angles(3, 15, 0);
//! let hour = compute_hand_geometry(100.0, HandStyle::new(0.5, 4.0, 2.0), Vec2::new(50.0, 50.0))?;
//! let corners = hour.corners(angles.hour);
//! ```

pub mod clock;
pub mod constraints;
pub mod error;
pub mod painter;
pub mod scene;
pub mod widget;

pub use clock::ClockView;
pub use error::{ClockError, GeometryError};

/// Everything needed to host a clock.
pub mod prelude {
    pub use crate::clock::{
        compute_angles, compute_hand_geometry, layout_clock, AngleSet, CenterStyle, ClockLayout,
        ClockStyle, ClockTime, ClockView, FaceStyle, Hand, HandAppearance, HandGeometry,
        HandMotion, HandStyle, Transition,
    };
    pub use crate::constraints::Constraints;
    pub use crate::error::{ClockError, GeometryError};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;

    // Re-export the engine primitives everyone needs.
    pub use ezclock_engine::coords::{Rect, Rotation, Vec2};
    pub use ezclock_engine::paint::Color;
    pub use ezclock_engine::scene::{Border, DrawCmd, DrawList};
}
