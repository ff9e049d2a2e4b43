//! Proscenium — a retained, z-ordered scene graph for immediate-mode 2D hosts.
//!
//! The crate decides *what* to draw and *in which order*; the host canvas does
//! the drawing. A [`Stage`](scene::Stage) holds scene members back-to-front and
//! dispatches `update` / `draw` each frame. Visible members are
//! [`Styled`](scene::Styled) geometries whose [`Style`](paint::Style) is applied
//! inside a saved paint scope, and whose location may follow or orbit another
//! member.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use proscenium::prelude::*;
//!
//! let mut stage = Stage::new();
//!
//! let mut sun = shapes::circle();
//! sun.set_xy(400.0, 300.0).set_radius(40.0).set_fill_color(Color::from_srgb_u8(255, 200, 0, 255));
//! let sun = stage.add(sun);
//!
//! let mut earth = shapes::circle();
//! earth.set_radius(10.0).set_location(Orbiter::new(sun).with_radius(150.0));
//! let earth = stage.add(earth);
//!
//! let mut label = shapes::text("Earth");
//! label.set_location(Follower::new(earth).with_offset(0.0, -20.0));
//! stage.add(label);
//!
//! // In your frame callback, with any `Canvas` implementation:
//! let frame = clock.tick();
//! stage.update(&frame);
//! stage.draw(&mut canvas, &frame)?;
//! ```
//!
//! # Custom members
//!
//! Implement [`SceneMember`](scene::SceneMember) for anything that should be
//! updated or drawn, or implement [`Geometry`](scene::Geometry) and wrap it in
//! `Styled` to get style handling for free.

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod position;
pub mod render;
pub mod scene;
pub mod time;

/// Everything needed to build a scene — import this in your frame code.
pub mod prelude {
    pub use crate::coords::Vec2;
    pub use crate::error::{MemberError, PositionError, StageError};
    pub use crate::paint::{Color, Font, HorizontalAlign, Style, VerticalAlign};
    pub use crate::position::{Anchor, Follower, Orbiter, PositionSource};
    pub use crate::render::{Canvas, PaintCtx, PaintScope, RecordingCanvas};
    pub use crate::scene::shapes;
    pub use crate::scene::{
        Capabilities, DrawErrorPolicy, FrameReport, Geometry, MemberId, Scene, SceneMember, Stage,
        StageConfig, Styled,
    };
    pub use crate::time::{FrameClock, FrameTime};
}
