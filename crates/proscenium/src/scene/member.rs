use core::any::Any;

use crate::coords::Vec2;
use crate::error::{MemberError, PositionError};
use crate::render::Canvas;
use crate::time::FrameTime;

use super::Scene;

/// Per-frame hooks a member opts into.
///
/// Captured once when the member is added; the stage never calls a hook the
/// member did not declare.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Capabilities {
    pub update: bool,
    pub draw: bool,
}

impl Capabilities {
    pub const NONE: Self = Self { update: false, draw: false };
    pub const UPDATE: Self = Self { update: true, draw: false };
    pub const DRAW: Self = Self { update: false, draw: true };
    pub const ALL: Self = Self { update: true, draw: true };
}

/// Anything a [`Stage`](super::Stage) can hold.
///
/// Every hook has a no-op default; implement the ones matching the declared
/// [`Capabilities`]. Members that have a location also report it through
/// [`position`](Self::position) so followers can track them.
///
/// # Implementing a custom member
///
/// ```rust,ignore
/// struct Spinner { angle: f32 }
///
/// impl SceneMember for Spinner {
///     fn capabilities(&self) -> Capabilities { Capabilities::UPDATE }
///     fn update(&mut self, frame: &FrameTime) -> Result<(), MemberError> {
///         self.angle += frame.dt;
///         Ok(())
///     }
/// }
/// ```
pub trait SceneMember: Any {
    fn capabilities(&self) -> Capabilities;

    fn update(&mut self, _frame: &FrameTime) -> Result<(), MemberError> {
        Ok(())
    }

    fn draw(&self, _canvas: &mut dyn Canvas, _scene: &Scene<'_>) -> Result<(), MemberError> {
        Ok(())
    }

    /// Current location, or `None` for members without one.
    ///
    /// Must be recomputed on each call; derived positions are never cached.
    fn position(&self, _scene: &Scene<'_>) -> Result<Option<Vec2>, PositionError> {
        Ok(None)
    }

    /// Moves the member. Returns `false` when the location is derived or absent.
    fn try_set_position(&mut self, _to: Vec2) -> bool {
        false
    }
}
