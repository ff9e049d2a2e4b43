use core::cell::Cell;

use crate::coords::Vec2;
use crate::error::PositionError;
use crate::time::FrameTime;

use super::{MemberId, Stage};

/// Read-only view of the stage at one instant, handed to `draw` and `position`.
///
/// Followers resolve their targets through it. Chained lookups are counted
/// and cut off at [`StageConfig::max_follow_depth`](super::StageConfig).
pub struct Scene<'a> {
    stage: &'a Stage,
    frame: &'a FrameTime,
    depth: Cell<u32>,
}

impl<'a> Scene<'a> {
    pub(crate) fn new(stage: &'a Stage, frame: &'a FrameTime) -> Self {
        Self { stage, frame, depth: Cell::new(0) }
    }

    #[inline]
    pub fn frame(&self) -> &FrameTime {
        self.frame
    }

    /// Seconds since the host clock epoch.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.frame.elapsed
    }

    #[inline]
    pub fn stage(&self) -> &Stage {
        self.stage
    }

    /// Resolves the current position of `id`.
    ///
    /// `Ok(None)` when the member is gone or has no location. A broken orbit
    /// anywhere along a follow chain is reported with the orbiting member named.
    pub fn position_of(&self, id: MemberId) -> Result<Option<Vec2>, PositionError> {
        let Some(member) = self.stage.member(id) else {
            return Ok(None);
        };

        let depth = self.depth.get();
        let limit = self.stage.config().max_follow_depth;
        if depth >= limit {
            return Err(PositionError::FollowDepthExceeded { target: id, limit });
        }

        self.depth.set(depth + 1);
        let resolved = member.position(self);
        self.depth.set(depth);
        resolved.map_err(|err| err.attributed_to(id))
    }
}
