use crate::coords::Vec2;
use crate::error::PositionError;
use crate::scene::{MemberId, Scene};

use super::PositionSource;

/// Tracks another member's position plus a fixed offset.
///
/// The target is a stage handle, not a reference: the follower never owns or
/// keeps its target alive. When the target has no position (removed, or a
/// member without a location) the follower reads its stored fallback point,
/// without the offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Follower {
    target: MemberId,
    offset: Vec2,
    fallback: Vec2,
}

impl Follower {
    pub fn new(target: MemberId) -> Self {
        Self { target, offset: Vec2::zero(), fallback: Vec2::zero() }
    }

    /// Sets the point read while the target has no position.
    pub fn with_fallback(mut self, fallback: Vec2) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }

    pub fn set_target(&mut self, target: MemberId) -> &mut Self {
        self.target = target;
        self
    }

    pub fn set_offset(&mut self, x: f32, y: f32) -> &mut Self {
        self.offset = Vec2::new(x, y);
        self
    }

    #[inline]
    pub fn target(&self) -> MemberId {
        self.target
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn fallback(&self) -> Vec2 {
        self.fallback
    }
}

impl PositionSource for Follower {
    fn read(&self, scene: &Scene<'_>) -> Result<Vec2, PositionError> {
        Ok(match scene.position_of(self.target)? {
            Some(p) => p + self.offset,
            None => self.fallback,
        })
    }

    /// Followers are views of their target; writes are ignored.
    fn try_write(&mut self, _to: Vec2) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::shapes;
    use crate::scene::Stage;
    use crate::time::FrameTime;

    const NOW: FrameTime = FrameTime::at(0.0);

    fn stage_with_point(x: f32, y: f32) -> (Stage, MemberId) {
        let mut stage = Stage::new();
        let mut point = shapes::point();
        point.set_xy(x, y);
        let id = stage.add(point);
        (stage, id)
    }

    #[test]
    fn reads_target_plus_offset() {
        let (stage, target) = stage_with_point(10.0, 20.0);
        let follower = Follower::new(target).with_offset(3.0, -4.0);
        assert_eq!(follower.read(&stage.scene(&NOW)), Ok(Vec2::new(13.0, 16.0)));
    }

    #[test]
    fn tracks_target_moves_without_caching() {
        let (mut stage, target) = stage_with_point(0.0, 0.0);
        let follower = Follower::new(target).with_offset(1.0, 1.0);
        assert_eq!(follower.read(&stage.scene(&NOW)), Ok(Vec2::new(1.0, 1.0)));

        assert!(stage.try_set_position(target, Vec2::new(50.0, 60.0)));
        assert_eq!(follower.read(&stage.scene(&NOW)), Ok(Vec2::new(51.0, 61.0)));
    }

    #[test]
    fn falls_back_without_offset_when_target_has_no_position() {
        let (mut stage, target) = stage_with_point(5.0, 5.0);
        let line = stage.add(shapes::line());

        let mut follower = Follower::new(target)
            .with_offset(100.0, 100.0)
            .with_fallback(Vec2::new(7.0, 8.0));
        follower.set_target(line);
        assert_eq!(follower.read(&stage.scene(&NOW)), Ok(Vec2::new(7.0, 8.0)));
    }

    #[test]
    fn falls_back_after_target_removed() {
        let (mut stage, target) = stage_with_point(5.0, 5.0);
        let follower = Follower::new(target).with_fallback(Vec2::new(-1.0, -2.0));
        stage.remove(target);
        // The freed slot is reused; the stale handle must not alias the newcomer.
        stage.add(shapes::point());
        assert_eq!(follower.read(&stage.scene(&NOW)), Ok(Vec2::new(-1.0, -2.0)));
    }

    #[test]
    fn writes_are_ignored() {
        let (stage, target) = stage_with_point(2.0, 3.0);
        let mut follower = Follower::new(target).with_offset(1.0, 0.0);
        let before = follower.read(&stage.scene(&NOW));

        assert!(!follower.try_write(Vec2::new(999.0, 999.0)));
        assert_eq!(follower.read(&stage.scene(&NOW)), before);
        assert_eq!(follower.offset(), Vec2::new(1.0, 0.0));
        assert_eq!(stage.position_of(target, &NOW), Ok(Some(Vec2::new(2.0, 3.0))));
    }
}
