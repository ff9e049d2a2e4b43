use core::f64::consts::TAU;

use crate::coords::Vec2;
use crate::error::PositionError;
use crate::scene::{MemberId, Scene};

use super::{Follower, PositionSource};

/// Circles a target member at a fixed radius, driven by the host clock.
///
/// ```text
/// angle    = start_angle + angular_velocity * elapsed_seconds
/// position = target + radius * (cos angle, sin angle)
/// ```
///
/// Angles are stored in radians and velocities in radians per second; the
/// degree setters convert on the way in. Unlike [`Follower`] there is no
/// fallback: reading while the target has no position is an error. The
/// follower offset is carried but not added to the orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbiter {
    base: Follower,
    radius: f32,
    start_angle: f32,
    angular_velocity: f32,
}

impl Orbiter {
    /// Default angular velocity, in radians per second.
    pub const DEFAULT_VELOCITY: f32 = 0.1;

    pub fn new(target: MemberId) -> Self {
        Self {
            base: Follower::new(target),
            radius: 0.0,
            start_angle: 0.0,
            angular_velocity: Self::DEFAULT_VELOCITY,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_start_angle_radians(mut self, radians: f32) -> Self {
        self.start_angle = radians;
        self
    }

    pub fn with_velocity_radians(mut self, radians_per_sec: f32) -> Self {
        self.angular_velocity = radians_per_sec;
        self
    }

    pub fn set_target(&mut self, target: MemberId) -> &mut Self {
        self.base.set_target(target);
        self
    }

    /// Stores an offset for parity with [`Follower`]. Not used by the orbit.
    pub fn set_offset(&mut self, x: f32, y: f32) -> &mut Self {
        self.base.set_offset(x, y);
        self
    }

    /// Radius in host units.
    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        self.radius = radius;
        self
    }

    pub fn set_start_angle_radians(&mut self, radians: f32) -> &mut Self {
        self.start_angle = radians;
        self
    }

    pub fn set_start_angle_degrees(&mut self, degrees: f32) -> &mut Self {
        self.start_angle = degrees.to_radians();
        self
    }

    pub fn set_velocity_radians(&mut self, radians_per_sec: f32) -> &mut Self {
        self.angular_velocity = radians_per_sec;
        self
    }

    pub fn set_velocity_degrees(&mut self, degrees_per_sec: f32) -> &mut Self {
        self.angular_velocity = degrees_per_sec.to_radians();
        self
    }

    #[inline]
    pub fn target(&self) -> MemberId {
        self.base.target()
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.base.offset()
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    #[inline]
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Orbit angle in radians at `elapsed` seconds, wrapped to `[0, TAU)`.
    ///
    /// Computed in f64 so long-running scenes keep sub-pixel precision.
    pub fn angle_at(&self, elapsed: f64) -> f32 {
        let angle = self.start_angle as f64 + self.angular_velocity as f64 * elapsed;
        angle.rem_euclid(TAU) as f32
    }
}

impl PositionSource for Orbiter {
    fn read(&self, scene: &Scene<'_>) -> Result<Vec2, PositionError> {
        let target = self.base.target();
        let center = scene
            .position_of(target)?
            .ok_or(PositionError::MissingTarget { orbiter: None, target })?;
        Ok(center + Vec2::from_angle(self.angle_at(scene.elapsed())) * self.radius)
    }

    /// Orbit positions are derived from time; writes are ignored.
    fn try_write(&mut self, _to: Vec2) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::PI;

    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::scene::shapes;
    use crate::scene::Stage;
    use crate::time::FrameTime;

    fn stage_with_point(x: f32, y: f32) -> (Stage, MemberId) {
        let mut stage = Stage::new();
        let mut point = shapes::point();
        point.set_xy(x, y);
        let id = stage.add(point);
        (stage, id)
    }

    fn read_at(orbiter: &Orbiter, stage: &Stage, elapsed: f64) -> Vec2 {
        orbiter.read(&stage.scene(&FrameTime::at(elapsed))).unwrap()
    }

    #[test]
    fn stationary_orbit_sits_on_start_angle() {
        let (stage, sun) = stage_with_point(0.0, 0.0);
        let mut orbiter = Orbiter::new(sun);
        orbiter.set_radius(10.0).set_start_angle_radians(0.0).set_velocity_radians(0.0);

        for t in [0.0, 1.0, 37.5, 10_000.0] {
            let p = read_at(&orbiter, &stage, t);
            assert_approx_eq!(f32, p.x, 10.0, epsilon = 1e-5);
            assert_approx_eq!(f32, p.y, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn half_turn_after_one_second_at_pi() {
        let (stage, sun) = stage_with_point(0.0, 0.0);
        let mut orbiter = Orbiter::new(sun);
        orbiter.set_radius(10.0).set_velocity_radians(PI);

        let p = read_at(&orbiter, &stage, 1.0);
        assert_approx_eq!(f32, p.x, -10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, p.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn same_orbiter_moves_with_time() {
        let (stage, sun) = stage_with_point(0.0, 0.0);
        let mut orbiter = Orbiter::new(sun);
        orbiter.set_radius(10.0).set_velocity_radians(PI / 2.0);

        let start = read_at(&orbiter, &stage, 0.0);
        assert_approx_eq!(f32, start.x, 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, start.y, 0.0, epsilon = 1e-4);

        let later = read_at(&orbiter, &stage, 1.0);
        assert_approx_eq!(f32, later.x, 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, later.y, 10.0, epsilon = 1e-4);

        let again = read_at(&orbiter, &stage, 0.0);
        assert_approx_eq!(f32, again.x, start.x, epsilon = 1e-6);
        assert_approx_eq!(f32, again.y, start.y, epsilon = 1e-6);
    }

    #[test]
    fn orbits_around_moving_target() {
        let (mut stage, sun) = stage_with_point(100.0, 50.0);
        let orbiter = Orbiter::new(sun)
            .with_radius(5.0)
            .with_start_angle_radians(PI / 2.0)
            .with_velocity_radians(0.0);

        let p = read_at(&orbiter, &stage, 0.0);
        assert_approx_eq!(f32, p.x, 100.0, epsilon = 1e-4);
        assert_approx_eq!(f32, p.y, 55.0, epsilon = 1e-4);

        stage.try_set_position(sun, Vec2::new(0.0, 0.0));
        let p = read_at(&orbiter, &stage, 0.0);
        assert_approx_eq!(f32, p.x, 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, p.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn degree_setters_match_radian_setters() {
        let (_, sun) = stage_with_point(0.0, 0.0);

        let mut by_degrees = Orbiter::new(sun);
        by_degrees.set_start_angle_degrees(180.0).set_velocity_degrees(90.0);

        let mut by_radians = Orbiter::new(sun);
        by_radians
            .set_start_angle_radians(180f32.to_radians())
            .set_velocity_radians(90f32.to_radians());

        assert_eq!(by_degrees, by_radians);
        assert_approx_eq!(f32, by_degrees.start_angle(), PI);
        assert_approx_eq!(f32, by_degrees.angular_velocity(), PI / 2.0);
    }

    #[test]
    fn offset_does_not_shift_the_orbit() {
        let (stage, sun) = stage_with_point(0.0, 0.0);
        let mut orbiter = Orbiter::new(sun);
        orbiter.set_radius(10.0).set_velocity_radians(0.0).set_offset(500.0, 500.0);

        let p = read_at(&orbiter, &stage, 3.0);
        assert_approx_eq!(f32, p.x, 10.0, epsilon = 1e-5);
        assert_approx_eq!(f32, p.y, 0.0, epsilon = 1e-5);
        assert_eq!(orbiter.offset(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn missing_target_is_an_error_naming_the_target() {
        let (mut stage, sun) = stage_with_point(0.0, 0.0);
        let orbiter = Orbiter::new(sun).with_radius(10.0);
        stage.remove(sun);

        let err = orbiter.read(&stage.scene(&FrameTime::at(0.0))).unwrap_err();
        assert_eq!(err, PositionError::MissingTarget { orbiter: None, target: sun });
    }

    #[test]
    fn writes_are_ignored() {
        let (stage, sun) = stage_with_point(0.0, 0.0);
        let mut orbiter = Orbiter::new(sun).with_radius(3.0).with_velocity_radians(0.0);
        let before = read_at(&orbiter, &stage, 2.0);
        assert!(!orbiter.try_write(Vec2::new(42.0, 42.0)));
        assert_eq!(read_at(&orbiter, &stage, 2.0), before);
    }

    #[test]
    fn angle_wraps_into_one_turn() {
        let (_, sun) = stage_with_point(0.0, 0.0);
        let orbiter = Orbiter::new(sun).with_start_angle_radians(-PI / 2.0).with_velocity_radians(0.0);
        assert_approx_eq!(f32, orbiter.angle_at(0.0), 1.5 * PI, epsilon = 1e-5);
    }
}
