//! Position sources: stored points and points derived from other members.
//!
//! A shape's location is an [`Anchor`]:
//! - `Fixed`: a stored point, readable and writable
//! - `Follow`: a [`Follower`], the target's position plus an offset
//! - `Orbit`: an [`Orbiter`], a point circling the target over time
//!
//! Derived anchors are recomputed on every read and refuse writes.

mod follower;
mod orbiter;

pub use follower::Follower;
pub use orbiter::Orbiter;

use crate::coords::Vec2;
use crate::error::PositionError;
use crate::scene::Scene;

/// Something that presents itself as a 2D point.
pub trait PositionSource {
    /// Current coordinate, recomputed from `scene` on every call.
    fn read(&self, scene: &Scene<'_>) -> Result<Vec2, PositionError>;

    /// Stores `to` if the coordinate is not derived. Returns whether it was stored.
    fn try_write(&mut self, to: Vec2) -> bool;
}

/// Location strategy of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    Fixed(Vec2),
    Follow(Follower),
    Orbit(Orbiter),
}

impl Anchor {
    /// Returns true when reads are computed from another member.
    #[inline]
    pub fn is_derived(&self) -> bool {
        !matches!(self, Anchor::Fixed(_))
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::Fixed(Vec2::zero())
    }
}

impl PositionSource for Anchor {
    fn read(&self, scene: &Scene<'_>) -> Result<Vec2, PositionError> {
        match self {
            Anchor::Fixed(p) => Ok(*p),
            Anchor::Follow(f) => f.read(scene),
            Anchor::Orbit(o) => o.read(scene),
        }
    }

    fn try_write(&mut self, to: Vec2) -> bool {
        match self {
            Anchor::Fixed(p) => {
                *p = to;
                true
            }
            Anchor::Follow(f) => f.try_write(to),
            Anchor::Orbit(o) => o.try_write(to),
        }
    }
}

impl From<Vec2> for Anchor {
    fn from(p: Vec2) -> Self {
        Anchor::Fixed(p)
    }
}

impl From<Follower> for Anchor {
    fn from(f: Follower) -> Self {
        Anchor::Follow(f)
    }
}

impl From<Orbiter> for Anchor {
    fn from(o: Orbiter) -> Self {
        Anchor::Orbit(o)
    }
}
