//! Scene graph types.
//!
//! Responsibilities:
//! - hold scene members in z-order and dispatch `update` / `draw` per frame
//! - compose geometry with a [`Style`](crate::paint::Style) ([`Styled`])
//! - resolve member positions for followers and orbiters ([`Scene`])
//! - keep shape-specific code isolated per shape file under `scene::shapes`

mod config;
mod key;
mod member;
mod resolve;
mod stage;
mod styled;

pub mod shapes;

pub use config::{DrawErrorPolicy, StageConfig};
pub use key::MemberId;
pub use member::{Capabilities, SceneMember};
pub use resolve::Scene;
pub use stage::{FrameReport, MemberFailure, Phase, Stage};
pub use styled::{Geometry, Styled};
