//! Time subsystem.
//!
//! Provides the host clock the scene reads elapsed time from.
//! Intended usage:
//! - one `FrameClock` per stage (or per render loop)
//! - call `tick()` once per frame and pass the `FrameTime` to `Stage::update` / `Stage::draw`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
